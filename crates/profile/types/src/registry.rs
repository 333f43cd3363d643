//! Capability block registry
//!
//! Every capability domain a profile can constrain is a `BlockTypeId`
//! variant. Each variant owns a static field schema: the field names, their
//! value kinds, and for numeric fields the comparison direction. The
//! direction is declared here and never inferred from values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison direction for numeric limit fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bound {
    /// Satisfied iff reported >= required
    AtLeast,
    /// Satisfied iff reported <= required
    AtMost,
    /// Satisfied iff reported == required
    Exact,
}

/// Declared kind of a capability field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Bool,
    U32(Bound),
    U64(Bound),
    I32(Bound),
    F32(Bound),
    Enum,
    StringSet,
}

impl FieldKind {
    pub fn describe(&self) -> &'static str {
        match self {
            FieldKind::Bool => "a boolean",
            FieldKind::U32(_) => "an unsigned 32-bit integer",
            FieldKind::U64(_) => "an unsigned 64-bit integer",
            FieldKind::I32(_) => "a signed 32-bit integer",
            FieldKind::F32(_) => "a finite floating-point number",
            FieldKind::Enum => "an enumerant name",
            FieldKind::StringSet => "an array of strings",
        }
    }
}

/// One field of a block schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Whether a block describes toggleable features or read-only properties.
///
/// Only feature blocks take part in device creation requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Features,
    Properties,
}

/// Identifies which capability domain a block describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BlockTypeId {
    #[serde(rename = "VkPhysicalDeviceFeatures")]
    PhysicalDeviceFeatures,
    #[serde(rename = "VkPhysicalDeviceLimits")]
    PhysicalDeviceLimits,
    #[serde(rename = "VkPhysicalDeviceVulkan11Features")]
    Vulkan11Features,
    #[serde(rename = "VkPhysicalDeviceVulkan12Features")]
    Vulkan12Features,
    #[serde(rename = "VkPhysicalDeviceVulkan13Features")]
    Vulkan13Features,
    #[serde(rename = "VkPhysicalDeviceVulkan12Properties")]
    Vulkan12Properties,
    #[serde(rename = "VkPhysicalDeviceSubgroupProperties")]
    SubgroupProperties,
    #[serde(rename = "VkPhysicalDeviceShaderFloat16Int8Features")]
    ShaderFloat16Int8Features,
}

impl BlockTypeId {
    pub const ALL: [BlockTypeId; 8] = [
        BlockTypeId::PhysicalDeviceFeatures,
        BlockTypeId::PhysicalDeviceLimits,
        BlockTypeId::Vulkan11Features,
        BlockTypeId::Vulkan12Features,
        BlockTypeId::Vulkan13Features,
        BlockTypeId::Vulkan12Properties,
        BlockTypeId::SubgroupProperties,
        BlockTypeId::ShaderFloat16Int8Features,
    ];

    /// Tag used for this block in profile documents and device reports.
    pub fn tag(&self) -> &'static str {
        match self {
            BlockTypeId::PhysicalDeviceFeatures => "VkPhysicalDeviceFeatures",
            BlockTypeId::PhysicalDeviceLimits => "VkPhysicalDeviceLimits",
            BlockTypeId::Vulkan11Features => "VkPhysicalDeviceVulkan11Features",
            BlockTypeId::Vulkan12Features => "VkPhysicalDeviceVulkan12Features",
            BlockTypeId::Vulkan13Features => "VkPhysicalDeviceVulkan13Features",
            BlockTypeId::Vulkan12Properties => "VkPhysicalDeviceVulkan12Properties",
            BlockTypeId::SubgroupProperties => "VkPhysicalDeviceSubgroupProperties",
            BlockTypeId::ShaderFloat16Int8Features => "VkPhysicalDeviceShaderFloat16Int8Features",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.tag() == tag)
    }

    /// Rust path of this variant, used when emitting generated tables.
    pub fn variant_name(&self) -> &'static str {
        match self {
            BlockTypeId::PhysicalDeviceFeatures => "PhysicalDeviceFeatures",
            BlockTypeId::PhysicalDeviceLimits => "PhysicalDeviceLimits",
            BlockTypeId::Vulkan11Features => "Vulkan11Features",
            BlockTypeId::Vulkan12Features => "Vulkan12Features",
            BlockTypeId::Vulkan13Features => "Vulkan13Features",
            BlockTypeId::Vulkan12Properties => "Vulkan12Properties",
            BlockTypeId::SubgroupProperties => "SubgroupProperties",
            BlockTypeId::ShaderFloat16Int8Features => "ShaderFloat16Int8Features",
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            BlockTypeId::PhysicalDeviceFeatures
            | BlockTypeId::Vulkan11Features
            | BlockTypeId::Vulkan12Features
            | BlockTypeId::Vulkan13Features
            | BlockTypeId::ShaderFloat16Int8Features => BlockKind::Features,
            BlockTypeId::PhysicalDeviceLimits
            | BlockTypeId::Vulkan12Properties
            | BlockTypeId::SubgroupProperties => BlockKind::Properties,
        }
    }

    /// Static field schema of this block type.
    pub fn fields(&self) -> &'static [FieldSchema] {
        match self {
            BlockTypeId::PhysicalDeviceFeatures => PHYSICAL_DEVICE_FEATURES,
            BlockTypeId::PhysicalDeviceLimits => PHYSICAL_DEVICE_LIMITS,
            BlockTypeId::Vulkan11Features => VULKAN_11_FEATURES,
            BlockTypeId::Vulkan12Features => VULKAN_12_FEATURES,
            BlockTypeId::Vulkan13Features => VULKAN_13_FEATURES,
            BlockTypeId::Vulkan12Properties => VULKAN_12_PROPERTIES,
            BlockTypeId::SubgroupProperties => SUBGROUP_PROPERTIES,
            BlockTypeId::ShaderFloat16Int8Features => SHADER_FLOAT16_INT8_FEATURES,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSchema> {
        self.fields().iter().find(|f| f.name == name)
    }
}

impl fmt::Display for BlockTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

const fn field(name: &'static str, kind: FieldKind) -> FieldSchema {
    FieldSchema { name, kind }
}

const BOOL: FieldKind = FieldKind::Bool;
const U32_MIN: FieldKind = FieldKind::U32(Bound::AtLeast);
const U32_EXACT: FieldKind = FieldKind::U32(Bound::Exact);
const U64_MIN: FieldKind = FieldKind::U64(Bound::AtLeast);
const U64_MAX: FieldKind = FieldKind::U64(Bound::AtMost);
const I32_MAX: FieldKind = FieldKind::I32(Bound::AtMost);
const F32_MIN: FieldKind = FieldKind::F32(Bound::AtLeast);
const F32_MAX: FieldKind = FieldKind::F32(Bound::AtMost);
const ENUM: FieldKind = FieldKind::Enum;
const SET: FieldKind = FieldKind::StringSet;

static PHYSICAL_DEVICE_FEATURES: &[FieldSchema] = &[
    field("robustBufferAccess", BOOL),
    field("fullDrawIndexUint32", BOOL),
    field("imageCubeArray", BOOL),
    field("independentBlend", BOOL),
    field("geometryShader", BOOL),
    field("tessellationShader", BOOL),
    field("sampleRateShading", BOOL),
    field("dualSrcBlend", BOOL),
    field("logicOp", BOOL),
    field("multiDrawIndirect", BOOL),
    field("drawIndirectFirstInstance", BOOL),
    field("depthClamp", BOOL),
    field("depthBiasClamp", BOOL),
    field("fillModeNonSolid", BOOL),
    field("depthBounds", BOOL),
    field("wideLines", BOOL),
    field("largePoints", BOOL),
    field("alphaToOne", BOOL),
    field("multiViewport", BOOL),
    field("samplerAnisotropy", BOOL),
    field("textureCompressionETC2", BOOL),
    field("textureCompressionASTC_LDR", BOOL),
    field("textureCompressionBC", BOOL),
    field("occlusionQueryPrecise", BOOL),
    field("pipelineStatisticsQuery", BOOL),
    field("vertexPipelineStoresAndAtomics", BOOL),
    field("fragmentStoresAndAtomics", BOOL),
    field("shaderImageGatherExtended", BOOL),
    field("shaderStorageImageExtendedFormats", BOOL),
    field("shaderClipDistance", BOOL),
    field("shaderCullDistance", BOOL),
    field("shaderFloat64", BOOL),
    field("shaderInt64", BOOL),
    field("shaderInt16", BOOL),
    field("sparseBinding", BOOL),
    field("variableMultisampleRate", BOOL),
    field("inheritedQueries", BOOL),
];

static PHYSICAL_DEVICE_LIMITS: &[FieldSchema] = &[
    field("maxImageDimension1D", U32_MIN),
    field("maxImageDimension2D", U32_MIN),
    field("maxImageDimension3D", U32_MIN),
    field("maxImageDimensionCube", U32_MIN),
    field("maxImageArrayLayers", U32_MIN),
    field("maxTexelBufferElements", U32_MIN),
    field("maxUniformBufferRange", U32_MIN),
    field("maxStorageBufferRange", U32_MIN),
    field("maxPushConstantsSize", U32_MIN),
    field("maxMemoryAllocationCount", U32_MIN),
    field("maxSamplerAllocationCount", U32_MIN),
    field("bufferImageGranularity", U64_MAX),
    field("maxBoundDescriptorSets", U32_MIN),
    field("maxPerStageDescriptorSamplers", U32_MIN),
    field("maxPerStageResources", U32_MIN),
    field("maxVertexInputAttributes", U32_MIN),
    field("maxVertexInputBindings", U32_MIN),
    field("maxComputeSharedMemorySize", U32_MIN),
    field("maxComputeWorkGroupInvocations", U32_MIN),
    field("subPixelPrecisionBits", U32_MIN),
    field("maxDrawIndexedIndexValue", U32_MIN),
    field("maxDrawIndirectCount", U32_MIN),
    field("maxSamplerLodBias", F32_MIN),
    field("maxSamplerAnisotropy", F32_MIN),
    field("maxViewports", U32_MIN),
    field("minMemoryMapAlignment", U64_MIN),
    field("minTexelBufferOffsetAlignment", U64_MAX),
    field("minUniformBufferOffsetAlignment", U64_MAX),
    field("minStorageBufferOffsetAlignment", U64_MAX),
    field("minTexelOffset", I32_MAX),
    field("maxTexelOffset", U32_MIN),
    field("minInterpolationOffset", F32_MAX),
    field("maxInterpolationOffset", F32_MIN),
    field("framebufferColorSampleCounts", SET),
    field("sampledImageColorSampleCounts", SET),
    field("timestampComputeAndGraphics", BOOL),
    field("timestampPeriod", F32_MAX),
    field("maxClipDistances", U32_MIN),
    field("discreteQueuePriorities", U32_MIN),
    field("pointSizeGranularity", F32_MAX),
    field("lineWidthGranularity", F32_MAX),
    field("strictLines", BOOL),
    field("standardSampleLocations", BOOL),
    field("optimalBufferCopyOffsetAlignment", U64_MAX),
    field("nonCoherentAtomSize", U64_MAX),
];

static VULKAN_11_FEATURES: &[FieldSchema] = &[
    field("storageBuffer16BitAccess", BOOL),
    field("uniformAndStorageBuffer16BitAccess", BOOL),
    field("storagePushConstant16", BOOL),
    field("storageInputOutput16", BOOL),
    field("multiview", BOOL),
    field("multiviewGeometryShader", BOOL),
    field("multiviewTessellationShader", BOOL),
    field("variablePointersStorageBuffer", BOOL),
    field("variablePointers", BOOL),
    field("protectedMemory", BOOL),
    field("samplerYcbcrConversion", BOOL),
    field("shaderDrawParameters", BOOL),
];

static VULKAN_12_FEATURES: &[FieldSchema] = &[
    field("samplerMirrorClampToEdge", BOOL),
    field("drawIndirectCount", BOOL),
    field("storageBuffer8BitAccess", BOOL),
    field("uniformAndStorageBuffer8BitAccess", BOOL),
    field("storagePushConstant8", BOOL),
    field("shaderBufferInt64Atomics", BOOL),
    field("shaderSharedInt64Atomics", BOOL),
    field("shaderFloat16", BOOL),
    field("shaderInt8", BOOL),
    field("descriptorIndexing", BOOL),
    field("runtimeDescriptorArray", BOOL),
    field("samplerFilterMinmax", BOOL),
    field("scalarBlockLayout", BOOL),
    field("imagelessFramebuffer", BOOL),
    field("uniformBufferStandardLayout", BOOL),
    field("shaderSubgroupExtendedTypes", BOOL),
    field("separateDepthStencilLayouts", BOOL),
    field("hostQueryReset", BOOL),
    field("timelineSemaphore", BOOL),
    field("bufferDeviceAddress", BOOL),
    field("vulkanMemoryModel", BOOL),
    field("subgroupBroadcastDynamicId", BOOL),
];

static VULKAN_13_FEATURES: &[FieldSchema] = &[
    field("robustImageAccess", BOOL),
    field("inlineUniformBlock", BOOL),
    field("pipelineCreationCacheControl", BOOL),
    field("privateData", BOOL),
    field("shaderDemoteToHelperInvocation", BOOL),
    field("shaderTerminateInvocation", BOOL),
    field("subgroupSizeControl", BOOL),
    field("computeFullSubgroups", BOOL),
    field("synchronization2", BOOL),
    field("textureCompressionASTC_HDR", BOOL),
    field("shaderZeroInitializeWorkgroupMemory", BOOL),
    field("dynamicRendering", BOOL),
    field("shaderIntegerDotProduct", BOOL),
    field("maintenance4", BOOL),
];

static VULKAN_12_PROPERTIES: &[FieldSchema] = &[
    field("driverID", ENUM),
    field("denormBehaviorIndependence", ENUM),
    field("roundingModeIndependence", ENUM),
    field("shaderSignedZeroInfNanPreserveFloat32", BOOL),
    field("shaderDenormPreserveFloat32", BOOL),
    field("shaderUniformBufferArrayNonUniformIndexingNative", BOOL),
    field("robustBufferAccessUpdateAfterBind", BOOL),
    field("maxUpdateAfterBindDescriptorsInAllPools", U32_MIN),
    field("maxPerStageDescriptorUpdateAfterBindSamplers", U32_MIN),
    field("supportedDepthResolveModes", SET),
    field("supportedStencilResolveModes", SET),
    field("independentResolveNone", BOOL),
    field("independentResolve", BOOL),
    field("filterMinmaxSingleComponentFormats", BOOL),
    field("maxTimelineSemaphoreValueDifference", U64_MIN),
    field("framebufferIntegerColorSampleCounts", SET),
];

static SUBGROUP_PROPERTIES: &[FieldSchema] = &[
    field("subgroupSize", U32_EXACT),
    field("supportedStages", SET),
    field("supportedOperations", SET),
    field("quadOperationsInAllStages", BOOL),
];

static SHADER_FLOAT16_INT8_FEATURES: &[FieldSchema] = &[
    field("shaderFloat16", BOOL),
    field("shaderInt8", BOOL),
];
