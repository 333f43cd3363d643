// @generated by profilegen. Do not edit by hand.

#[allow(unused_imports)]
use profile_types::{
    ApiVersion, BlockTypeId, CapabilityBlock, CapabilityChain, ExtensionRequirement, FieldValue,
    FormatCapability, Profile, ProfileId, ProfileTable, QueueFamilyCapability,
};
#[allow(unused_imports)]
use std::collections::{BTreeMap, BTreeSet};

#[allow(dead_code)]
fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Every profile known at build time.
pub fn profile_table() -> ProfileTable {
    vec![
        profile_0(),
        profile_1(),
    ]
    .into_iter()
    .collect()
}

fn profile_0() -> Profile {
    Profile {
        id: ProfileId::new("VP_TEST_profile_a", 1),
        label: "Test profile A".to_string(),
        description: "Baseline used by the integration tests".to_string(),
        api_version: ApiVersion { major: 1, minor: 2, patch: 224 },
        extensions: vec![
            ExtensionRequirement::new("VK_KHR_get_memory_requirements2", 1),
        ],
        capabilities: [
            CapabilityBlock::new(BlockTypeId::PhysicalDeviceFeatures)
                .with("depthBiasClamp", FieldValue::Bool(true))
                .with("depthClamp", FieldValue::Bool(true))
                .with("drawIndirectFirstInstance", FieldValue::Bool(false)),
            CapabilityBlock::new(BlockTypeId::PhysicalDeviceLimits)
                .with("maxImageDimension1D", FieldValue::U32(0))
                .with("maxImageDimension2D", FieldValue::U32(4096))
                .with("maxImageDimension3D", FieldValue::U32(4096))
                .with("maxImageDimensionCube", FieldValue::U32(4096)),
        ]
        .into_iter()
        .collect(),
        queue_families: vec![
            QueueFamilyCapability { queue_flags: set(&["COMPUTE", "GRAPHICS"]), queue_count: 1, timestamp_valid_bits: 0 },
        ],
        formats: [
            ("VK_FORMAT_R8G8B8A8_UNORM".to_string(), FormatCapability { linear_tiling_features: set(&[]), optimal_tiling_features: set(&["COLOR_ATTACHMENT", "SAMPLED_IMAGE"]), buffer_features: set(&[]) }),
        ]
        .into_iter()
        .collect(),
        base: None,
    }
}

fn profile_1() -> Profile {
    Profile {
        id: ProfileId::new("VP_TEST_profile_b", 1),
        label: "Test profile B".to_string(),
        description: "Extends profile A with larger 2D images and a newer API".to_string(),
        api_version: ApiVersion { major: 1, minor: 3, patch: 224 },
        extensions: vec![
            ExtensionRequirement::new("VK_KHR_get_memory_requirements2", 1),
            ExtensionRequirement::new("VK_KHR_driver_properties", 1),
        ],
        capabilities: [
            CapabilityBlock::new(BlockTypeId::PhysicalDeviceFeatures)
                .with("depthBiasClamp", FieldValue::Bool(true))
                .with("depthClamp", FieldValue::Bool(true))
                .with("drawIndirectFirstInstance", FieldValue::Bool(true)),
            CapabilityBlock::new(BlockTypeId::PhysicalDeviceLimits)
                .with("maxImageDimension1D", FieldValue::U32(4096))
                .with("maxImageDimension2D", FieldValue::U32(8192))
                .with("maxImageDimension3D", FieldValue::U32(2048))
                .with("maxImageDimensionCube", FieldValue::U32(4096)),
        ]
        .into_iter()
        .collect(),
        queue_families: vec![
            QueueFamilyCapability { queue_flags: set(&["COMPUTE", "GRAPHICS"]), queue_count: 1, timestamp_valid_bits: 0 },
        ],
        formats: [
            ("VK_FORMAT_R8G8B8A8_UNORM".to_string(), FormatCapability { linear_tiling_features: set(&[]), optimal_tiling_features: set(&["COLOR_ATTACHMENT", "SAMPLED_IMAGE"]), buffer_features: set(&[]) }),
        ]
        .into_iter()
        .collect(),
        base: Some(ProfileId::new("VP_TEST_profile_a", 1)),
    }
}
