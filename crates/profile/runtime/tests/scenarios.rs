//! Integration tests: the documented compatibility and merge scenarios.

use profile_runtime::{check_support, merge, DeviceReport, MergeError};
use profile_types::{
    ApiVersion, BlockTypeId, CapabilityBlock, DeviceCreationRequest, ExtensionProperties,
    ExtensionRequirement, Failure, FieldValue, Profile, ProfileId,
};

fn profile() -> Profile {
    Profile::new(
        ProfileId::new("VP_TEST_scenario", 1),
        ApiVersion::new(1, 3, 0).unwrap(),
    )
}

fn device() -> DeviceReport {
    DeviceReport::new(ApiVersion::new(1, 3, 0).unwrap())
}

#[test]
fn scenario_a_extension_version_shortfall() {
    let mut profile = profile();
    profile
        .extensions
        .push(ExtensionRequirement::new("VK_KHR_maintenance4", 2));
    let mut device = device();
    device
        .extensions
        .push(ExtensionProperties::new("VK_KHR_maintenance4", 1));

    let verdict = check_support(&profile, &device);
    assert!(!verdict.supported);
    assert!(verdict.failures.contains(&Failure::ExtensionVersionTooLow {
        name: "VK_KHR_maintenance4".into(),
        min_version: 2,
        reported: 1,
    }));
}

#[test]
fn scenario_b_required_false_is_no_constraint() {
    let mut profile = profile();
    profile.capabilities.upsert(
        CapabilityBlock::new(BlockTypeId::PhysicalDeviceFeatures)
            .with("depthClamp", FieldValue::Bool(true))
            .with("drawIndirectFirstInstance", FieldValue::Bool(false)),
    );
    let mut device = device();
    device.capabilities.upsert(
        CapabilityBlock::new(BlockTypeId::PhysicalDeviceFeatures)
            .with("depthClamp", FieldValue::Bool(true))
            .with("drawIndirectFirstInstance", FieldValue::Bool(false)),
    );

    assert!(check_support(&profile, &device).supported);
}

#[test]
fn scenario_c_lower_bound_limit() {
    let mut profile = profile();
    profile.capabilities.upsert(
        CapabilityBlock::new(BlockTypeId::PhysicalDeviceLimits)
            .with("maxImageDimension2D", FieldValue::U32(4096)),
    );

    let report = |value: u32| {
        let mut device = device();
        device.capabilities.upsert(
            CapabilityBlock::new(BlockTypeId::PhysicalDeviceLimits)
                .with("maxImageDimension2D", FieldValue::U32(value)),
        );
        device
    };

    assert!(check_support(&profile, &report(4096)).supported);

    let verdict = check_support(&profile, &report(2048));
    assert!(!verdict.supported);
    let mismatches: Vec<_> = verdict.field_mismatches().collect();
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].field, "maxImageDimension2D");
    assert_eq!(mismatches[0].required, FieldValue::U32(4096));
    assert_eq!(mismatches[0].reported, Some(FieldValue::U32(2048)));
}

#[test]
fn scenario_d_strict_downgrade_rejected() {
    let mut profile = profile();
    profile.capabilities.upsert(
        CapabilityBlock::new(BlockTypeId::Vulkan13Features)
            .with("dynamicRendering", FieldValue::Bool(true)),
    );
    let mut request = DeviceCreationRequest::new();
    request.features.upsert(
        CapabilityBlock::new(BlockTypeId::Vulkan13Features)
            .with("dynamicRendering", FieldValue::Bool(false)),
    );

    assert!(matches!(
        merge(&profile, &request),
        Err(MergeError::FeatureDowngradeRejected { ref field, .. }) if field == "dynamicRendering"
    ));
}

#[test]
fn missing_block_is_distinct_from_mismatch() {
    let mut profile = profile();
    profile.capabilities.upsert(
        CapabilityBlock::new(BlockTypeId::Vulkan12Features)
            .with("timelineSemaphore", FieldValue::Bool(true)),
    );

    let verdict = check_support(&profile, &device());
    assert_eq!(
        verdict.missing_blocks().collect::<Vec<_>>(),
        vec![BlockTypeId::Vulkan12Features]
    );
    assert_eq!(verdict.field_mismatches().count(), 0);
}
