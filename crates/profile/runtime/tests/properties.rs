//! Property tests: verdict and merge laws over random profiles and devices.

use profile_runtime::{check_support, merge, DeviceReport};
use profile_types::{
    ApiVersion, BlockTypeId, CapabilityBlock, DeviceCreationRequest, ExtensionProperties,
    ExtensionRequirement, Failure, FieldValue, Profile, ProfileId, WELL_KNOWN_DEVICE_EXTENSIONS,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const FEATURES: [&str; 6] = [
    "depthClamp",
    "depthBiasClamp",
    "drawIndirectFirstInstance",
    "geometryShader",
    "samplerAnisotropy",
    "wideLines",
];

const LIMITS: [&str; 4] = [
    "maxImageDimension1D",
    "maxImageDimension2D",
    "maxImageDimension3D",
    "maxImageDimensionCube",
];

/// A features block with a random subset of fields set.
fn arb_features() -> impl Strategy<Value = CapabilityBlock> {
    prop::collection::vec(prop::option::of(any::<bool>()), FEATURES.len()).prop_map(|values| {
        let mut block = CapabilityBlock::new(BlockTypeId::PhysicalDeviceFeatures);
        for (name, value) in FEATURES.iter().zip(values) {
            if let Some(value) = value {
                block.set(*name, FieldValue::Bool(value));
            }
        }
        block
    })
}

fn arb_limits() -> impl Strategy<Value = CapabilityBlock> {
    prop::collection::vec(prop::option::of(0u32..16384), LIMITS.len()).prop_map(|values| {
        let mut block = CapabilityBlock::new(BlockTypeId::PhysicalDeviceLimits);
        for (name, value) in LIMITS.iter().zip(values) {
            if let Some(value) = value {
                block.set(*name, FieldValue::U32(value));
            }
        }
        block
    })
}

fn arb_extension_names() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(WELL_KNOWN_DEVICE_EXTENSIONS.to_vec(), 0..6)
        .prop_shuffle()
        .prop_map(|names| names.into_iter().map(str::to_string).collect())
}

fn arb_profile() -> impl Strategy<Value = Profile> {
    (arb_features(), arb_limits(), arb_extension_names(), 0u32..4).prop_map(
        |(features, limits, extensions, minor)| {
            let mut profile = Profile::new(
                ProfileId::new("VP_PROP", 1),
                ApiVersion::new(1, minor, 0).unwrap(),
            );
            profile.capabilities.upsert(features);
            profile.capabilities.upsert(limits);
            profile.extensions = extensions
                .into_iter()
                .map(|name| ExtensionRequirement::new(name, 1))
                .collect();
            profile
        },
    )
}

fn arb_device() -> impl Strategy<Value = DeviceReport> {
    (
        arb_features(),
        prop::option::of(arb_limits()),
        arb_extension_names(),
        0u32..4,
    )
        .prop_map(|(features, limits, extensions, minor)| {
            let mut report = DeviceReport::new(ApiVersion::new(1, minor, 0).unwrap());
            report.capabilities.upsert(features);
            if let Some(limits) = limits {
                report.capabilities.upsert(limits);
            }
            report.extensions = extensions
                .into_iter()
                .map(|name| ExtensionProperties::new(name, 1))
                .collect();
            report
        })
}

fn mismatched_fields(failures: &[Failure]) -> BTreeSet<(BlockTypeId, String)> {
    failures
        .iter()
        .filter_map(|f| match f {
            Failure::FieldMismatch(m) => Some((m.block_type, m.field.clone())),
            _ => None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Checking the same pair twice gives the same verdict.
    #[test]
    fn verdicts_are_idempotent(profile in arb_profile(), device in arb_device()) {
        prop_assert_eq!(check_support(&profile, &device), check_support(&profile, &device));
    }

    /// Supported exactly when no failure of any class was recorded.
    #[test]
    fn supported_iff_no_failures(profile in arb_profile(), device in arb_device()) {
        let verdict = check_support(&profile, &device);
        prop_assert_eq!(verdict.supported, verdict.failures.is_empty());
    }

    /// Turning one reported feature on clears only that field's mismatch.
    #[test]
    fn enabling_a_feature_is_monotonic(
        profile in arb_profile(),
        device in arb_device(),
        index in 0..FEATURES.len(),
    ) {
        let field = FEATURES[index];
        let mut off = device.clone();
        let mut on = device;
        if let Some(block) = off.capabilities.get_mut(BlockTypeId::PhysicalDeviceFeatures) {
            block.set(field, FieldValue::Bool(false));
        }
        if let Some(block) = on.capabilities.get_mut(BlockTypeId::PhysicalDeviceFeatures) {
            block.set(field, FieldValue::Bool(true));
        }

        let before = mismatched_fields(&check_support(&profile, &off).failures);
        let after = mismatched_fields(&check_support(&profile, &on).failures);

        let key = (BlockTypeId::PhysicalDeviceFeatures, field.to_string());
        prop_assert!(!after.contains(&key));
        let mut expected = before;
        expected.remove(&key);
        prop_assert_eq!(after, expected);
    }

    /// Merged extensions cover both inputs with no duplicates.
    #[test]
    fn merge_unions_extensions(profile in arb_profile(), caller in arb_extension_names()) {
        let mut request = DeviceCreationRequest::new();
        request.extensions = caller.clone();

        let merged = merge(&profile, &request).unwrap();
        let names = &merged.request.extensions;
        let unique: BTreeSet<&String> = names.iter().collect();
        prop_assert_eq!(unique.len(), names.len());

        for ext in &profile.extensions {
            prop_assert!(names.contains(&ext.name));
        }
        for name in &caller {
            prop_assert!(names.contains(name));
        }
        // Profile extensions lead in declared order.
        let leading: Vec<&String> = names.iter().take(profile.extensions.len()).collect();
        let declared: Vec<&String> = profile.extensions.iter().map(|e| &e.name).collect();
        prop_assert_eq!(leading, declared);
    }

    /// A caller requesting nothing gets exactly the profile's feature blocks.
    #[test]
    fn empty_request_takes_profile_features(profile in arb_profile()) {
        let merged = merge(&profile, &DeviceCreationRequest::new()).unwrap();
        let expected: Vec<&CapabilityBlock> = profile.feature_blocks().collect();
        let actual: Vec<&CapabilityBlock> = merged.request.features.iter().collect();
        prop_assert_eq!(actual, expected);
    }
}
