//! Support check: one profile against one device report
//!
//! Collects every unmet requirement across API version, extensions, the
//! capability chain, queue families and formats. The verdict is supported
//! only when nothing is collected.

use crate::device::DeviceReport;
use crate::walker::walk_chain;
use profile_types::{ComparisonVerdict, Failure, FormatCapability, Profile};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Check `report` against every requirement of `profile`.
pub fn check_support(profile: &Profile, report: &DeviceReport) -> ComparisonVerdict {
    let mut failures = Vec::new();

    if report.api_version < profile.api_version {
        failures.push(Failure::ApiVersionTooLow {
            required: profile.api_version,
            reported: report.api_version,
        });
    }

    for ext in &profile.extensions {
        match report.extension_version(&ext.name) {
            None => failures.push(Failure::MissingExtension {
                name: ext.name.clone(),
                min_version: ext.min_version,
            }),
            Some(version) if version < ext.min_version => {
                failures.push(Failure::ExtensionVersionTooLow {
                    name: ext.name.clone(),
                    min_version: ext.min_version,
                    reported: version,
                })
            }
            Some(_) => {}
        }
    }

    failures.extend(walk_chain(&profile.capabilities, &report.capabilities));

    for (index, required) in profile.queue_families.iter().enumerate() {
        if !report.queue_families.iter().any(|f| f.satisfies(required)) {
            failures.push(Failure::QueueFamilyUnmatched {
                index,
                required: required.clone(),
            });
        }
    }

    for (format, required) in &profile.formats {
        match report.formats.get(format) {
            Some(reported) => check_format(format, required, reported, &mut failures),
            None => failures.push(Failure::MissingFormat(format.clone())),
        }
    }

    let verdict = ComparisonVerdict::new(profile.id.clone(), failures);
    if verdict.supported {
        debug!(profile = %verdict.profile, "Device supports profile");
    } else {
        warn!(
            profile = %verdict.profile,
            failures = verdict.failures.len(),
            "Device does not support profile"
        );
    }
    verdict
}

/// Check several profiles independently.
///
/// The device must satisfy each profile on its own terms; no profile's
/// requirements override another's.
pub fn check_profiles<'a, I>(profiles: I, report: &DeviceReport) -> Vec<ComparisonVerdict>
where
    I: IntoIterator<Item = &'a Profile>,
{
    profiles
        .into_iter()
        .map(|profile| check_support(profile, report))
        .collect()
}

fn check_format(
    format: &str,
    required: &FormatCapability,
    reported: &FormatCapability,
    failures: &mut Vec<Failure>,
) {
    let usages = [
        (
            "linear tiling",
            &required.linear_tiling_features,
            &reported.linear_tiling_features,
        ),
        (
            "optimal tiling",
            &required.optimal_tiling_features,
            &reported.optimal_tiling_features,
        ),
        ("buffer", &required.buffer_features, &reported.buffer_features),
    ];
    for (usage, want, have) in usages {
        let missing: Vec<String> = missing_from(want, have);
        if !missing.is_empty() {
            failures.push(Failure::FormatFeaturesMissing {
                format: format.to_string(),
                usage: usage.to_string(),
                missing,
            });
        }
    }
}

fn missing_from(want: &BTreeSet<String>, have: &BTreeSet<String>) -> Vec<String> {
    want.difference(have).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_types::{
        ApiVersion, BlockTypeId, CapabilityBlock, ExtensionProperties, ExtensionRequirement,
        FieldValue, ProfileId, QueueFamilyCapability,
    };

    fn version(text: &str) -> ApiVersion {
        ApiVersion::parse(text).unwrap()
    }

    fn profile() -> Profile {
        let mut profile = Profile::new(ProfileId::new("VP_TEST_support", 1), version("1.2.0"));
        profile
            .extensions
            .push(ExtensionRequirement::new("VK_KHR_get_memory_requirements2", 1));
        profile
    }

    fn report() -> DeviceReport {
        let mut report = DeviceReport::new(version("1.3.0"));
        report
            .extensions
            .push(ExtensionProperties::new("VK_KHR_get_memory_requirements2", 1));
        report
    }

    #[test]
    fn matching_device_is_supported() {
        let verdict = check_support(&profile(), &report());
        assert!(verdict.supported);
        assert!(verdict.failures.is_empty());
    }

    #[test]
    fn api_version_too_low() {
        let mut report = report();
        report.api_version = version("1.1.0");
        let verdict = check_support(&profile(), &report);
        assert_eq!(
            verdict.failures,
            vec![Failure::ApiVersionTooLow {
                required: version("1.2.0"),
                reported: version("1.1.0"),
            }]
        );
    }

    #[test]
    fn extension_version_shortfall() {
        let mut profile = profile();
        profile.extensions[0].min_version = 2;
        let verdict = check_support(&profile, &report());
        assert!(!verdict.supported);
        assert_eq!(
            verdict.failures,
            vec![Failure::ExtensionVersionTooLow {
                name: "VK_KHR_get_memory_requirements2".into(),
                min_version: 2,
                reported: 1,
            }]
        );
    }

    #[test]
    fn every_failure_is_reported_at_once() {
        let mut profile = profile();
        profile
            .extensions
            .push(ExtensionRequirement::new("VK_KHR_driver_properties", 1));
        profile.capabilities.upsert(
            CapabilityBlock::new(BlockTypeId::Vulkan13Features)
                .with("dynamicRendering", FieldValue::Bool(true)),
        );
        profile.queue_families.push(QueueFamilyCapability {
            queue_flags: ["VIDEO_DECODE".to_string()].into(),
            queue_count: 1,
            timestamp_valid_bits: 0,
        });
        profile.formats.insert(
            "VK_FORMAT_BC7_UNORM_BLOCK".into(),
            FormatCapability::default(),
        );

        let mut report = report();
        report.api_version = version("1.0.0");
        let verdict = check_support(&profile, &report);
        assert_eq!(verdict.failures.len(), 5, "{:?}", verdict.failures);
    }

    #[test]
    fn format_features_are_checked_per_usage() {
        let mut profile = profile();
        profile.formats.insert(
            "VK_FORMAT_R8G8B8A8_UNORM".into(),
            FormatCapability {
                optimal_tiling_features: ["SAMPLED_IMAGE".to_string(), "STORAGE_IMAGE".to_string()]
                    .into(),
                buffer_features: ["VERTEX_BUFFER".to_string()].into(),
                ..Default::default()
            },
        );
        let mut report = report();
        report.formats.insert(
            "VK_FORMAT_R8G8B8A8_UNORM".into(),
            FormatCapability {
                optimal_tiling_features: ["SAMPLED_IMAGE".to_string()].into(),
                ..Default::default()
            },
        );

        let verdict = check_support(&profile, &report);
        assert_eq!(
            verdict.failures,
            vec![
                Failure::FormatFeaturesMissing {
                    format: "VK_FORMAT_R8G8B8A8_UNORM".into(),
                    usage: "optimal tiling".into(),
                    missing: vec!["STORAGE_IMAGE".into()],
                },
                Failure::FormatFeaturesMissing {
                    format: "VK_FORMAT_R8G8B8A8_UNORM".into(),
                    usage: "buffer".into(),
                    missing: vec!["VERTEX_BUFFER".into()],
                },
            ]
        );
    }

    #[test]
    fn profiles_are_checked_independently() {
        let a = profile();
        let mut b = profile();
        b.id = ProfileId::new("VP_TEST_other", 1);
        b.api_version = version("1.4.0");

        let verdicts = check_profiles([&a, &b], &report());
        assert_eq!(verdicts.len(), 2);
        assert!(verdicts[0].supported);
        assert!(!verdicts[1].supported);
    }
}
