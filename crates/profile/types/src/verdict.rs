use crate::{ApiVersion, BlockTypeId, FieldValue, ProfileId, QueueFamilyCapability};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One field whose reported value does not meet the requirement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldMismatch {
    pub block_type: BlockTypeId,
    pub field: String,
    pub required: FieldValue,
    /// `None` when the device did not report the field at all.
    pub reported: Option<FieldValue>,
}

impl fmt::Display for FieldMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reported {
            Some(reported) => write!(
                f,
                "{}.{}: required {}, reported {}",
                self.block_type, self.field, self.required, reported
            ),
            None => write!(
                f,
                "{}.{}: required {}, not reported",
                self.block_type, self.field, self.required
            ),
        }
    }
}

/// A single unmet requirement found by a compatibility check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Failure {
    ApiVersionTooLow {
        required: ApiVersion,
        reported: ApiVersion,
    },
    MissingExtension {
        name: String,
        min_version: u32,
    },
    ExtensionVersionTooLow {
        name: String,
        min_version: u32,
        reported: u32,
    },
    MissingCapabilityBlock(BlockTypeId),
    FieldMismatch(FieldMismatch),
    QueueFamilyUnmatched {
        index: usize,
        required: QueueFamilyCapability,
    },
    MissingFormat(String),
    FormatFeaturesMissing {
        format: String,
        usage: String,
        missing: Vec<String>,
    },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::ApiVersionTooLow { required, reported } => write!(
                f,
                "API version {} required, device reports {}",
                required, reported
            ),
            Failure::MissingExtension { name, min_version } => write!(
                f,
                "extension {} (version >= {}) not reported",
                name, min_version
            ),
            Failure::ExtensionVersionTooLow {
                name,
                min_version,
                reported,
            } => write!(
                f,
                "extension {} version {} required, device reports {}",
                name, min_version, reported
            ),
            Failure::MissingCapabilityBlock(block) => {
                write!(f, "capability block {} not reported", block)
            }
            Failure::FieldMismatch(mismatch) => write!(f, "{}", mismatch),
            Failure::QueueFamilyUnmatched { index, required } => {
                let flags: Vec<&str> = required.queue_flags.iter().map(String::as_str).collect();
                write!(
                    f,
                    "no queue family satisfies requirement #{} (flags [{}], {} queues, {} timestamp bits)",
                    index,
                    flags.join(", "),
                    required.queue_count,
                    required.timestamp_valid_bits
                )
            }
            Failure::MissingFormat(format) => write!(f, "format {} not reported", format),
            Failure::FormatFeaturesMissing {
                format,
                usage,
                missing,
            } => write!(
                f,
                "format {} lacks {} features [{}]",
                format,
                usage,
                missing.join(", ")
            ),
        }
    }
}

/// Outcome of checking one profile against one device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonVerdict {
    pub profile: ProfileId,
    pub supported: bool,
    pub failures: Vec<Failure>,
}

impl ComparisonVerdict {
    /// Build a verdict; `supported` is derived from `failures`.
    pub fn new(profile: ProfileId, failures: Vec<Failure>) -> Self {
        Self {
            profile,
            supported: failures.is_empty(),
            failures,
        }
    }

    pub fn field_mismatches(&self) -> impl Iterator<Item = &FieldMismatch> {
        self.failures.iter().filter_map(|f| match f {
            Failure::FieldMismatch(m) => Some(m),
            _ => None,
        })
    }

    pub fn missing_blocks(&self) -> impl Iterator<Item = BlockTypeId> + '_ {
        self.failures.iter().filter_map(|f| match f {
            Failure::MissingCapabilityBlock(b) => Some(*b),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_follows_failures() {
        let id = ProfileId::new("P", 1);
        assert!(ComparisonVerdict::new(id.clone(), vec![]).supported);

        let verdict = ComparisonVerdict::new(
            id,
            vec![Failure::MissingCapabilityBlock(BlockTypeId::Vulkan12Features)],
        );
        assert!(!verdict.supported);
        assert_eq!(
            verdict.missing_blocks().collect::<Vec<_>>(),
            vec![BlockTypeId::Vulkan12Features]
        );
    }

    #[test]
    fn failures_are_self_describing() {
        let mismatch = Failure::FieldMismatch(FieldMismatch {
            block_type: BlockTypeId::PhysicalDeviceLimits,
            field: "maxImageDimension2D".into(),
            required: FieldValue::U32(4096),
            reported: Some(FieldValue::U32(2048)),
        });
        let text = mismatch.to_string();
        assert!(text.contains("VkPhysicalDeviceLimits.maxImageDimension2D"));
        assert!(text.contains("4096"));
        assert!(text.contains("2048"));

        let shortfall = Failure::ExtensionVersionTooLow {
            name: "X".into(),
            min_version: 2,
            reported: 1,
        };
        assert!(shortfall.to_string().contains("version 2 required"));
    }
}
