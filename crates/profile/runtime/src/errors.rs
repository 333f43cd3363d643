//! Error types for runtime checks and device creation merging

use profile_types::{BlockTypeId, ProfileId};

/// Errors raised around a compatibility check.
///
/// An unsupported device is not an error; it is a `ComparisonVerdict`.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("Profile {0} is not in the profile table")]
    UnknownProfile(ProfileId),

    #[error("Malformed device report: {0}")]
    MalformedReport(String),
}

/// Errors returned by the device creation merger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    #[error("Request disables {block_type}.{field}, which profile {profile} requires")]
    FeatureDowngradeRejected {
        profile: ProfileId,
        block_type: BlockTypeId,
        field: String,
    },

    #[error("{block_type} cannot be requested as a feature toggle{}", field_suffix(.field))]
    AmbiguousFeatureBlock {
        block_type: BlockTypeId,
        /// Set when the block is a feature block but the field is not in its schema.
        field: Option<String>,
    },

    #[error("Requested extension {0} is unknown to the profile table and the extension registry")]
    UnknownRequestedExtension(String),
}

fn field_suffix(field: &Option<String>) -> String {
    match field {
        Some(field) => format!(" (unknown field '{}')", field),
        None => String::new(),
    }
}

/// Result type alias for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Result type alias for merging
pub type MergeResult<T> = Result<T, MergeError>;
