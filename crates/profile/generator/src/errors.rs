//! Error types for table generation
//!
//! Generation runs at build time; any of these aborts the whole table.

use profile_types::{BlockTypeId, ProfileId};

/// Errors that can occur while building a profile table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("{document}: malformed profile entry: {message}")]
    Malformed { document: String, message: String },

    #[error("Profile {profile}: malformed API version '{value}' (expected major.minor.patch)")]
    MalformedVersion { profile: ProfileId, value: String },

    #[error("Profile {0}: no apiVersion declared and no base profile to inherit one from")]
    MissingApiVersion(ProfileId),

    #[error("Profile {profile}: extension {extension} listed with minVersion {first} and {second}")]
    DuplicateExtension {
        profile: ProfileId,
        extension: String,
        first: u32,
        second: u32,
    },

    #[error("Profile {profile}: unknown capability block type '{tag}'")]
    UnknownBlockType { profile: ProfileId, tag: String },

    #[error("Profile {profile}: unknown field '{field}' in {block_type}")]
    UnknownField {
        profile: ProfileId,
        block_type: BlockTypeId,
        field: String,
    },

    #[error("Profile {profile}: field {block_type}.{field} expects {expected}")]
    FieldTypeMismatch {
        profile: ProfileId,
        block_type: BlockTypeId,
        field: String,
        expected: String,
    },

    #[error("Profile {profile} declared twice (in {first} and {second})")]
    DuplicateProfile {
        profile: ProfileId,
        first: String,
        second: String,
    },

    #[error("Profile {profile}: base profile '{base}' is not declared")]
    UnknownBaseProfile { profile: ProfileId, base: String },

    #[error("Cyclic inheritance: {}", format_cycle(.cycle))]
    CyclicInheritance { cycle: Vec<ProfileId> },
}

fn format_cycle(cycle: &[ProfileId]) -> String {
    let mut names: Vec<String> = cycle.iter().map(ToString::to_string).collect();
    if let Some(first) = names.first().cloned() {
        names.push(first);
    }
    names.join(" -> ")
}

/// Result type alias for generation
pub type GenerateResult<T> = Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_display_closes_the_loop() {
        let err = GenerateError::CyclicInheritance {
            cycle: vec![ProfileId::new("A", 1), ProfileId::new("B", 1)],
        };
        assert_eq!(err.to_string(), "Cyclic inheritance: A@1 -> B@1 -> A@1");
    }
}
