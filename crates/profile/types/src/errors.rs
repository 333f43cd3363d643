//! Error types for the profile data model

use crate::BlockTypeId;

/// Errors raised while building data-model values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypesError {
    #[error("Malformed API version '{0}': expected major.minor.patch")]
    MalformedVersion(String),

    #[error("Unknown capability block type: {0}")]
    UnknownBlockType(String),

    #[error("Duplicate capability block in chain: {0}")]
    DuplicateBlock(BlockTypeId),

    #[error("Unknown field '{field}' for block {block_type}")]
    UnknownField {
        block_type: BlockTypeId,
        field: String,
    },

    #[error("Field {block_type}.{field} expects {expected}")]
    FieldTypeMismatch {
        block_type: BlockTypeId,
        field: String,
        expected: String,
    },

    #[error("Malformed capability data: {0}")]
    Malformed(String),
}

/// Result type alias for data-model operations
pub type TypesResult<T> = Result<T, TypesError>;
