//! Error types for document validation

use std::fmt;

/// A single meta-schema constraint a document violates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON pointer into the document, e.g. `/profiles/0/name`
    pub instance_path: String,
    /// JSON pointer into the meta-schema naming the violated keyword
    pub schema_path: String,
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = if self.instance_path.is_empty() {
            "/"
        } else {
            self.instance_path.as_str()
        };
        write!(f, "{} at {} ({})", self.message, at, self.schema_path)
    }
}

/// Errors raised by the schema validator
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Meta-schema failed to compile: {0}")]
    MetaSchema(String),

    #[error("{document}: not valid JSON: {message}")]
    Parse { document: String, message: String },

    #[error("{document}: {} schema violation(s)", .violations.len())]
    Invalid {
        document: String,
        violations: Vec<SchemaViolation>,
    },
}

impl SchemaError {
    /// Violations carried by an `Invalid` error; empty otherwise.
    pub fn violations(&self) -> &[SchemaViolation] {
        match self {
            SchemaError::Invalid { violations, .. } => violations,
            _ => &[],
        }
    }
}

/// Result type alias for validation
pub type SchemaResult<T> = Result<T, SchemaError>;
