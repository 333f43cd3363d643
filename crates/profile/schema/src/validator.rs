//! Validator: checks raw documents against the meta-schema
//!
//! The meta-schema is compiled once when the validator is built; the
//! validator is then shared read-only by every caller.

use crate::errors::{SchemaError, SchemaResult, SchemaViolation};
use serde_json::Value;
use tracing::{debug, warn};

/// Meta-schema version the embedded schema describes.
pub const SCHEMA_VERSION: u64 = 1;

/// The embedded meta-schema source.
pub const META_SCHEMA: &str = include_str!("../schema/profiles.schema.json");

const UNNAMED: &str = "<document>";

/// A document that passed meta-schema validation.
///
/// Only the validator creates these, so holding one proves the shape
/// checks already ran.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDocument {
    name: String,
    document: Value,
}

impl ValidatedDocument {
    /// Name used in diagnostics (usually the source path).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// The `profiles` array; empty if absent.
    pub fn profiles(&self) -> &[Value] {
        self.document
            .get("profiles")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn into_inner(self) -> Value {
        self.document
    }
}

/// Compiled meta-schema validator.
pub struct SchemaValidator {
    compiled: jsonschema::Validator,
}

impl SchemaValidator {
    /// Compile the embedded meta-schema.
    pub fn new() -> SchemaResult<Self> {
        let schema: Value = serde_json::from_str(META_SCHEMA)
            .map_err(|e| SchemaError::MetaSchema(e.to_string()))?;
        let compiled =
            jsonschema::Validator::new(&schema).map_err(|e| SchemaError::MetaSchema(e.to_string()))?;
        Ok(Self { compiled })
    }

    /// Validate an anonymous document.
    pub fn validate(&self, document: Value) -> SchemaResult<ValidatedDocument> {
        self.validate_named(UNNAMED, document)
    }

    /// Validate a document, naming it in any error.
    pub fn validate_named(
        &self,
        name: impl Into<String>,
        document: Value,
    ) -> SchemaResult<ValidatedDocument> {
        let name = name.into();

        let violations: Vec<SchemaViolation> = self
            .compiled
            .iter_errors(&document)
            .map(|err| SchemaViolation {
                instance_path: err.instance_path.to_string(),
                schema_path: err.schema_path.to_string(),
                message: err.to_string(),
            })
            .collect();

        if !violations.is_empty() {
            warn!(
                document = name.as_str(),
                violations = violations.len(),
                "Profile document rejected by meta-schema"
            );
            return Err(SchemaError::Invalid {
                document: name,
                violations,
            });
        }

        debug!(document = name.as_str(), "Profile document validated");
        Ok(ValidatedDocument { name, document })
    }

    /// Parse JSON text and validate it.
    pub fn validate_str(&self, name: impl Into<String>, text: &str) -> SchemaResult<ValidatedDocument> {
        let name = name.into();
        let document: Value = serde_json::from_str(text).map_err(|e| SchemaError::Parse {
            document: name.clone(),
            message: e.to_string(),
        })?;
        self.validate_named(name, document)
    }
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("schema_version", &SCHEMA_VERSION)
            .finish()
    }
}
