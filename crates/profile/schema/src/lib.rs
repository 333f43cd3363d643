//! Profile document validation
//!
//! Raw profile documents are untrusted input. Before the table generator
//! looks at one, it is checked against the embedded meta-schema
//! (`schema/profiles.schema.json`). Validation is pure and reports every
//! violation at once, so an author fixes a document in one pass.
//!
//! # Usage
//!
//! ```rust
//! use profile_schema::SchemaValidator;
//! use serde_json::json;
//!
//! let validator = SchemaValidator::new().unwrap();
//! let doc = validator
//!     .validate(json!({ "schemaVersion": 1, "profiles": [] }))
//!     .unwrap();
//! assert!(doc.profiles().is_empty());
//! ```

#![deny(unsafe_code)]

mod errors;
mod validator;

pub use errors::*;
pub use validator::*;
