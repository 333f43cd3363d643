//! Profile Table Generator
//!
//! Turns validated profile documents into the immutable `ProfileTable`
//! consulted at runtime. Runs at build time (or from the `profilegen` CLI);
//! every error aborts the table so a bad document never ships.
//!
//! # Key Concepts
//!
//! - **Declaration**: one profile entry as written. It may name a base
//!   profile (`inherits`) and leave out anything it inherits.
//! - **Resolution**: declarations are ordered so bases come first, cycles are
//!   rejected, then each child is folded over its resolved base.
//! - **Emission**: `emit_rust` renders a table as Rust source that rebuilds
//!   it from literals.
//!
//! # Inheritance
//!
//! The child wins wherever both declare a value. Formats only accumulate:
//!
//! | Part | Result |
//! |------|--------|
//! | `apiVersion` | child's if declared, else base's |
//! | extensions | base's in order, child's `minVersion` on overlap, then child-only |
//! | capabilities | overlay per block, per field |
//! | queue families | base's, then child's not already present |
//! | formats | feature sets unioned per format name |
//!
//! # Usage
//!
//! ```rust
//! use profile_generator::generate;
//! use profile_schema::SchemaValidator;
//! use serde_json::json;
//!
//! let validator = SchemaValidator::new().unwrap();
//! let doc = validator
//!     .validate(json!({
//!         "schemaVersion": 1,
//!         "profiles": [{ "name": "VP_EXAMPLE", "version": 1, "apiVersion": "1.3.0" }]
//!     }))
//!     .unwrap();
//!
//! let table = generate(&[doc]).unwrap();
//! assert!(table.find("VP_EXAMPLE", 1).is_some());
//! ```

#![deny(unsafe_code)]

mod document;
mod emit;
mod errors;
mod generator;
mod inheritance;

pub use document::{parse_document, BaseRef, ProfileDecl};
pub use emit::*;
pub use errors::*;
pub use generator::*;
