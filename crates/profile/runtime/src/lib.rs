//! Device Capability Profile Runtime
//!
//! Everything that happens after the profile table is built: checking a
//! device against a profile and folding a profile into a device creation
//! request. All operations are pure and synchronous over data already in
//! memory; the table is passed by shared reference and never mutated.
//!
//! # Key Concepts
//!
//! - **Chain Walker** (`walk_chain`): pairs required and reported capability
//!   blocks by block type and flags required blocks the device lacks.
//! - **Field Comparator** (`compare`): checks every field of one block pair by
//!   its declared kind and bound.
//! - **Support check** (`check_support`): API version, extensions, the chain,
//!   queue families and formats, all collected into one `ComparisonVerdict`.
//! - **DeviceQuery**: the seam to a real driver. Implementations return
//!   complete snapshots; nothing here blocks.
//! - **Merger** (`merge`): unions a profile's extensions and feature toggles
//!   into a caller's creation request.
//!
//! # Composition
//!
//! Checking several profiles means checking each one independently
//! (`check_profiles`). Precedence exists only along inheritance, which the
//! generator has already resolved.
//!
//! # Usage
//!
//! ```rust
//! use profile_runtime::{check_support, DeviceReport};
//! use profile_types::{ApiVersion, Profile, ProfileId};
//!
//! let profile = Profile::new(ProfileId::new("VP_EXAMPLE", 1), ApiVersion::new(1, 3, 0).unwrap());
//! let report = DeviceReport::new(ApiVersion::new(1, 2, 0).unwrap());
//!
//! let verdict = check_support(&profile, &report);
//! assert!(!verdict.supported);
//! ```

#![deny(unsafe_code)]

mod comparator;
mod device;
mod errors;
mod merge;
mod support;
mod walker;

pub use comparator::*;
pub use device::*;
pub use errors::*;
pub use merge::*;
pub use support::*;
pub use walker::*;
