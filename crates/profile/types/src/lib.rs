//! Device Capability Profile Types
//!
//! A **profile** is a named, versioned baseline of device functionality: an
//! API version, a set of extensions, and typed capability blocks (feature
//! toggles, limits, properties) plus queue-family and format requirements.
//! A device is compatible with a profile when every requirement is met.
//!
//! # Key Concepts
//!
//! - **BlockTypeId**: identifies a capability domain ("device features",
//!   "device limits", ...). The set is closed; each id owns a static field
//!   schema describing every field's kind and comparison direction.
//! - **CapabilityBlock**: a flat record of typed fields for one block type.
//! - **CapabilityChain**: an unordered collection of blocks, at most one per
//!   block type. Profiles own a *required* chain, devices report a *reported*
//!   chain.
//! - **ProfileTable**: the immutable id → profile mapping produced at build
//!   time and shared read-only at runtime.
//! - **ComparisonVerdict**: the boolean outcome of a compatibility check plus
//!   every unmet requirement, each self-describing.
//!
//! # Design Principles
//!
//! 1. Values keep their native width and signedness; nothing is narrowed
//!    for comparison.
//! 2. "Not supported" is data, not an error. Verdicts enumerate every
//!    failure in one pass.
//! 3. Tables are built once and never mutated.

#![deny(unsafe_code)]

mod block;
mod device;
mod errors;
mod extensions;
mod id;
mod profile;
mod registry;
mod value;
mod verdict;
mod version;

pub use block::*;
pub use device::*;
pub use errors::*;
pub use extensions::*;
pub use id::*;
pub use profile::*;
pub use registry::*;
pub use value::*;
pub use verdict::*;
pub use version::*;
