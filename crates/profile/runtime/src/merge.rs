//! Device Creation Merger
//!
//! Folds a profile's requirements into a caller's device creation request.
//! Extensions are unioned. Feature toggles are unioned, with a profile-required
//! `true` acting as a floor the caller may not lower unless the request
//! is lenient. Everything else in the request passes through untouched.

use crate::errors::{MergeError, MergeResult};
use profile_types::{
    is_well_known_extension, BlockKind, BlockTypeId, CapabilityBlock, DeviceCreationRequest,
    FieldValue, Profile, ProfileTable,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Decides which extension names a caller may request.
pub trait ExtensionRegistry {
    fn contains_extension(&self, name: &str) -> bool;
}

/// The built-in list of well-known device extensions.
#[derive(Clone, Copy, Debug, Default)]
pub struct WellKnownExtensions;

impl ExtensionRegistry for WellKnownExtensions {
    fn contains_extension(&self, name: &str) -> bool {
        is_well_known_extension(name)
    }
}

/// Any extension some profile requires, plus the well-known list.
impl ExtensionRegistry for ProfileTable {
    fn contains_extension(&self, name: &str) -> bool {
        is_well_known_extension(name) || self.iter().any(|p| p.extension(name).is_some())
    }
}

impl ExtensionRegistry for BTreeSet<String> {
    fn contains_extension(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// A profile-required feature the caller turned off in a lenient request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDowngrade {
    pub block_type: BlockTypeId,
    pub field: String,
}

/// The merged request plus any downgrades a lenient merge accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergedCreationRequest {
    pub request: DeviceCreationRequest,
    pub downgrades: Vec<FeatureDowngrade>,
}

/// Merge using the well-known extension list.
pub fn merge(
    profile: &Profile,
    request: &DeviceCreationRequest,
) -> MergeResult<MergedCreationRequest> {
    merge_with_registry(profile, request, &WellKnownExtensions)
}

/// Merge, accepting caller extensions the profile requires or `registry` knows.
pub fn merge_with_registry<R: ExtensionRegistry + ?Sized>(
    profile: &Profile,
    request: &DeviceCreationRequest,
    registry: &R,
) -> MergeResult<MergedCreationRequest> {
    check_requested_features(request)?;

    for name in &request.extensions {
        if profile.extension(name).is_none() && !registry.contains_extension(name) {
            return Err(MergeError::UnknownRequestedExtension(name.clone()));
        }
    }

    let mut merged = request.clone();
    merged.extensions = union_extensions(profile, request);

    let mut downgrades = Vec::new();
    for required in profile.feature_blocks() {
        match merged.features.get_mut(required.block_type) {
            Some(requested) => {
                merge_block(profile, required, requested, request.strict, &mut downgrades)?
            }
            None => merged.features.upsert(required.clone()),
        }
    }

    debug!(
        profile = %profile.id,
        extensions = merged.extensions.len(),
        feature_blocks = merged.features.len(),
        "Merged device creation request"
    );
    Ok(MergedCreationRequest {
        request: merged,
        downgrades,
    })
}

/// Only feature blocks with schema fields of the schema's kind may be requested.
fn check_requested_features(request: &DeviceCreationRequest) -> MergeResult<()> {
    for block in request.features.iter() {
        if block.block_type.kind() != BlockKind::Features {
            return Err(MergeError::AmbiguousFeatureBlock {
                block_type: block.block_type,
                field: None,
            });
        }
        // Unknown names and values of the wrong kind are both ambiguous.
        if let Some(field) = block.fields.iter().find_map(|(name, value)| {
            match block.block_type.field(name) {
                Some(schema) if value.matches_kind(schema.kind) => None,
                _ => Some(name),
            }
        }) {
            return Err(MergeError::AmbiguousFeatureBlock {
                block_type: block.block_type,
                field: Some(field.clone()),
            });
        }
    }
    Ok(())
}

/// Profile extensions in declared order, then caller-only ones in caller order.
fn union_extensions(profile: &Profile, request: &DeviceCreationRequest) -> Vec<String> {
    let mut seen = BTreeSet::new();
    profile
        .extensions
        .iter()
        .map(|e| e.name.as_str())
        .chain(request.extensions.iter().map(String::as_str))
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

fn merge_block(
    profile: &Profile,
    required: &CapabilityBlock,
    requested: &mut CapabilityBlock,
    strict: bool,
    downgrades: &mut Vec<FeatureDowngrade>,
) -> MergeResult<()> {
    for (field, want) in &required.fields {
        let Some(have) = requested.fields.get_mut(field) else {
            requested.set(field.clone(), want.clone());
            continue;
        };
        match (want, have.as_bool()) {
            (FieldValue::Bool(true), Some(false)) if strict => {
                return Err(MergeError::FeatureDowngradeRejected {
                    profile: profile.id.clone(),
                    block_type: required.block_type,
                    field: field.clone(),
                });
            }
            (FieldValue::Bool(true), Some(false)) => {
                warn!(
                    profile = %profile.id,
                    block = %required.block_type,
                    field = field.as_str(),
                    "Lenient request disables a profile-required feature"
                );
                downgrades.push(FeatureDowngrade {
                    block_type: required.block_type,
                    field: field.clone(),
                });
            }
            (FieldValue::Bool(a), Some(b)) => *have = FieldValue::Bool(*a || b),
            // Non-boolean schema fields are left as requested.
            _ => {}
        }
    }
    Ok(())
}
