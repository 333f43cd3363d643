use crate::{
    ApiVersion, BlockKind, CapabilityChain, ExtensionRequirement, FormatCapability, ProfileId,
    QueueFamilyCapability,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A fully resolved capability profile.
///
/// Built once by the table generator (inheritance already folded in) and
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub label: String,
    pub description: String,
    pub api_version: ApiVersion,
    /// Required extensions in declared order, names unique.
    pub extensions: Vec<ExtensionRequirement>,
    /// The required capability chain.
    pub capabilities: CapabilityChain,
    pub queue_families: Vec<QueueFamilyCapability>,
    pub formats: BTreeMap<String, FormatCapability>,
    /// Profile this one was derived from, if any.
    pub base: Option<ProfileId>,
}

impl Profile {
    pub fn new(id: ProfileId, api_version: ApiVersion) -> Self {
        Self {
            label: id.name.clone(),
            id,
            description: String::new(),
            api_version,
            extensions: Vec::new(),
            capabilities: CapabilityChain::new(),
            queue_families: Vec::new(),
            formats: BTreeMap::new(),
            base: None,
        }
    }

    pub fn extension(&self, name: &str) -> Option<&ExtensionRequirement> {
        self.extensions.iter().find(|e| e.name == name)
    }

    /// Required blocks that take part in device creation.
    pub fn feature_blocks(&self) -> impl Iterator<Item = &crate::CapabilityBlock> {
        self.capabilities
            .iter()
            .filter(|b| b.block_type.kind() == BlockKind::Features)
    }
}

/// Immutable mapping from profile id to resolved profile.
///
/// Construct once, then share by reference; every accessor takes `&self`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileTable {
    profiles: BTreeMap<ProfileId, Profile>,
}

impl ProfileTable {
    pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.get(id)
    }

    pub fn find(&self, name: &str, spec_version: u32) -> Option<&Profile> {
        self.profiles.get(&ProfileId::new(name, spec_version))
    }

    /// Highest spec version of the named profile.
    pub fn latest(&self, name: &str) -> Option<&Profile> {
        self.profiles
            .values()
            .filter(|p| p.id.name == name)
            .max_by_key(|p| p.id.spec_version)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ProfileId> {
        self.profiles.keys()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Every extension name any profile in the table requires.
    pub fn known_extensions(&self) -> BTreeSet<&str> {
        self.profiles
            .values()
            .flat_map(|p| p.extensions.iter().map(|e| e.name.as_str()))
            .collect()
    }
}

impl FromIterator<Profile> for ProfileTable {
    /// Later profiles with the same id replace earlier ones.
    fn from_iter<T: IntoIterator<Item = Profile>>(iter: T) -> Self {
        let profiles = iter.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self { profiles }
    }
}
