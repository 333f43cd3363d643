use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one profile definition: its name and spec version.
///
/// Unique within a loaded `ProfileTable`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProfileId {
    pub name: String,
    pub spec_version: u32,
}

impl ProfileId {
    pub fn new(name: impl Into<String>, spec_version: u32) -> Self {
        Self {
            name: name.into(),
            spec_version,
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.spec_version)
    }
}

/// A required device extension and the lowest acceptable spec version.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtensionRequirement {
    pub name: String,
    pub min_version: u32,
}

impl ExtensionRequirement {
    pub fn new(name: impl Into<String>, min_version: u32) -> Self {
        Self {
            name: name.into(),
            min_version,
        }
    }
}

/// An extension as reported by a device.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtensionProperties {
    pub name: String,
    pub version: u32,
}

impl ExtensionProperties {
    pub fn new(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}
