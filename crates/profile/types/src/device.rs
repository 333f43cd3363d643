use crate::CapabilityChain;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Capabilities of one queue family.
///
/// Used both for what a profile requires and for what a device reports.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueueFamilyCapability {
    pub queue_flags: BTreeSet<String>,
    pub queue_count: u32,
    pub timestamp_valid_bits: u32,
}

impl QueueFamilyCapability {
    /// Whether this reported family meets `required`: flags superset,
    /// at least as many queues, at least as many timestamp bits.
    pub fn satisfies(&self, required: &QueueFamilyCapability) -> bool {
        required.queue_flags.is_subset(&self.queue_flags)
            && self.queue_count >= required.queue_count
            && self.timestamp_valid_bits >= required.timestamp_valid_bits
    }
}

/// Feature sets a format supports per tiling / usage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatCapability {
    pub linear_tiling_features: BTreeSet<String>,
    pub optimal_tiling_features: BTreeSet<String>,
    pub buffer_features: BTreeSet<String>,
}

impl FormatCapability {
    pub fn overlay(&mut self, other: &FormatCapability) {
        self.linear_tiling_features
            .extend(other.linear_tiling_features.iter().cloned());
        self.optimal_tiling_features
            .extend(other.optimal_tiling_features.iter().cloned());
        self.buffer_features
            .extend(other.buffer_features.iter().cloned());
    }
}

/// Queues requested from one family at device creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueRequest {
    pub family_index: u32,
    pub priorities: Vec<f32>,
}

impl QueueRequest {
    pub fn new(family_index: u32, count: usize) -> Self {
        Self {
            family_index,
            priorities: vec![1.0; count],
        }
    }

    pub fn queue_count(&self) -> usize {
        self.priorities.len()
    }
}

/// A device creation payload.
///
/// Callers fill in what they want; the merger folds a profile's
/// requirements in before the request is handed to the creation call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceCreationRequest {
    pub extensions: Vec<String>,
    /// Requested feature blocks. Only feature-kind blocks belong here.
    pub features: CapabilityChain,
    pub queues: Vec<QueueRequest>,
    /// Reject caller attempts to disable profile-required features.
    pub strict: bool,
}

impl Default for DeviceCreationRequest {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            features: CapabilityChain::new(),
            queues: Vec::new(),
            strict: true,
        }
    }
}

impl DeviceCreationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extension(mut self, name: impl Into<String>) -> Self {
        self.extensions.push(name.into());
        self
    }

    pub fn with_queue(mut self, queue: QueueRequest) -> Self {
        self.queues.push(queue);
        self
    }

    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(flags: &[&str], count: u32, bits: u32) -> QueueFamilyCapability {
        QueueFamilyCapability {
            queue_flags: flags.iter().map(|s| s.to_string()).collect(),
            queue_count: count,
            timestamp_valid_bits: bits,
        }
    }

    #[test]
    fn queue_family_satisfaction() {
        let required = family(&["GRAPHICS"], 1, 0);
        assert!(family(&["GRAPHICS", "COMPUTE"], 4, 64).satisfies(&required));
        assert!(!family(&["COMPUTE"], 4, 64).satisfies(&required));
        assert!(!family(&["GRAPHICS"], 0, 64).satisfies(&required));
        assert!(!family(&["GRAPHICS"], 1, 32).satisfies(&family(&["GRAPHICS"], 1, 36)));
    }

    #[test]
    fn creation_request_defaults_to_strict() {
        assert!(DeviceCreationRequest::new().strict);
        assert!(!DeviceCreationRequest::new().lenient().strict);
    }
}
