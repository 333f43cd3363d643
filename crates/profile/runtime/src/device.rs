//! Device query seam
//!
//! The runtime never talks to a driver itself. A `DeviceQuery` implementation
//! supplies complete snapshots of what a device reports; everything past
//! that point is pure. Timeouts and retries belong to the implementation.

use crate::errors::{RuntimeError, RuntimeResult};
use crate::support::check_support;
use profile_types::{
    ApiVersion, CapabilityChain, ComparisonVerdict, ExtensionProperties, FormatCapability,
    ProfileId, ProfileTable, QueueFamilyCapability,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Source of reported device capabilities.
pub trait DeviceQuery {
    /// Handle naming one physical device.
    type Device;

    fn query_api_version(&self, device: &Self::Device) -> ApiVersion;

    /// Every capability block the device reports.
    fn query_reported_chain(&self, device: &Self::Device) -> CapabilityChain;

    fn query_extension_list(&self, device: &Self::Device) -> Vec<ExtensionProperties>;

    fn query_queue_families(&self, device: &Self::Device) -> Vec<QueueFamilyCapability>;

    fn query_formats(&self, device: &Self::Device) -> BTreeMap<String, FormatCapability>;
}

/// Snapshot of everything one device reports.
///
/// Serialized in the same document form profiles use, so a report saved as
/// JSON can be checked offline. Reported blocks and fields the registry does
/// not know are dropped on load; no profile can constrain them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceReport {
    pub api_version: ApiVersion,
    #[serde(default)]
    pub extensions: Vec<ExtensionProperties>,
    #[serde(default, deserialize_with = "reported_chain")]
    pub capabilities: CapabilityChain,
    #[serde(default)]
    pub queue_families: Vec<QueueFamilyCapability>,
    #[serde(default)]
    pub formats: BTreeMap<String, FormatCapability>,
}

impl DeviceReport {
    pub fn new(api_version: ApiVersion) -> Self {
        Self {
            api_version,
            extensions: Vec::new(),
            capabilities: CapabilityChain::new(),
            queue_families: Vec::new(),
            formats: BTreeMap::new(),
        }
    }

    /// Query every part of the report from a live device.
    pub fn capture<Q: DeviceQuery>(query: &Q, device: &Q::Device) -> Self {
        Self {
            api_version: query.query_api_version(device),
            extensions: query.query_extension_list(device),
            capabilities: query.query_reported_chain(device),
            queue_families: query.query_queue_families(device),
            formats: query.query_formats(device),
        }
    }

    /// Parse a JSON device report.
    pub fn from_json_str(text: &str) -> RuntimeResult<Self> {
        serde_json::from_str(text).map_err(|e| RuntimeError::MalformedReport(e.to_string()))
    }

    /// Highest reported version of the named extension.
    pub fn extension_version(&self, name: &str) -> Option<u32> {
        self.extensions
            .iter()
            .filter(|e| e.name == name)
            .map(|e| e.version)
            .max()
    }
}

fn reported_chain<'de, D>(deserializer: D) -> Result<CapabilityChain, D::Error>
where
    D: Deserializer<'de>,
{
    let object = Map::<String, Value>::deserialize(deserializer)?;
    let (chain, skipped) =
        CapabilityChain::from_json_lenient(&object).map_err(serde::de::Error::custom)?;
    for name in &skipped {
        debug!(capability = %name, "Ignoring reported capability outside the block registry");
    }
    Ok(chain)
}

/// Look up `id` and check the queried device against it.
pub fn check_device_support<Q: DeviceQuery>(
    table: &ProfileTable,
    id: &ProfileId,
    query: &Q,
    device: &Q::Device,
) -> RuntimeResult<ComparisonVerdict> {
    let profile = table
        .get(id)
        .ok_or_else(|| RuntimeError::UnknownProfile(id.clone()))?;
    let report = DeviceReport::capture(query, device);
    Ok(check_support(profile, &report))
}
