//! `profilegen merge`: fold a profile into a device creation request

use crate::commands::{find_profile, load_table};
use crate::output::{print_json, print_warning};
use anyhow::{Context, Result};
use profile_runtime::merge_with_registry;
use profile_types::DeviceCreationRequest;
use std::path::{Path, PathBuf};

/// Print the merged request as JSON. Extensions any loaded profile requires
/// are accepted alongside the well-known list.
pub fn execute(paths: &[PathBuf], profile: &str, request: Option<&Path>, strict: bool) -> Result<()> {
    let table = load_table(paths)?;
    let profile = find_profile(&table, profile)?;

    let mut request = match request {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<DeviceCreationRequest>(&text)
                .with_context(|| format!("parsing creation request {}", path.display()))?
        }
        None => DeviceCreationRequest::new(),
    };
    request.strict = strict;

    let merged = merge_with_registry(profile, &request, &table)?;
    for downgrade in &merged.downgrades {
        print_warning(&format!(
            "{}.{} disabled although {} requires it",
            downgrade.block_type, downgrade.field, profile.id
        ));
    }
    print_json(&merged.request)
}
