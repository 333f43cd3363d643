//! `profilegen list`: show the resolved profiles

use crate::commands::load_table;
use crate::output::{print_output, OutputFormat};
use anyhow::Result;
use profile_types::Profile;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

/// Table row for profile display
#[derive(Debug, Serialize, Tabled)]
struct ProfileRow {
    /// Profile name
    name: String,
    /// Profile spec version
    version: u32,
    /// Minimum API version
    api: String,
    /// Required extensions
    extensions: usize,
    /// Constrained capability blocks
    blocks: usize,
    /// Base profile, if inherited
    base: String,
    label: String,
}

impl From<&Profile> for ProfileRow {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.id.name.clone(),
            version: profile.id.spec_version,
            api: profile.api_version.to_string(),
            extensions: profile.extensions.len(),
            blocks: profile.capabilities.len(),
            base: profile
                .base
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".to_string()),
            label: profile.label.clone(),
        }
    }
}

pub fn execute(paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    let table = load_table(paths)?;
    match format {
        OutputFormat::Json => {
            let profiles: Vec<&Profile> = table.iter().collect();
            crate::output::print_json(&profiles)
        }
        OutputFormat::Table => print_output(table.iter().map(ProfileRow::from).collect(), format),
    }
}
