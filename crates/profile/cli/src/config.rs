//! CLI configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "profilegen.toml";

/// profilegen configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfilegenConfig {
    /// Profile documents used when a command names none
    pub inputs: Vec<PathBuf>,

    /// Where `generate` writes the Rust table when `--out` is absent
    pub output: Option<PathBuf>,

    /// Reject feature downgrades in `merge` unless overridden
    pub strict: Option<bool>,
}

impl ProfilegenConfig {
    /// Load configuration from file; a missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .with_context(|| format!("reading {}", config_path.display()))?;
            let config: ProfilegenConfig = toml::from_str(&contents)
                .with_context(|| format!("parsing {}", config_path.display()))?;
            Ok(config)
        } else {
            Ok(ProfilegenConfig::default())
        }
    }

    /// Documents named on the command line, else the configured inputs.
    pub fn documents(&self, cli: Vec<PathBuf>) -> Vec<PathBuf> {
        if cli.is_empty() {
            self.inputs.clone()
        } else {
            cli
        }
    }

    pub fn strict(&self) -> bool {
        self.strict.unwrap_or(true)
    }
}
