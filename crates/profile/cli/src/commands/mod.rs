//! Subcommand implementations

pub mod check;
pub mod generate;
pub mod list;
pub mod merge;
pub mod validate;

use anyhow::{anyhow, bail, Context, Result};
use profile_generator::generate;
use profile_schema::{SchemaValidator, ValidatedDocument};
use profile_types::{Profile, ProfileTable};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read and validate one document, naming it by its path.
pub fn load_document(validator: &SchemaValidator, path: &Path) -> Result<ValidatedDocument> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc = validator.validate_str(path.display().to_string(), &text)?;
    debug!(document = %path.display(), "Loaded profile document");
    Ok(doc)
}

/// Validate every document and build the profile table. Fails fast.
pub fn load_table(paths: &[PathBuf]) -> Result<ProfileTable> {
    if paths.is_empty() {
        bail!("no profile documents given (pass paths or set `inputs` in the config file)");
    }
    let validator = SchemaValidator::new()?;
    let documents = paths
        .iter()
        .map(|path| load_document(&validator, path))
        .collect::<Result<Vec<_>>>()?;
    Ok(generate(&documents)?)
}

/// Find a profile by `NAME@VERSION`, or by `NAME` for its highest version.
pub fn find_profile<'a>(table: &'a ProfileTable, selector: &str) -> Result<&'a Profile> {
    let found = match selector.split_once('@') {
        Some((name, version)) => {
            let version: u32 = version
                .parse()
                .with_context(|| format!("invalid profile version in '{}'", selector))?;
            table.find(name, version)
        }
        None => table.latest(selector),
    };
    found.ok_or_else(|| anyhow!("profile '{}' is not defined by the given documents", selector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_types::{ApiVersion, ProfileId};

    fn table() -> ProfileTable {
        let api = ApiVersion::new(1, 3, 0).unwrap();
        vec![
            Profile::new(ProfileId::new("VP_A", 1), api),
            Profile::new(ProfileId::new("VP_A", 2), api),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_find_profile_by_selector() {
        let table = table();
        assert_eq!(find_profile(&table, "VP_A@1").unwrap().id.spec_version, 1);
        assert_eq!(find_profile(&table, "VP_A").unwrap().id.spec_version, 2);
        assert!(find_profile(&table, "VP_A@3").is_err());
        assert!(find_profile(&table, "VP_A@x").is_err());
        assert!(find_profile(&table, "VP_B").is_err());
    }

    #[test]
    fn test_load_table_requires_documents() {
        assert!(load_table(&[]).is_err());
    }
}
