//! `profilegen check`: check a saved device report against profiles

use crate::commands::{find_profile, load_table};
use crate::output::{print_error, print_error_detail, print_json, print_success, OutputFormat};
use anyhow::{bail, Context, Result};
use profile_runtime::{check_profiles, DeviceReport};
use profile_types::Profile;
use std::path::{Path, PathBuf};

/// Check `device` against the named profiles, or every profile when none
/// are named. Fails when any profile is unsupported.
pub fn execute(
    paths: &[PathBuf],
    profiles: &[String],
    device: &Path,
    format: OutputFormat,
) -> Result<()> {
    let table = load_table(paths)?;
    let text = std::fs::read_to_string(device)
        .with_context(|| format!("reading {}", device.display()))?;
    let report = DeviceReport::from_json_str(&text)
        .with_context(|| format!("loading device report {}", device.display()))?;

    let selected: Vec<&Profile> = if profiles.is_empty() {
        table.iter().collect()
    } else {
        profiles
            .iter()
            .map(|selector| find_profile(&table, selector))
            .collect::<Result<_>>()?
    };

    let verdicts = check_profiles(selected, &report);
    match format {
        OutputFormat::Json => print_json(&verdicts)?,
        OutputFormat::Table => {
            for verdict in &verdicts {
                if verdict.supported {
                    print_success(&format!("{} supported", verdict.profile));
                } else {
                    print_error(&format!(
                        "{} not supported ({} unmet requirement(s))",
                        verdict.profile,
                        verdict.failures.len()
                    ));
                    for failure in &verdict.failures {
                        print_error_detail(&failure.to_string());
                    }
                }
            }
        }
    }

    let unsupported = verdicts.iter().filter(|v| !v.supported).count();
    if unsupported > 0 {
        bail!(
            "device does not support {} of {} profile(s)",
            unsupported,
            verdicts.len()
        );
    }
    Ok(())
}
