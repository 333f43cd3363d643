//! `profilegen validate`: check documents without writing anything

use crate::commands::load_document;
use crate::output::{print_error, print_error_detail, print_success};
use anyhow::{bail, Result};
use profile_generator::generate;
use profile_schema::{SchemaError, SchemaValidator};
use std::path::PathBuf;

/// Validate every document, reporting all failures, then resolve the table.
pub fn execute(paths: &[PathBuf]) -> Result<()> {
    if paths.is_empty() {
        bail!("no profile documents given");
    }
    let validator = SchemaValidator::new()?;

    let mut documents = Vec::new();
    let mut failed = 0usize;
    for path in paths {
        match load_document(&validator, path) {
            Ok(doc) => {
                print_success(&format!(
                    "{}: {} profile(s)",
                    path.display(),
                    doc.profiles().len()
                ));
                documents.push(doc);
            }
            Err(err) => {
                failed += 1;
                print_error(&err.to_string());
                if let Some(schema_err) = err.downcast_ref::<SchemaError>() {
                    for violation in schema_err.violations() {
                        print_error_detail(&violation.to_string());
                    }
                }
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} document(s) failed validation", failed, paths.len());
    }

    let table = generate(&documents)?;
    print_success(&format!("{} profile(s) resolved", table.len()));
    Ok(())
}
