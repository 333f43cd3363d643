//! `profilegen generate`: emit the profile table as Rust source

use crate::commands::load_table;
use crate::output::print_success;
use anyhow::{Context, Result};
use profile_generator::emit_rust;
use std::path::{Path, PathBuf};

/// Build the table and write it to `out`, or stdout when there is none.
pub fn execute(paths: &[PathBuf], out: Option<&Path>) -> Result<()> {
    let table = load_table(paths)?;
    let source = emit_rust(&table);

    match out {
        Some(out) => {
            std::fs::write(out, source).with_context(|| format!("writing {}", out.display()))?;
            print_success(&format!(
                "Wrote {} profile(s) to {}",
                table.len(),
                out.display()
            ));
        }
        None => print!("{}", source),
    }
    Ok(())
}
