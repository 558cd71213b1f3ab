// src/runner.rs
//! Shared body of the two export binaries

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config;
use crate::enums::ExportFormat;
use crate::error::ExportError;
use crate::export::{export, ExportSummary};

/// stderr logging, `RUST_LOG` aware, quiet by default so stdout stays clean
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Directory holding the running executable; all default paths hang off it.
pub fn base_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .context("Executable path has no parent directory")
}

/// Run one export and print the console line.
///
/// A missing database is reported and yields `Ok(None)`; nothing is written.
pub fn run(format: ExportFormat, base_dir: &Path) -> Result<Option<ExportSummary>> {
    let conf = config::load(base_dir).context("Failed to load export config")?;
    let db_path = conf.paths.database_path(base_dir);
    let output_path = conf.paths.output_path(format, base_dir);
    debug!(%format, db = %db_path.display(), output = %output_path.display(), "starting export");

    match export(format, &db_path, &output_path) {
        Ok(summary) => {
            println!(
                "Successfully exported {} accounts to {}",
                summary.count,
                summary.output_path.display()
            );
            Ok(Some(summary))
        }
        Err(err @ ExportError::DatabaseNotFound(_)) => {
            println!("Error: {err}");
            Ok(None)
        }
        Err(err) => Err(err).with_context(|| format!("{format} export failed")),
    }
}
