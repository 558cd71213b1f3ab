// src/export/mod.rs
//! Export utilities for twofauth-export
//!
//! Two Bitwarden import formats: CSV and JSON. Both contain every TOTP
//! seed in cleartext.

use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::enums::ExportFormat;

pub use self::csv::{export_to_csv, write_csv};
pub use json::{export_to_json, write_json};

pub mod bitwarden;
pub mod csv;
pub mod json;

/// What a finished export reports back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub format: ExportFormat,
    pub count: usize,
    pub output_path: PathBuf,
}

/// Run a single export in the requested format
pub fn export(format: ExportFormat, db_path: &Path, output_path: &Path) -> Result<ExportSummary> {
    match format {
        ExportFormat::BitwardenCsv => export_to_csv(db_path, output_path),
        ExportFormat::BitwardenJson => export_to_json(db_path, output_path),
    }
}
