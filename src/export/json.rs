// src/export/json.rs
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use super::bitwarden::JsonExport;
use super::ExportSummary;
use crate::core::{Result, SourceRecord};
use crate::db::read_accounts;
use crate::enums::ExportFormat;

/// Serialize `{"items": [...]}` pretty-printed with two-space indent.
pub fn write_json<W: Write>(records: &[SourceRecord], mut output: W) -> Result<usize> {
    let export = JsonExport::from_records(records);

    serde_json::to_writer_pretty(&mut output, &export)?;
    output.flush()?;

    Ok(export.items.len())
}

/// Export every 2FAuth account to a Bitwarden JSON file.
///
/// SECURITY WARNING: the file holds every TOTP seed in cleartext.
pub fn export_to_json(db_path: &Path, output_path: &Path) -> Result<ExportSummary> {
    let records = read_accounts(db_path)?;

    let file = File::create(output_path)?;
    let count = write_json(&records, BufWriter::new(&file))?;
    file.sync_all()?;

    info!(count, path = %output_path.display(), "wrote Bitwarden JSON export");

    Ok(ExportSummary {
        format: ExportFormat::BitwardenJson,
        count,
        output_path: output_path.to_path_buf(),
    })
}
