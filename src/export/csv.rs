// src/export/csv.rs
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use super::bitwarden::CsvLoginRow;
use super::ExportSummary;
use crate::consts::BITWARDEN_CSV_HEADERS;
use crate::core::{Result, SourceRecord};
use crate::db::read_accounts;
use crate::enums::ExportFormat;

/// Write the Bitwarden header plus one login row per record.
///
/// Returns the number of data rows. The header is written even when
/// `records` is empty.
pub fn write_csv<W: Write>(records: &[SourceRecord], output: W) -> Result<usize> {
    let mut writer = WriterBuilder::new()
        .has_headers(false) // header goes out explicitly so empty exports still get one
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(output);

    writer.write_record(BITWARDEN_CSV_HEADERS)?;
    for record in records {
        writer.serialize(CsvLoginRow::from(record))?;
    }
    writer.flush()?;

    Ok(records.len())
}

/// Export every 2FAuth account to a Bitwarden CSV file.
///
/// SECURITY WARNING: the file holds every TOTP seed in cleartext.
pub fn export_to_csv(db_path: &Path, output_path: &Path) -> Result<ExportSummary> {
    // Output is only created once the database has answered
    let records = read_accounts(db_path)?;

    let file = File::create(output_path)?;
    let count = write_csv(&records, BufWriter::new(&file))?;
    file.sync_all()?;

    info!(count, path = %output_path.display(), "wrote Bitwarden CSV export");

    Ok(ExportSummary {
        format: ExportFormat::BitwardenCsv,
        count,
        output_path: output_path.to_path_buf(),
    })
}
