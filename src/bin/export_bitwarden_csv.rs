//! Export 2FAuth accounts to a Bitwarden CSV import file

use anyhow::Result;
use twofauth_export::runner::{base_dir, init_tracing, run};
use twofauth_export::ExportFormat;

fn main() -> Result<()> {
    init_tracing();
    run(ExportFormat::BitwardenCsv, &base_dir()?)?;
    Ok(())
}
