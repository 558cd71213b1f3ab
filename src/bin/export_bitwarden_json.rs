//! Export 2FAuth accounts to a Bitwarden JSON import file

use anyhow::Result;
use twofauth_export::runner::{base_dir, init_tracing, run};
use twofauth_export::ExportFormat;

fn main() -> Result<()> {
    init_tracing();
    run(ExportFormat::BitwardenJson, &base_dir()?)?;
    Ok(())
}
