// src/enums.rs
//! Public enum types used throughout the crate

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CSV_OUTPUT, DEFAULT_JSON_OUTPUT};

/// Bitwarden import formats the exporter can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    BitwardenCsv,
    BitwardenJson,
}

impl ExportFormat {
    /// File name used when the config does not override it
    pub fn default_output(self) -> &'static str {
        match self {
            ExportFormat::BitwardenCsv => DEFAULT_CSV_OUTPUT,
            ExportFormat::BitwardenJson => DEFAULT_JSON_OUTPUT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::BitwardenCsv => "Bitwarden CSV",
            ExportFormat::BitwardenJson => "Bitwarden JSON",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
