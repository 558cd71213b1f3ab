// src/lib.rs
//! twofauth-export — move 2FAuth accounts into Bitwarden
//!
//! Features:
//! - Read-only access to the 2FAuth SQLite database
//! - Bitwarden CSV export (`export_bitwarden_csv`)
//! - Bitwarden JSON export (`export_bitwarden_json`)
//! - TOTP secrets held in zeroize-on-drop wrappers while in memory

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod db;
pub mod enums;
pub mod error;
pub mod export;
pub mod runner;

// Re-export everything users need at the crate root
pub use aliases::TotpSecret;
pub use config::Config;
pub use crate::core::{Result as CoreResult, SourceRecord};
pub use db::{open_source_db, read_accounts};
pub use enums::ExportFormat;
pub use error::ExportError;
pub use export::{export, export_to_csv, export_to_json, ExportSummary};
