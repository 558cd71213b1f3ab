// src/db/mod.rs
//! Read side of the exporter: the 2FAuth SQLite database

pub mod source_db_conn;
pub mod source_db_ops;

pub use source_db_conn::open_source_db;
pub use source_db_ops::{fetch_accounts, read_accounts};
