// src/db/source_db_conn.rs
use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::core::Result;
use crate::error::ExportError;

/// Open the 2FAuth database read-only.
///
/// A missing file is reported as [`ExportError::DatabaseNotFound`] before
/// SQLite gets a chance to create an empty one.
pub fn open_source_db(db_path: &Path) -> Result<Connection> {
    if !db_path.exists() {
        return Err(ExportError::DatabaseNotFound(db_path.to_path_buf()));
    }

    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    debug!(path = %db_path.display(), "opened 2FAuth database");

    Ok(conn)
}
