//! Account queries against the 2FAuth database
//!
//! Connection logic lives in `source_db_conn`; this module only runs the
//! fixed projection and turns rows into [`SourceRecord`]s.

use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::consts::ACCOUNTS_QUERY;
use crate::core::{Result, SourceRecord};
use crate::db::open_source_db;

/// Fetch every account in store order.
///
/// NULL columns come back as empty strings, same as an empty CSV cell.
pub fn fetch_accounts(conn: &Connection) -> Result<Vec<SourceRecord>> {
    let mut stmt = conn.prepare(ACCOUNTS_QUERY)?;

    let rows = stmt.query_map([], |row| {
        Ok(SourceRecord::new(
            row.get::<_, Option<String>>(0)?.unwrap_or_default(), // service
            row.get::<_, Option<String>>(1)?.unwrap_or_default(), // account
            row.get::<_, Option<String>>(2)?.unwrap_or_default(), // secret
        ))
    })?;

    let records = rows.collect::<rusqlite::Result<Vec<_>>>()?;
    debug!(count = records.len(), "fetched 2FAuth accounts");

    Ok(records)
}

/// Open, query, close. The connection is gone by the time this returns.
pub fn read_accounts(db_path: &Path) -> Result<Vec<SourceRecord>> {
    let conn = open_source_db(db_path)?;
    fetch_accounts(&conn)
}
