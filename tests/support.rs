// tests/support.rs
//! Test utilities — throwaway 2FAuth databases in temp directories

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tempfile::TempDir;

/// A fresh directory laid out like an install: `data/database.sqlite`
/// plus room for export files.
pub struct TestStore {
    dir: TempDir,
    conn: Option<Connection>,
}

#[allow(dead_code)] // not every test binary uses every helper
impl TestStore {
    /// Create the database with the columns 2FAuth actually has
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db_path = dir.path().join("data/database.sqlite");
        std::fs::create_dir_all(db_path.parent().unwrap()).expect("create data dir");

        let conn = Connection::open(&db_path).expect("open test db");
        conn.execute_batch(
            r#"
            CREATE TABLE twofaccounts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                service TEXT,
                account TEXT NOT NULL,
                secret TEXT,
                otp_type TEXT NOT NULL DEFAULT 'totp',
                digits INTEGER NOT NULL DEFAULT 6,
                algorithm TEXT NOT NULL DEFAULT 'sha1',
                period INTEGER DEFAULT 30,
                counter INTEGER,
                icon TEXT,
                created_at TEXT DEFAULT (datetime('now'))
            );
            "#,
        )
        .expect("create twofaccounts");

        Self {
            dir,
            conn: Some(conn),
        }
    }

    pub fn insert_account(&self, service: &str, account: &str, secret: &str) {
        self.conn()
            .execute(
                "INSERT INTO twofaccounts (service, account, secret) VALUES (?1, ?2, ?3)",
                params![service, account, secret],
            )
            .expect("insert account");
    }

    /// Row with NULL service and secret
    pub fn insert_bare_account(&self, account: &str) {
        self.conn()
            .execute(
                "INSERT INTO twofaccounts (service, account, secret) VALUES (NULL, ?1, NULL)",
                params![account],
            )
            .expect("insert bare account");
    }

    /// Close the writer connection, the exporter opens its own
    pub fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, e)| e).expect("close test db");
        }
    }

    pub fn base_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("data/database.sqlite")
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn conn(&self) -> &Connection {
        self.conn.as_ref().expect("test db already closed")
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Temp dir with no database in it
#[allow(dead_code)]
pub fn empty_install() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}
