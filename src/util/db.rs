use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::info;

/// Handle over the local miniatures store.
///
/// The store file is owned exclusively for the lifetime of the process; the
/// connection is opened once at startup and dropped at exit.
pub struct Store {
    pub conn: Connection,
}

impl Store {
    pub fn open(path: &str) -> Result<Self> {
        let conn =
            Connection::open(path).with_context(|| format!("open store at {path}"))?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .context("enable foreign key enforcement")?;
        info!(path, "store opened");
        Ok(Self { conn })
    }

    /// Whether a table of the given name exists (case-insensitive).
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let mut stmt = self.conn.prepare(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND lower(name) = lower(?1) LIMIT 1",
        )?;
        let mut rows = stmt.query([table])?;
        Ok(rows.next()?.is_some())
    }
}
