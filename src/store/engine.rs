//! Connection wrapper and idempotent loads

use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::mapper::TableRow;
use crate::schema;
use rusqlite::{params_from_iter, Connection};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of loading one batch of rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows newly inserted
    pub inserted: usize,
    /// Rows skipped as primary-key duplicates
    pub ignored: usize,
}

impl LoadReport {
    /// Total rows offered to the store.
    pub fn total(&self) -> usize {
        self.inserted + self.ignored
    }
}

/// SQLite-backed destination store
pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Open (creating if absent) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (used by tests).
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
            path: None,
        })
    }

    /// The backing file, if this store is file-backed.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Idempotently create the endpoint's destination table.
    pub fn ensure_table(&self, endpoint: Endpoint) -> Result<()> {
        schema::ensure_table(&self.conn, endpoint)
    }

    /// Load a batch of rows with conflict-tolerant inserts.
    ///
    /// Each row is inserted with `INSERT OR IGNORE` and committed
    /// immediately (the connection is in autocommit mode), so a row is
    /// durable before the next row's insert is attempted. Primary-key
    /// duplicates are counted but otherwise silently skipped.
    pub fn load<R: TableRow>(&self, rows: &[R]) -> Result<LoadReport> {
        let sql = insert_sql::<R>();
        let mut stmt = self.conn.prepare(&sql)?;

        let mut report = LoadReport::default();
        for row in rows {
            let changed = stmt.execute(params_from_iter(row.values()))?;
            if changed == 0 {
                report.ignored += 1;
            } else {
                report.inserted += 1;
            }
        }

        debug!(
            table = R::TABLE,
            inserted = report.inserted,
            ignored = report.ignored,
            "batch loaded"
        );
        Ok(report)
    }

    /// Row count of a table.
    pub fn count(&self, table: &str) -> Result<i64> {
        let count = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("path", &self.path).finish()
    }
}

/// `INSERT OR IGNORE INTO {table}({columns}) VALUES (?,...)` for a row
/// type, columns in declared order.
fn insert_sql<R: TableRow>() -> String {
    let placeholders = vec!["?"; R::COLUMNS.len()].join(",");
    format!(
        "INSERT OR IGNORE INTO {}({}) VALUES ({})",
        R::TABLE,
        R::COLUMNS.join(","),
        placeholders
    )
}
