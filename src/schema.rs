//! Destination table DDL
//!
//! One `CREATE TABLE IF NOT EXISTS` declaration per endpoint. Creation
//! is idempotent; there is no migration support. If an existing table
//! was created with a different shape, it is left untouched and
//! subsequent inserts fail with whatever the store reports.
//!
//! Timestamps are stored as the API's ISO-8601 strings. Flattened list
//! columns (`parents_sha`, `assignees`, `labels`, `reviewers`) hold
//! comma-joined values and are empty strings when the list was empty.

use crate::endpoint::Endpoint;
use crate::error::Result;
use rusqlite::Connection;

/// The `CREATE TABLE IF NOT EXISTS` statement for an endpoint's table.
pub fn ddl(endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::Contributors => {
            "CREATE TABLE IF NOT EXISTS contributors(
                id INTEGER NOT NULL,
                node_id VARCHAR(255) NOT NULL,
                login VARCHAR(255) NOT NULL,
                contributions INTEGER NOT NULL,
                PRIMARY KEY(id, node_id, login)
            );"
        }
        Endpoint::Commits => {
            "CREATE TABLE IF NOT EXISTS commits(
                sha VARCHAR(255) NOT NULL,
                tree_sha VARCHAR(255) NOT NULL,
                parents_sha TEXT NOT NULL,
                node_id VARCHAR(255) NOT NULL,
                author VARCHAR(255),
                date_authored VARCHAR(255) NOT NULL,
                committer VARCHAR(255),
                date_committed VARCHAR(255) NOT NULL,
                message TEXT NOT NULL,
                comments INTEGER NOT NULL,
                PRIMARY KEY(sha, node_id)
            );"
        }
        Endpoint::Issues => {
            "CREATE TABLE IF NOT EXISTS issues(
                id INTEGER NOT NULL,
                node_id VARCHAR(255) NOT NULL,
                number INTEGER NOT NULL,
                state VARCHAR(255) NOT NULL,
                title TEXT NOT NULL,
                body TEXT,
                assignees TEXT NOT NULL,
                labels TEXT NOT NULL,
                comments INTEGER NOT NULL,
                created_by VARCHAR(255) NOT NULL,
                date_created VARCHAR(255) NOT NULL,
                date_updated VARCHAR(255) NOT NULL,
                date_closed VARCHAR(255),
                PRIMARY KEY(id, node_id, number)
            );"
        }
        Endpoint::Pulls => {
            "CREATE TABLE IF NOT EXISTS pulls(
                id INTEGER NOT NULL,
                node_id VARCHAR(255) NOT NULL,
                number INTEGER NOT NULL,
                state VARCHAR(255) NOT NULL,
                title TEXT NOT NULL,
                body TEXT,
                assignees TEXT NOT NULL,
                reviewers TEXT NOT NULL,
                labels TEXT NOT NULL,
                created_by VARCHAR(255) NOT NULL,
                date_created VARCHAR(255) NOT NULL,
                date_updated VARCHAR(255) NOT NULL,
                date_closed VARCHAR(255),
                date_merged VARCHAR(255),
                merge_sha VARCHAR(255),
                head_sha VARCHAR(255) NOT NULL,
                base_sha VARCHAR(255) NOT NULL,
                PRIMARY KEY(id, node_id, number)
            );"
        }
    }
}

/// Idempotently create the endpoint's table.
pub fn ensure_table(conn: &Connection, endpoint: Endpoint) -> Result<()> {
    conn.execute_batch(ddl(endpoint))?;
    Ok(())
}
