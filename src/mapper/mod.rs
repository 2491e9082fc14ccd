//! Raw JSON to flat row projection
//!
//! One projection function per endpoint turns a raw API record into a
//! typed row with a declared, fixed column list. A required field that
//! is absent fails the projection (and with it the batch); nullable
//! fields map to `Option` columns. List-valued fields are joined into a
//! single comma-delimited string, the empty list becoming `""` rather
//! than NULL. Names on the platform are assumed comma-free; the
//! flattening is lossy otherwise.

mod rows;

pub use rows::{CommitRow, ContributorRow, IssueRow, PullRow};

use rusqlite::types::Value as SqlValue;

/// A flat row bound to one destination table.
///
/// `COLUMNS` is the declared projection for the table; `values` must
/// return one value per column, in the same order. The insert statement
/// is generated from these, so no record's particular key set ever
/// shapes the schema.
pub trait TableRow {
    /// Destination table name
    const TABLE: &'static str;

    /// Column names, in insert order
    const COLUMNS: &'static [&'static str];

    /// The row's values, one per column
    fn values(&self) -> Vec<SqlValue>;
}
