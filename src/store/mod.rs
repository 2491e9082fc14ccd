//! SQLite destination store
//!
//! The store wraps a single `rusqlite` connection shared across all
//! four endpoint load phases. Loads are conflict-tolerant and committed
//! row by row, so an interrupted run keeps everything already loaded
//! and a re-run is additive-idempotent.

mod engine;

pub use engine::{LoadReport, Store};
