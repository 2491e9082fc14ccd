// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # gh-harvest
//!
//! Extract activity data from a public GitHub repository into a local
//! SQLite database for later analysis.
//!
//! ## Features
//!
//! - **Paginated extraction**: follows `Link: rel="next"` headers across
//!   all pages of the contributors, commits, issues, and pulls endpoints
//! - **Rate-limit awareness**: checks the remaining core-API quota before
//!   each fetch sequence and aborts cleanly when it is exhausted
//! - **Typed flattening**: projects each raw JSON record onto a fixed,
//!   per-endpoint column set, joining list-valued fields into
//!   comma-delimited strings
//! - **Idempotent load**: `INSERT OR IGNORE` with per-row commits, so
//!   re-running against the same database file never duplicates rows
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gh_harvest::{Harvester, HarvestConfig, Store, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = HarvestConfig::from_env()?;
//!     let store = Store::open(config.database_path())?;
//!
//!     let harvester = Harvester::new(config)?;
//!     let reports = harvester.run(&store).await?;
//!
//!     for report in reports {
//!         println!("{}: {} rows", report.endpoint, report.inserted);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        Harvester                           │
//! │   for each endpoint: fetch → ensure table → map → load     │
//! └────────────────────────────────────────────────────────────┘
//!              │                                 │
//! ┌────────────┴───────────────┐   ┌─────────────┴─────────────┐
//! │          Extract           │   │       Transform/Load      │
//! ├────────────────────────────┤   ├───────────────────────────┤
//! │ RateLimitGuard (pre-check) │   │ mapper  (typed rows)      │
//! │ HttpClient     (GET)       │   │ schema  (CREATE TABLE)    │
//! │ pagination     (Link next) │   │ Store   (INSERT OR IGNORE)│
//! └────────────────────────────┘   └───────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Runtime configuration (token, target repository, API base)
pub mod config;

/// The four harvested endpoints
pub mod endpoint;

/// HTTP client and rate-limit guard
pub mod http;

/// Link-header pagination
pub mod pagination;

/// Paginated extraction
pub mod extract;

/// Raw JSON to flat row projection
pub mod mapper;

/// Destination table DDL
pub mod schema;

/// SQLite destination store
pub mod store;

/// Run orchestration
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::HarvestConfig;
pub use endpoint::Endpoint;
pub use engine::{EndpointReport, Harvester};
pub use error::{Error, Result};
pub use store::Store;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
