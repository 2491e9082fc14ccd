//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Harvest GitHub repository activity into a local SQLite database
#[derive(Parser, Debug)]
#[command(name = "gh-harvest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Personal access token (overrides config file and environment)
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    /// Target repository as owner/name (overrides config file and environment)
    #[arg(short, long, global = true)]
    pub repo: Option<String>,

    /// API base URL (e.g. a GitHub Enterprise instance)
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Destination database file (default: {repo}_repo.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract, transform, and load all endpoints
    Run,

    /// Report current API quota usage without fetching any data
    Check,

    /// List the harvested endpoints and their destination tables
    Endpoints,
}
