//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::HarvestConfig;
use crate::endpoint::Endpoint;
use crate::engine::Harvester;
use crate::error::Result;
use crate::store::Store;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Run => self.harvest().await,
            Commands::Check => self.check().await,
            Commands::Endpoints => self.endpoints(),
        }
    }

    /// Resolve the effective configuration: config file if given, then
    /// complete flag pairs, then the environment; individual flags
    /// override whichever source was used.
    fn resolve_config(&self) -> Result<HarvestConfig> {
        let mut config = match (&self.cli.config, &self.cli.token, &self.cli.repo) {
            (Some(path), _, _) => HarvestConfig::from_file(path)?,
            (None, Some(token), Some(repo)) => HarvestConfig::new(token.clone(), repo.clone()),
            _ => HarvestConfig::from_env()?,
        };

        if let Some(token) = &self.cli.token {
            config.access_token = token.clone();
        }
        if let Some(repo) = &self.cli.repo {
            config.owner_repo = repo.clone();
        }
        if let Some(api_base) = &self.cli.api_base {
            config.api_base = api_base.clone();
        }
        if let Some(db) = &self.cli.db {
            config.db_path = Some(db.clone());
        }

        config.validate()?;
        Ok(config)
    }

    /// Full extract-transform-load over all endpoints.
    async fn harvest(&self) -> Result<()> {
        let config = self.resolve_config()?;
        let db_path = config.database_path();

        let store = Store::open(&db_path)?;
        let harvester = Harvester::new(config)?;
        let reports = harvester.run(&store).await?;

        println!("Harvest of {} complete:", harvester.config().owner_repo);
        for report in reports {
            println!(
                "  {:<13} {:>6} fetched  {:>6} inserted  {:>6} ignored",
                report.endpoint, report.fetched, report.inserted, report.ignored
            );
        }
        println!("Database: {}", db_path.display());

        Ok(())
    }

    /// Quota status only.
    async fn check(&self) -> Result<()> {
        let config = self.resolve_config()?;
        let harvester = Harvester::new(config)?;
        let status = harvester.check_rate_limit().await?;

        println!(
            "Core API quota: {}/{} used, {} remaining",
            status.used, status.limit, status.remaining
        );
        if let Some(reset) = status.reset_at() {
            println!("Window resets at {reset}");
        }
        if status.is_exhausted() {
            println!("Rate limit exhausted; a run would abort immediately");
        }

        Ok(())
    }

    /// List endpoints and destination tables.
    fn endpoints(&self) -> Result<()> {
        for endpoint in Endpoint::ALL {
            let states = if endpoint.includes_all_states() {
                " (fetched with state=all)"
            } else {
                ""
            };
            println!("{:<13} -> table '{}'{}", endpoint, endpoint.table(), states);
        }
        Ok(())
    }
}
