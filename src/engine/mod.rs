//! Run orchestration
//!
//! The harvester drives the extract → transform → load sequence for
//! each endpoint in turn. Endpoints run strictly sequentially; the
//! first failure (quota exhaustion, transport error, mapping error, or
//! an extraction that comes back empty) aborts the remaining endpoints.
//! Rows committed by earlier endpoints stay in the store.

use crate::config::HarvestConfig;
use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::extract::Extractor;
use crate::http::RateLimitStatus;
use crate::mapper::{CommitRow, ContributorRow, IssueRow, PullRow};
use crate::store::{LoadReport, Store};
use serde_json::Value;
use tracing::info;

/// Outcome of one endpoint's extract-transform-load pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointReport {
    /// Which endpoint ran
    pub endpoint: Endpoint,
    /// Raw records fetched across all pages
    pub fetched: usize,
    /// Rows newly inserted
    pub inserted: usize,
    /// Rows skipped as duplicates
    pub ignored: usize,
}

/// Drives the full extract-transform-load run
#[derive(Debug)]
pub struct Harvester {
    config: HarvestConfig,
    extractor: Extractor,
}

impl Harvester {
    /// Create a harvester for a validated configuration.
    pub fn new(config: HarvestConfig) -> Result<Self> {
        config.validate()?;
        let extractor = Extractor::new(config.clone())?;
        Ok(Self { config, extractor })
    }

    /// The configuration this harvester runs with.
    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Report current quota usage without touching any data endpoint.
    pub async fn check_rate_limit(&self) -> Result<RateLimitStatus> {
        self.extractor.guard().check().await
    }

    /// Run the full sequence over every endpoint, in fixed order.
    pub async fn run(&self, store: &Store) -> Result<Vec<EndpointReport>> {
        let mut reports = Vec::with_capacity(Endpoint::ALL.len());
        for endpoint in Endpoint::ALL {
            reports.push(self.run_endpoint(endpoint, store).await?);
        }
        Ok(reports)
    }

    /// Extract, transform, and load a single endpoint.
    pub async fn run_endpoint(&self, endpoint: Endpoint, store: &Store) -> Result<EndpointReport> {
        let records = self.extractor.fetch(endpoint).await?;
        if records.is_empty() {
            return Err(Error::EmptyExtraction {
                endpoint: endpoint.to_string(),
            });
        }

        match store.path() {
            Some(path) => info!(
                "Transforming and loading {} into \"{}\"...",
                endpoint,
                path.display()
            ),
            None => info!("Transforming and loading {}...", endpoint),
        }

        store.ensure_table(endpoint)?;
        let report = load_mapped(endpoint, &records, store)?;

        info!(
            "Loaded {}: {} inserted, {} duplicates ignored",
            endpoint, report.inserted, report.ignored
        );

        Ok(EndpointReport {
            endpoint,
            fetched: records.len(),
            inserted: report.inserted,
            ignored: report.ignored,
        })
    }
}

/// Map every record of the batch, then load. A single mapping failure
/// fails the whole batch before anything is inserted.
fn load_mapped(endpoint: Endpoint, records: &[Value], store: &Store) -> Result<LoadReport> {
    match endpoint {
        Endpoint::Contributors => {
            let rows: Vec<ContributorRow> = records
                .iter()
                .map(ContributorRow::from_raw)
                .collect::<Result<_>>()?;
            store.load(&rows)
        }
        Endpoint::Commits => {
            let rows: Vec<CommitRow> = records
                .iter()
                .map(CommitRow::from_raw)
                .collect::<Result<_>>()?;
            store.load(&rows)
        }
        Endpoint::Issues => {
            let rows: Vec<IssueRow> = records
                .iter()
                .map(IssueRow::from_raw)
                .collect::<Result<_>>()?;
            store.load(&rows)
        }
        Endpoint::Pulls => {
            let rows: Vec<PullRow> = records
                .iter()
                .map(PullRow::from_raw)
                .collect::<Result<_>>()?;
            store.load(&rows)
        }
    }
}
