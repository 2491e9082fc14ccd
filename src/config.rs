//! Runtime configuration
//!
//! All credentials and target-repository settings are carried in an
//! explicit [`HarvestConfig`] passed to the extractor and loader at
//! construction time. A config can be loaded from a YAML file, from the
//! environment, or built directly; CLI flags override both.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default GitHub REST API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// GitHub caps `per_page` at 100; fetching fewer pages is the main
/// lever against the request quota.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Environment variable holding the personal access token.
pub const ENV_TOKEN: &str = "GH_HARVEST_TOKEN";

/// Environment variable holding the `owner/name` target.
pub const ENV_REPO: &str = "GH_HARVEST_REPO";

/// Environment variable overriding the API base URL.
pub const ENV_API_BASE: &str = "GH_HARVEST_API_BASE";

/// Complete harvest configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// GitHub personal access token. Authorized requests are limited to
    /// 5000 per hour.
    pub access_token: String,

    /// Target repository as `owner/name` (e.g. "tensorflow/tensorflow")
    pub owner_repo: String,

    /// API endpoint root
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Records per page, capped at 100 by the API
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Destination database file; defaults to `{repo}_repo.db`
    #[serde(default)]
    pub db_path: Option<PathBuf>,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl HarvestConfig {
    /// Create a config with defaults for everything but the credentials
    /// and target.
    pub fn new(access_token: impl Into<String>, owner_repo: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            owner_repo: owner_repo.into(),
            api_base: default_api_base(),
            page_size: default_page_size(),
            db_path: None,
        }
    }

    /// Load a config from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from the environment (`GH_HARVEST_TOKEN`,
    /// `GH_HARVEST_REPO`, optional `GH_HARVEST_API_BASE`).
    pub fn from_env() -> Result<Self> {
        let access_token =
            std::env::var(ENV_TOKEN).map_err(|_| Error::missing_field("access_token"))?;
        let owner_repo =
            std::env::var(ENV_REPO).map_err(|_| Error::missing_field("owner_repo"))?;

        let mut config = Self::new(access_token, owner_repo);
        if let Ok(base) = std::env::var(ENV_API_BASE) {
            config.api_base = base;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate credentials, target identifier, and page size.
    pub fn validate(&self) -> Result<()> {
        if self.access_token.is_empty() {
            return Err(Error::missing_field("access_token"));
        }

        let mut parts = self.owner_repo.splitn(2, '/');
        let owner = parts.next().unwrap_or_default();
        let name = parts.next().unwrap_or_default();
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(Error::config(format!(
                "owner_repo must be 'owner/name', got '{}'",
                self.owner_repo
            )));
        }

        if self.page_size == 0 || self.page_size > 100 {
            return Err(Error::config(format!(
                "page_size must be between 1 and 100, got {}",
                self.page_size
            )));
        }

        url::Url::parse(&self.api_base)?;

        Ok(())
    }

    /// The repository name (the part after the `/`).
    pub fn repo_name(&self) -> &str {
        self.owner_repo
            .split_once('/')
            .map_or(self.owner_repo.as_str(), |(_, name)| name)
    }

    /// Destination database path: explicit `db_path` if set, otherwise
    /// `{repo}_repo.db` next to the working directory.
    pub fn database_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}_repo.db", self.repo_name())))
    }
}
