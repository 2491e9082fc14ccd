//! The four harvested endpoints
//!
//! Each endpoint is one category of remote resource fetched as a distinct
//! paginated collection. The URL path segment doubles as the destination
//! table name. Endpoints can be added or removed by extending this enum
//! and the matching schema/mapper arms, within what the request quota
//! allows.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One category of repository activity data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Users who committed to the repository, with contribution counts
    Contributors,
    /// The full commit history
    Commits,
    /// Issues, open and closed
    Issues,
    /// Pull requests, open, closed, and merged
    Pulls,
}

impl Endpoint {
    /// All endpoints in fixed run order.
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Contributors,
        Endpoint::Commits,
        Endpoint::Issues,
        Endpoint::Pulls,
    ];

    /// URL path segment under `/repos/{owner}/{repo}/`.
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Contributors => "contributors",
            Endpoint::Commits => "commits",
            Endpoint::Issues => "issues",
            Endpoint::Pulls => "pulls",
        }
    }

    /// Destination table name (same as the path segment).
    pub fn table(self) -> &'static str {
        self.as_str()
    }

    /// Whether listing this endpoint needs `state=all` to include
    /// closed/merged items. The API returns only open items by default.
    pub fn includes_all_states(self) -> bool {
        matches!(self, Endpoint::Issues | Endpoint::Pulls)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contributors" => Ok(Endpoint::Contributors),
            "commits" => Ok(Endpoint::Commits),
            "issues" => Ok(Endpoint::Issues),
            "pulls" => Ok(Endpoint::Pulls),
            other => Err(Error::config(format!("unknown endpoint '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Endpoint::Contributors, "contributors", false)]
    #[test_case(Endpoint::Commits, "commits", false)]
    #[test_case(Endpoint::Issues, "issues", true)]
    #[test_case(Endpoint::Pulls, "pulls", true)]
    fn test_endpoint_attributes(endpoint: Endpoint, name: &str, all_states: bool) {
        assert_eq!(endpoint.as_str(), name);
        assert_eq!(endpoint.table(), name);
        assert_eq!(endpoint.includes_all_states(), all_states);
    }

    #[test]
    fn test_run_order() {
        assert_eq!(
            Endpoint::ALL,
            [
                Endpoint::Contributors,
                Endpoint::Commits,
                Endpoint::Issues,
                Endpoint::Pulls,
            ]
        );
    }

    #[test]
    fn test_from_str_round_trip() {
        for endpoint in Endpoint::ALL {
            assert_eq!(endpoint.as_str().parse::<Endpoint>().unwrap(), endpoint);
        }
        assert!("releases".parse::<Endpoint>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Endpoint::Pulls).unwrap();
        assert_eq!(json, "\"pulls\"");
        let back: Endpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Endpoint::Pulls);
    }
}
