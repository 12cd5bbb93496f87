//! HTTP smoke checks for the list endpoints.
//!
//! The API layer itself lives in the web application; this probe only
//! verifies that each collection's list endpoint answers with a success
//! status, and reports how many records it returned.

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

/// The five collection endpoints under `/api/`.
pub const COLLECTIONS: [&str; 5] = ["users", "teams", "activities", "leaderboard", "workouts"];

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("endpoint {path} returned status {status}")]
    EndpointFailed {
        path: String,
        status: reqwest::StatusCode,
    },
}

/// Result of probing one list endpoint.
#[derive(Debug, Clone)]
pub struct EndpointReport {
    pub path: String,
    pub records: usize,
}

/// Probe that issues GET requests against the API's list endpoints.
pub struct ApiProbe {
    client: Client,
    base_url: String,
}

impl ApiProbe {
    /// Creates a new probe for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Checks one collection's list endpoint, returning its record count.
    pub async fn check(&self, collection: &str) -> Result<EndpointReport, ApiError> {
        let url = self.endpoint_url(collection);
        debug!("Probing {url}");

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::EndpointFailed {
                path: url,
                status: resp.status(),
            });
        }

        let body: serde_json::Value = resp.json().await?;
        let records = body.as_array().map(Vec::len).unwrap_or(0);

        Ok(EndpointReport {
            path: url,
            records,
        })
    }

    /// Checks all five collection endpoints in order.
    pub async fn check_all(&self) -> Result<Vec<EndpointReport>, ApiError> {
        let mut reports = Vec::with_capacity(COLLECTIONS.len());

        for collection in COLLECTIONS {
            reports.push(self.check(collection).await?);
        }

        Ok(reports)
    }

    fn endpoint_url(&self, collection: &str) -> String {
        format!(
            "{}/api/{collection}/",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        let probe = ApiProbe::new("http://localhost:8000");
        assert_eq!(
            probe.endpoint_url("users"),
            "http://localhost:8000/api/users/"
        );
    }

    #[test]
    fn test_endpoint_url_trailing_slash() {
        let probe = ApiProbe::new("http://localhost:8000/");
        assert_eq!(
            probe.endpoint_url("leaderboard"),
            "http://localhost:8000/api/leaderboard/"
        );
    }

    #[test]
    fn test_collections_cover_all_five() {
        assert_eq!(COLLECTIONS.len(), 5);
        assert!(COLLECTIONS.contains(&"workouts"));
    }
}
