// Cluster API client: inventory collections and per-host metric samples

mod http;

pub use http::HttpResourceClient;

use async_trait::async_trait;

use crate::models::{Entity, Sample};
use crate::status::{SeverityTier, classify};

/// Failure to obtain a collection from the cluster API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid API url: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err.to_string())
        } else if err.is_connect() {
            FetchError::Connection(err.to_string())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Http(err.to_string())
        }
    }
}

/// Post-fetch selection of entities. All set criteria must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityFilter {
    /// Case-insensitive substring of the entity name.
    pub name: Option<String>,
    /// Case-insensitive exact status.
    pub status: Option<String>,
    pub severity: Option<SeverityTier>,
}

impl EntityFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.status.is_none() && self.severity.is_none()
    }

    pub fn matches(&self, entity: &Entity) -> bool {
        if let Some(name) = &self.name
            && !entity.name.to_lowercase().contains(&name.to_lowercase())
        {
            return false;
        }
        if let Some(status) = &self.status
            && !entity.status.trim().eq_ignore_ascii_case(status.trim())
        {
            return false;
        }
        if let Some(severity) = self.severity
            && classify(&entity.status) != severity
        {
            return false;
        }
        true
    }
}

/// Applies an optional filter to a fetched collection.
pub fn apply_filter(entities: Vec<Entity>, filter: Option<&EntityFilter>) -> Vec<Entity> {
    match filter {
        Some(f) if !f.is_empty() => entities.into_iter().filter(|e| f.matches(e)).collect(),
        _ => entities,
    }
}

/// Source of cluster inventory and host metrics. Collections are fully materialized;
/// no matches is an empty `Vec`, never an error.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    async fn query_hosts(&self, filter: Option<&EntityFilter>) -> Result<Vec<Entity>, FetchError>;

    async fn query_containers(
        &self,
        filter: Option<&EntityFilter>,
    ) -> Result<Vec<Entity>, FetchError>;

    async fn query_services(
        &self,
        filter: Option<&EntityFilter>,
    ) -> Result<Vec<Entity>, FetchError>;

    /// Samples for one host in the order the API produced them (not guaranteed sorted).
    async fn host_metrics(&self, name: &str) -> Result<Vec<Sample>, FetchError>;
}
