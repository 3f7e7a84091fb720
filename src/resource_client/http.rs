// reqwest-backed client for the cluster management API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::{EntityFilter, FetchError, ResourceClient, apply_filter};
use crate::config::ApiConfig;
use crate::models::{Entity, EntityKind, Sample};
use crate::version::USER_AGENT;

pub struct HttpResourceClient {
    client: Client,
    base_url: Url,
}

impl HttpResourceClient {
    pub fn connect(config: &ApiConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.base_url.clone()));
        }
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// `base_url` + path segments; segments are percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.bytes().await?;
        // A `null` body means an empty collection.
        let items: Option<Vec<T>> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(items.unwrap_or_default())
    }

    #[instrument(skip(self, kind, filter), fields(client = "http", kind = kind.as_str()))]
    async fn fetch_entities(
        &self,
        kind: EntityKind,
        collection: &str,
        filter: Option<&EntityFilter>,
    ) -> Result<Vec<Entity>, FetchError> {
        let url = self.url(&["api", collection])?;
        let mut entities: Vec<Entity> = self.get_json(url).await?;
        for e in &mut entities {
            e.kind = kind;
        }
        let fetched = entities.len();
        let entities = apply_filter(entities, filter);
        debug!(fetched, kept = entities.len(), "entities fetched");
        Ok(entities)
    }
}

#[async_trait]
impl ResourceClient for HttpResourceClient {
    async fn query_hosts(&self, filter: Option<&EntityFilter>) -> Result<Vec<Entity>, FetchError> {
        self.fetch_entities(EntityKind::Host, "hosts", filter).await
    }

    async fn query_containers(
        &self,
        filter: Option<&EntityFilter>,
    ) -> Result<Vec<Entity>, FetchError> {
        self.fetch_entities(EntityKind::Container, "containers", filter)
            .await
    }

    async fn query_services(
        &self,
        filter: Option<&EntityFilter>,
    ) -> Result<Vec<Entity>, FetchError> {
        self.fetch_entities(EntityKind::Service, "services", filter)
            .await
    }

    #[instrument(skip(self), fields(client = "http", operation = "host_metrics"))]
    async fn host_metrics(&self, name: &str) -> Result<Vec<Sample>, FetchError> {
        let url = self.url(&["api", "hosts", name, "metrics"])?;
        let samples: Vec<Sample> = self.get_json(url).await?;
        debug!(samples = samples.len(), "host metrics fetched");
        Ok(samples)
    }
}
