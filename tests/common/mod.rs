// Shared test helpers

use std::collections::HashMap;

use async_trait::async_trait;
use citadel_dash::models::*;
use citadel_dash::resource_client::{EntityFilter, FetchError, ResourceClient, apply_filter};

pub const TEST_CONFIG: &str = r#"
[server]
port = 3000
host = "0.0.0.0"

[api]
base_url = "http://127.0.0.1:4000"
timeout_ms = 2000

[dashboard]
metrics_host = "b8f6b1166755"
"#;

pub fn container(name: &str, image: &str, cpu: f64, memory: f64, instances: f64, status: &str) -> Entity {
    Entity::new(EntityKind::Container, name, status)
        .with_image(image)
        .with_cpu(cpu)
        .with_memory(memory)
        .with_instances(instances)
}

pub fn host(name: &str, cpus: f64, memory: f64, status: &str) -> Entity {
    Entity::new(EntityKind::Host, name, status)
        .with_cpus(cpus)
        .with_memory(memory)
}

pub fn service(name: &str, ip: &str, status: &str) -> Entity {
    let mut s = Entity::new(EntityKind::Service, name, status);
    s.ip = Some(ip.to_string());
    s
}

/// Container inventory shaped like the crosbymichael namespace on the old dashboard.
pub fn containers() -> Vec<Entity> {
    vec![
        container("rethinkdb", "rethinkdb", 17.0, 16.0 * 2048.0, 16.0, "healthy"),
        container("redis", "redis", 7.0, 96.0 * 512.0, 96.0, "healthy"),
        container("sentry", "sentry", 20.0, 16.0 * 68.0, 16.0, "healthy"),
        container("postgres", "postgres", 7.0, 8.0 * 243.0, 8.0, "healthy"),
        container("mysql", "mysql", 7.0, 643.0, 1.0, "healthy"),
        container("phabricator", "phabricator", 13.0, 516.0, 1.0, "healthy"),
        container("nsqd", "nsqd", 9.0, 100.0 * 26.0, 100.0, "healthy"),
        container("nsqadmin", "nsqadmin", 4.0, 20.0, 1.0, "sick"),
    ]
}

pub fn hosts() -> Vec<Entity> {
    vec![
        host("b8f6b1166755", 8.0, 16384.0, "healthy"),
        host("c1d2e3f4a5b6", 4.0, 8192.0, "stale"),
    ]
}

pub fn services() -> Vec<Entity> {
    vec![
        service("api", "192.168.56.101", "healthy"),
        service("scheduler", "192.168.56.102", "healthy"),
        service("storage", "192.168.56.102", "healthy"),
        service("metrics", "192.168.56.103", "sick"),
    ]
}

/// Memory samples one minute apart starting at 00:00 UTC: used = 10, 20, 30 ... of total 100.
pub fn memory_samples(count: usize) -> Vec<Sample> {
    (0..count)
        .map(|i| Sample::at(i as f64 * 60_000.0).with_memory((i as f64 + 1.0) * 10.0, 100.0))
        .collect()
}

pub fn cluster() -> StaticResourceClient {
    StaticResourceClient::new()
        .with_hosts(hosts())
        .with_containers(containers())
        .with_services(services())
        .with_metrics("b8f6b1166755", memory_samples(5))
}

/// In-memory cluster API over fixed collections, optionally failing every call.
#[derive(Debug, Clone, Default)]
pub struct StaticResourceClient {
    hosts: Vec<Entity>,
    containers: Vec<Entity>,
    services: Vec<Entity>,
    metrics: HashMap<String, Vec<Sample>>,
    failure: Option<FetchError>,
}

impl StaticResourceClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose every call fails with `err`.
    pub fn failing(err: FetchError) -> Self {
        Self {
            failure: Some(err),
            ..Default::default()
        }
    }

    pub fn with_hosts(mut self, hosts: Vec<Entity>) -> Self {
        self.hosts = tag(hosts, EntityKind::Host);
        self
    }

    pub fn with_containers(mut self, containers: Vec<Entity>) -> Self {
        self.containers = tag(containers, EntityKind::Container);
        self
    }

    pub fn with_services(mut self, services: Vec<Entity>) -> Self {
        self.services = tag(services, EntityKind::Service);
        self
    }

    pub fn with_metrics(mut self, host: impl Into<String>, samples: Vec<Sample>) -> Self {
        self.metrics.insert(host.into(), samples);
        self
    }

    fn collection(
        &self,
        entities: &[Entity],
        filter: Option<&EntityFilter>,
    ) -> Result<Vec<Entity>, FetchError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(apply_filter(entities.to_vec(), filter))
    }
}

fn tag(mut entities: Vec<Entity>, kind: EntityKind) -> Vec<Entity> {
    for e in &mut entities {
        e.kind = kind;
    }
    entities
}

#[async_trait]
impl ResourceClient for StaticResourceClient {
    async fn query_hosts(&self, filter: Option<&EntityFilter>) -> Result<Vec<Entity>, FetchError> {
        self.collection(&self.hosts, filter)
    }

    async fn query_containers(
        &self,
        filter: Option<&EntityFilter>,
    ) -> Result<Vec<Entity>, FetchError> {
        self.collection(&self.containers, filter)
    }

    async fn query_services(
        &self,
        filter: Option<&EntityFilter>,
    ) -> Result<Vec<Entity>, FetchError> {
        self.collection(&self.services, filter)
    }

    async fn host_metrics(&self, name: &str) -> Result<Vec<Sample>, FetchError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(self.metrics.get(name).cloned().unwrap_or_default())
    }
}
