// Cluster inventory records: hosts, containers, services

use serde::{Deserialize, Serialize};

use super::lenient::{lenient_number, lenient_opt_string, lenient_string};

/// Which collection an entity was fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Host,
    #[default]
    Container,
    Service,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Host => "host",
            EntityKind::Container => "container",
            EntityKind::Service => "service",
        }
    }
}

/// One host, container or service record as returned by the cluster API.
/// Attributes decode leniently: a value of the wrong type is absent rather than an error,
/// so one odd record never fails the collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "EntityRecord")]
pub struct Entity {
    pub kind: EntityKind,
    /// Display name; falls back to `id` when the record has no usable `name`.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<f64>,
}

// Wire shape; `kind` comes from the collection, not the payload.
#[derive(Deserialize)]
struct EntityRecord {
    #[serde(default, deserialize_with = "lenient_opt_string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    status: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    image: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    addr: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    ip: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    cpu: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    cpus: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    memory: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    instances: Option<f64>,
}

impl From<EntityRecord> for Entity {
    fn from(r: EntityRecord) -> Self {
        let name = match (&r.id, r.name.trim().is_empty()) {
            (Some(id), true) => id.clone(),
            _ => r.name,
        };
        Self {
            kind: EntityKind::default(),
            name,
            id: r.id,
            status: r.status,
            image: r.image,
            addr: r.addr,
            ip: r.ip,
            cpu: r.cpu,
            cpus: r.cpus,
            memory: r.memory,
            instances: r.instances,
        }
    }
}

impl Entity {
    pub fn new(kind: EntityKind, name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_cpu(mut self, cpu: f64) -> Self {
        self.cpu = Some(cpu);
        self
    }

    pub fn with_cpus(mut self, cpus: f64) -> Self {
        self.cpus = Some(cpus);
        self
    }

    pub fn with_memory(mut self, memory: f64) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn with_instances(mut self, instances: f64) -> Self {
        self.instances = Some(instances);
        self
    }

    /// Image name used as the container grouping key, as sent; empty or blank counts as absent.
    pub fn image_key(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.trim().is_empty())
    }
}
