// Dashboard views: fetch → classify → aggregate → shape.
// Builders are pure over already-fetched collections; the async wrappers only add the fetch,
// so a failed fetch never reaches the transformations.

use serde::Serialize;
use tracing::debug;

use crate::aggregation::{by_image, group_by, reduce_totals};
use crate::models::{AggregateGroup, ChartSeries, Entity, Field, Sample, Totals};
use crate::resource_client::{EntityFilter, FetchError, ResourceClient};
use crate::series::{Metric, XAxis, to_series, x_minute, x_time};
use crate::status::{SeverityTier, classify};

pub const CONTAINER_FIELDS: &[Field] = &[Field::Cpu, Field::Memory, Field::Instances];
pub const HOST_FIELDS: &[Field] = &[Field::Cpus, Field::Memory];

/// Cluster header: host count and running containers (sum of instances).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub hosts: usize,
    pub running_containers: f64,
}

/// An entity annotated with its severity tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRow {
    #[serde(flatten)]
    pub entity: Entity,
    pub severity: SeverityTier,
}

impl From<Entity> for EntityRow {
    fn from(entity: Entity) -> Self {
        let severity = classify(&entity.status);
        Self { entity, severity }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainersView {
    pub containers: Vec<EntityRow>,
    pub totals: Totals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostsView {
    pub hosts: Vec<EntityRow>,
    pub totals: Totals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicesView {
    pub services: Vec<EntityRow>,
    pub count: usize,
}

/// Host chart with whichever x axis was asked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HostChart {
    Minute(ChartSeries<u32>),
    Time(ChartSeries<f64>),
}

impl HostChart {
    pub fn len(&self) -> usize {
        match self {
            HostChart::Minute(s) => s.len(),
            HostChart::Time(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> Vec<f64> {
        match self {
            HostChart::Minute(s) => s.values(),
            HostChart::Time(s) => s.values(),
        }
    }

    pub fn y_max(&self) -> f64 {
        match self {
            HostChart::Minute(s) => s.y_max,
            HostChart::Time(s) => s.y_max,
        }
    }
}

pub fn header_view(hosts: &[Entity], containers: &[Entity]) -> HeaderView {
    let instances = reduce_totals(containers, &[Field::Instances]);
    HeaderView {
        hosts: hosts.len(),
        running_containers: instances.total(Field::Instances),
    }
}

pub fn containers_view(containers: Vec<Entity>) -> ContainersView {
    let totals = reduce_totals(&containers, CONTAINER_FIELDS);
    ContainersView {
        containers: containers.into_iter().map(EntityRow::from).collect(),
        totals,
    }
}

pub fn hosts_view(hosts: Vec<Entity>) -> HostsView {
    let totals = reduce_totals(&hosts, HOST_FIELDS);
    HostsView {
        hosts: hosts.into_iter().map(EntityRow::from).collect(),
        totals,
    }
}

pub fn services_view(services: Vec<Entity>) -> ServicesView {
    ServicesView {
        count: services.len(),
        services: services.into_iter().map(EntityRow::from).collect(),
    }
}

pub fn host_chart_from(samples: &[Sample], metric: Metric, axis: XAxis) -> HostChart {
    let extract = metric.extractor();
    match axis {
        XAxis::Minute => HostChart::Minute(to_series(samples, extract, x_minute)),
        XAxis::Time => HostChart::Time(to_series(samples, extract, x_time)),
    }
}

pub async fn header(client: &dyn ResourceClient) -> Result<HeaderView, FetchError> {
    let (hosts, containers) = futures_util::try_join!(
        client.query_hosts(None),
        client.query_containers(None)
    )?;
    Ok(header_view(&hosts, &containers))
}

pub async fn containers(
    client: &dyn ResourceClient,
    filter: Option<&EntityFilter>,
) -> Result<ContainersView, FetchError> {
    let containers = client.query_containers(filter).await?;
    debug!(count = containers.len(), "containers view");
    Ok(containers_view(containers))
}

/// Containers grouped by image; `fields` defaults to cpu, memory and instances when empty.
pub async fn container_groups(
    client: &dyn ResourceClient,
    filter: Option<&EntityFilter>,
    fields: &[Field],
) -> Result<Vec<AggregateGroup>, FetchError> {
    let containers = client.query_containers(filter).await?;
    let fields = if fields.is_empty() {
        CONTAINER_FIELDS
    } else {
        fields
    };
    let groups = group_by(&containers, by_image, fields);
    debug!(
        containers = containers.len(),
        groups = groups.len(),
        "container groups"
    );
    Ok(groups)
}

pub async fn hosts(
    client: &dyn ResourceClient,
    filter: Option<&EntityFilter>,
) -> Result<HostsView, FetchError> {
    Ok(hosts_view(client.query_hosts(filter).await?))
}

pub async fn services(
    client: &dyn ResourceClient,
    filter: Option<&EntityFilter>,
) -> Result<ServicesView, FetchError> {
    Ok(services_view(client.query_services(filter).await?))
}

pub async fn host_chart(
    client: &dyn ResourceClient,
    host: &str,
    metric: Metric,
    axis: XAxis,
) -> Result<HostChart, FetchError> {
    let samples = client.host_metrics(host).await?;
    let chart = host_chart_from(&samples, metric, axis);
    let skipped = samples.len() - chart.len();
    if skipped > 0 {
        debug!(host, skipped, "malformed samples skipped");
    }
    Ok(chart)
}
