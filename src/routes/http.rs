// GET handlers: version, dashboard views, host series, demo chart

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use super::{ApiError, AppState};
use crate::dashboard::{self, ContainersView, HeaderView, HostChart, HostsView, ServicesView};
use crate::demo;
use crate::models::{AggregateGroup, ChartSeries, Field};
use crate::resource_client::EntityFilter;
use crate::series::{Metric, XAxis};
use crate::status::SeverityTier;
use crate::version::{NAME, VERSION};

/// Entity filter as it arrives in the query string, e.g. `?name=red&severity=Error`.
/// Values stay raw until `filter()` so a bad severity is a JSON 400 like every other parameter.
#[derive(Debug, Default, Deserialize)]
pub(super) struct FilterParams {
    name: Option<String>,
    status: Option<String>,
    severity: Option<String>,
}

impl FilterParams {
    fn filter(&self) -> Result<EntityFilter, ApiError> {
        let severity = self
            .severity
            .as_deref()
            .map(str::parse::<SeverityTier>)
            .transpose()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok(EntityFilter {
            name: self.name.clone(),
            status: self.status.clone(),
            severity,
        })
    }
}

/// Filter plus a comma-separated field list, e.g. `?fields=cpu,memory&status=healthy`.
#[derive(Debug, Default, Deserialize)]
pub(super) struct GroupParams {
    #[serde(flatten)]
    filter: FilterParams,
    fields: Option<String>,
}

impl GroupParams {
    fn fields(&self) -> Result<Vec<Field>, ApiError> {
        let Some(raw) = self.fields.as_deref() else {
            return Ok(Vec::new());
        };
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<Field>().map_err(|e| ApiError::BadRequest(e.to_string())))
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct SeriesParams {
    x: Option<String>,
}

/// GET /version: service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/header: host count and running containers.
pub(super) async fn header_handler(
    State(state): State<AppState>,
) -> Result<Json<HeaderView>, ApiError> {
    Ok(Json(dashboard::header(state.client.as_ref()).await?))
}

/// GET /api/containers: container rows with severity, plus cpu/memory/instances totals.
pub(super) async fn containers_handler(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<ContainersView>, ApiError> {
    let filter = params.filter()?;
    let view = dashboard::containers(state.client.as_ref(), Some(&filter)).await?;
    Ok(Json(view))
}

/// GET /api/containers/groups: containers grouped by image.
pub(super) async fn container_groups_handler(
    State(state): State<AppState>,
    Query(params): Query<GroupParams>,
) -> Result<Json<Vec<AggregateGroup>>, ApiError> {
    let fields = params.fields()?;
    let filter = params.filter.filter()?;
    let groups = dashboard::container_groups(state.client.as_ref(), Some(&filter), &fields).await?;
    Ok(Json(groups))
}

/// GET /api/hosts: host rows with severity, plus cpus/memory totals.
pub(super) async fn hosts_handler(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<HostsView>, ApiError> {
    let filter = params.filter()?;
    Ok(Json(
        dashboard::hosts(state.client.as_ref(), Some(&filter)).await?,
    ))
}

/// GET /api/services: service rows with severity.
pub(super) async fn services_handler(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<ServicesView>, ApiError> {
    let filter = params.filter()?;
    Ok(Json(
        dashboard::services(state.client.as_ref(), Some(&filter)).await?,
    ))
}

/// GET /api/hosts/{name}/series/{metric}?x=minute|time: one host metric shaped for a line chart.
pub(super) async fn host_series_handler(
    State(state): State<AppState>,
    Path((name, metric)): Path<(String, String)>,
    Query(params): Query<SeriesParams>,
) -> Result<Json<HostChart>, ApiError> {
    let metric = metric
        .parse::<Metric>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let axis = match params.x.as_deref() {
        Some(x) => x
            .parse::<XAxis>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?,
        None => XAxis::default(),
    };
    let chart = dashboard::host_chart(state.client.as_ref(), &name, metric, axis).await?;
    Ok(Json(chart))
}

/// GET /api/dashboard/memory: memory usage percentage of the configured dashboard host.
pub(super) async fn dashboard_memory_handler(
    State(state): State<AppState>,
) -> Result<Json<HostChart>, ApiError> {
    let host = &state.config.dashboard.metrics_host;
    let chart = dashboard::host_chart(
        state.client.as_ref(),
        host,
        Metric::MemoryPercent,
        XAxis::Minute,
    )
    .await?;
    Ok(Json(chart))
}

/// GET /api/demo/cpu: synthetic CPU chart; 404 unless `dashboard.demo_charts` is set.
pub(super) async fn demo_cpu_handler(
    State(state): State<AppState>,
) -> Result<Json<ChartSeries<String>>, ApiError> {
    if !state.config.dashboard.demo_charts {
        return Err(ApiError::NotFound("demo charts are disabled".into()));
    }
    let mut rng = match state.config.dashboard.demo_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(Json(demo::cpu_series(&mut rng)))
}
