// HTTP routes

mod error;
mod http;

pub use error::ApiError;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::resource_client::ResourceClient;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) client: Arc<dyn ResourceClient>,
    pub(crate) config: AppConfig,
}

pub fn app(client: Arc<dyn ResourceClient>, config: AppConfig) -> Router {
    let state = AppState { client, config };
    Router::new()
        .route("/", get(|| async { "citadel dashboard" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/header", get(http::header_handler)) // GET /api/header
        .route("/api/containers", get(http::containers_handler)) // GET /api/containers
        .route("/api/containers/groups", get(http::container_groups_handler)) // GET /api/containers/groups
        .route("/api/hosts", get(http::hosts_handler)) // GET /api/hosts
        .route("/api/hosts/{name}/series/{metric}", get(http::host_series_handler)) // GET /api/hosts/{name}/series/{metric}
        .route("/api/services", get(http::services_handler)) // GET /api/services
        .route("/api/dashboard/memory", get(http::dashboard_memory_handler)) // GET /api/dashboard/memory
        .route("/api/demo/cpu", get(http::demo_cpu_handler)) // GET /api/demo/cpu
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
