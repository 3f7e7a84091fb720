// Handler errors → JSON error responses

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};

use crate::resource_client::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Upstream cluster API failed; surfaced as 502.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Fetch(_) => StatusCode::BAD_GATEWAY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Fetch(e) = &self {
            tracing::warn!(error = %e, "cluster API fetch failed");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
