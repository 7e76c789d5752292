//! HTTP adapter. Thin layer over the pipeline, store, and aggregator;
//! no business rules live here.

pub mod routes;

use std::sync::Arc;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::config::ServerConfig;
use crate::error::Error;
use crate::pipeline::ReviewPipeline;
use crate::store::ReviewStore;

pub use routes::router;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReviewStore>,
    pub pipeline: ReviewPipeline,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn ReviewStore>, config: ServerConfig) -> Self {
        Self {
            pipeline: ReviewPipeline::new(store.clone()),
            store,
            config,
        }
    }
}

/// Core error wrapped for the wire.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl From<crate::error::ValidationError> for ApiError {
    fn from(err: crate::error::ValidationError) -> Self {
        Self(Error::Validation(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            Error::Validation(err) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": err.to_string() }),
            ),
            Error::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                json!({ "error": self.0.to_string() }),
            ),
            Error::Conflict(err) => (
                StatusCode::CONFLICT,
                json!({
                    "error": err.to_string(),
                    "current_status": err.current_state(),
                }),
            ),
            Error::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
