//! HTTP API over a shared [`ReceiptProcessor`].
//!
//! - `POST /receipts/process` stores a receipt and returns `{"id": ...}`
//! - `GET /receipts/:id/points` returns `{"score": ...}`
//! - `GET /health` liveness probe
//!
//! Failures are reported as `{"err": ...}`.

use crate::engine::ReceiptProcessor;
use crate::error::ProcessorError;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use log::error;
use serde::Serialize;
use std::env;
use std::sync::Arc;

/// Environment variable holding the listen address.
pub const ADDR_ENV: &str = "RECEIPT_PROCESSOR_ADDR";

/// Listen address used when [`ADDR_ENV`] is unset.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        ServerConfig {
            addr: env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    processor: Arc<ReceiptProcessor>,
}

impl AppState {
    pub fn new(processor: ReceiptProcessor) -> Self {
        AppState {
            processor: Arc::new(processor),
        }
    }
}

#[derive(Serialize)]
struct IdResponse {
    id: String,
}

#[derive(Serialize)]
struct ScoreResponse {
    score: u64,
}

#[derive(Serialize)]
struct ErrorResponse {
    err: String,
}

impl IntoResponse for ProcessorError {
    fn into_response(self) -> Response {
        let status = match &self {
            e if e.is_malformed_input() => StatusCode::BAD_REQUEST,
            ProcessorError::NotFound { .. } => StatusCode::NOT_FOUND,
            e => {
                error!("Internal error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            err: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(receipt_points))
        .with_state(state)
}

/// GET /health
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /receipts/process
async fn process_receipt(State(state): State<AppState>, body: Bytes) -> Response {
    match state.processor.submit_json(&body) {
        Ok(id) => Json(IdResponse { id: id.to_string() }).into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /receipts/:id/points
async fn receipt_points(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    if id.trim().is_empty() {
        let body = ErrorResponse {
            err: "Receipt id must not be empty".to_string(),
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    match state.processor.points(&id) {
        Ok(score) => Json(ScoreResponse { score }).into_response(),
        Err(e) => e.into_response(),
    }
}
