//! HTTP API handlers.

use std::fmt;
use std::time::Instant;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use super::docs::ApiDoc;

/// Application name reported by `GET /`.
pub const APP_MESSAGE: &str = "DevOps Sample Application";

/// Application version reported by `GET /`; the crate's package version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Status reported by `GET /health` while serving.
pub const HEALTHY: &str = "healthy";

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// When the service started, on the monotonic clock.
    started_at: Instant,
    /// Render handle for the Prometheus recorder, if one is installed.
    metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state, starting the uptime clock now.
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            metrics: None,
        }
    }

    /// Attach a Prometheus render handle for `/metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Seconds elapsed since the state was created.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("started_at", &self.started_at)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

/// Application info response.
#[derive(Debug, Serialize, ToSchema)]
pub struct AppInfoResponse {
    /// Application name.
    #[schema(example = "DevOps Sample Application")]
    pub message: &'static str,
    /// Application version.
    #[schema(example = "1.0.1")]
    pub version: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "healthy".
    #[schema(example = "healthy")]
    pub status: &'static str,
    /// Seconds since the service started.
    #[schema(example = 12.5)]
    pub uptime: f64,
}

/// Info handler - returns application name and version.
#[utoipa::path(
    get,
    path = "/",
    tag = "info",
    responses((status = 200, description = "Application info", body = AppInfoResponse))
)]
pub async fn info() -> Json<AppInfoResponse> {
    Json(AppInfoResponse {
        message: APP_MESSAGE,
        version: APP_VERSION,
    })
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY,
        uptime: state.uptime_seconds(),
    })
}

/// Prometheus scrape handler - 503 when no recorder is installed.
pub async fn prometheus_metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "metrics disabled").into_response(),
    }
}

/// OpenAPI document handler.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
