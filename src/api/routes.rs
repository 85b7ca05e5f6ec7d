//! HTTP API route definitions and serve loop.

use std::future::Future;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::handlers::{health, info, openapi_json, prometheus_metrics, AppState};
use crate::error::Result;
use crate::metrics::track_metrics;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(info))
        .route("/health", get(health))
        // Operational endpoints
        .route("/metrics", get(prometheus_metrics))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve `router` on `listener` until `shutdown` resolves, then drain.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
