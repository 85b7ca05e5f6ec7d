//! Prometheus metrics for HTTP request tracking.
//!
//! Every request is counted and timed by the [`track_metrics`] middleware.
//! Route labels use the matched route template so arbitrary URLs collapse
//! into a single `unmatched` series.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::error::Result;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";

/// Path label for requests that matched no route.
pub const UNMATCHED_PATH: &str = "unmatched";

/// Histogram buckets for request latency, in milliseconds.
const LATENCY_BUCKETS_MS: &[f64] = &[
    0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0,
];

/// Install the global Prometheus recorder and register metric descriptions.
///
/// Fails if a recorder is already installed for this process.
pub fn install_recorder() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(METRIC_HTTP_REQUEST_LATENCY.to_string()),
            LATENCY_BUCKETS_MS,
        )?
        .install_recorder()?;

    init_metrics();
    Ok(handle)
}

/// Initialize all metric descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total number of HTTP requests served"
    );

    debug!("Metrics initialized");
}

/// Record one served HTTP request.
pub fn record_http_request(start: Instant, method: &str, path: &str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(latency_ms);
    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Middleware counting and timing every request.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_PATH.to_owned());
    let method = req.method().to_string();

    let response = next.run(req).await;

    record_http_request(start, &method, &path, response.status().as_u16());
    response
}
