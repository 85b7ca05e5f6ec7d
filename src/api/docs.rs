//! OpenAPI document for the public routes.

use utoipa::OpenApi;

use super::handlers::{self, AppInfoResponse, HealthResponse};

/// OpenAPI description of `/` and `/health`.
#[derive(OpenApi)]
#[openapi(
    info(title = "DevOps Sample Application"),
    paths(handlers::info, handlers::health),
    components(schemas(AppInfoResponse, HealthResponse)),
    tags(
        (name = "info", description = "Application identity"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
