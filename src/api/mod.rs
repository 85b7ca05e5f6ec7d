//! HTTP API module for info, health, metrics, and docs endpoints.

pub mod docs;
pub mod handlers;
pub mod routes;

pub use docs::ApiDoc;
pub use handlers::AppState;
pub use routes::{create_router, serve};
