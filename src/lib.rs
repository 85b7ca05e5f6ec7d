//! DevOps sample application.
//!
//! A small HTTP service answering two fixed routes:
//!
//! ```text
//! GET /        -> {"message": "DevOps Sample Application", "version": "1.0.1"}
//! GET /health  -> {"status": "healthy", "uptime": 12.5}
//! ```
//!
//! `uptime` is seconds since startup on the monotonic clock.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP routes, handlers and OpenAPI document
//! - [`metrics`]: Prometheus request metrics
//! - [`utils`]: Shutdown signal handling

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
