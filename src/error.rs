//! Unified error types for the sample service.

use thiserror::Error;

/// Unified error type for startup and serving.
#[derive(Error, Debug)]
pub enum AppError {
    /// Environment could not be deserialized into a [`Config`](crate::Config).
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prometheus recorder could not be built or installed.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error (listener bind, serve loop).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
