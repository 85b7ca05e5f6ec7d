//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::error::{AppError, Result};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    #[default]
    #[strum(serialize = "pretty")]
    Pretty,
    /// One JSON object per event.
    #[strum(serialize = "json")]
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Bind address for the HTTP listener.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP listener port (0 binds an ephemeral port).
    #[serde(default = "default_port")]
    pub port: u16,

    // === Observability ===
    /// Log filter directive (trace, debug, info, warn, error, or per-target).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Install the Prometheus recorder and serve `/metrics`.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            rust_log: default_log_level(),
            log_format: LogFormat::default(),
            metrics_enabled: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Apply command-line values, which take precedence over the environment.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        self.socket_addr().map(|_| ())
    }

    /// Resolve the listener address from `host` and `port`.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            AppError::InvalidConfig(format!("HOST must be an IP address, got {:?}", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
