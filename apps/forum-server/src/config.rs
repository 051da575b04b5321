//! Application configuration from command-line flags, falling back to
//! environment variables (a `.env` file is loaded first).

use std::time::Duration;

use clap::{Parser, ValueEnum};
use forum_core::ports::StorageKind;

#[cfg(feature = "postgres")]
use forum_infra::DatabaseConfig;

use crate::telemetry::TelemetryConfig;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "forum-server", version, about = "Article forum GraphQL server")]
pub struct AppConfig {
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Storage backend: memory or postgres.
    #[arg(long = "storage", env = "STORAGE_TYPE", default_value = "memory")]
    pub storage: StorageKind,

    /// PostgreSQL connection string. Built from POSTGRES_* variables when unset.
    #[arg(long, env = "POSTGRES_DSN")]
    pub postgres_dsn: Option<String>,

    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 20)]
    pub db_max_connections: u32,

    #[arg(long, env = "DB_MIN_CONNECTIONS", default_value_t = 2)]
    pub db_min_connections: u32,

    /// Deadline for each storage call in milliseconds; 0 disables it.
    #[arg(long, env = "STORAGE_TIMEOUT_MS", default_value_t = 5000)]
    pub storage_timeout_ms: u64,

    /// How many times to try reaching PostgreSQL at startup.
    #[arg(long, env = "DB_CONNECT_ATTEMPTS", default_value_t = 10)]
    pub connect_attempts: u32,

    #[arg(long, env = "RUN_MIGRATIONS", default_value_t = true, action = clap::ArgAction::Set)]
    pub run_migrations: bool,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn storage_timeout(&self) -> Option<Duration> {
        (self.storage_timeout_ms > 0).then(|| Duration::from_millis(self.storage_timeout_ms))
    }

    pub fn telemetry(&self) -> TelemetryConfig {
        TelemetryConfig {
            json_logs: self.log_format == LogFormat::Json,
            service_name: "forum-server".to_string(),
        }
    }

    /// The configured DSN, or one assembled from the POSTGRES_* variables.
    pub fn postgres_url(&self) -> String {
        self.postgres_dsn
            .clone()
            .unwrap_or_else(|| build_postgres_dsn(|key| std::env::var(key).ok()))
    }

    #[cfg(feature = "postgres")]
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            max_connections: self.db_max_connections,
            min_connections: self.db_min_connections,
            ..DatabaseConfig::new(self.postgres_url())
        }
    }
}

/// Assemble a PostgreSQL URL from its parts, using defaults for missing ones.
pub fn build_postgres_dsn(lookup: impl Fn(&str) -> Option<String>) -> String {
    let get = |key: &str, default: &str| {
        lookup(key)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    format!(
        "postgres://{}:{}@{}:{}/{}?sslmode={}",
        get("POSTGRES_USER", "postgres"),
        get("POSTGRES_PASSWORD", "12345678"),
        get("POSTGRES_HOST", "localhost"),
        get("POSTGRES_PORT", "5432"),
        get("POSTGRES_DB", "articleforum"),
        get("POSTGRES_SSLMODE", "disable"),
    )
}
