//! Application configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use post_infra::DatabaseConfig;

/// Which post store to run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => f.write_str("memory"),
            StorageBackend::Postgres => f.write_str("postgres"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    pub version: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").ok();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            storage: Self::storage_backend(database_url.is_some()),
            #[cfg(feature = "postgres")]
            database: database_url.map(database_config),
            version: env::var("APP_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
        }
    }

    /// STORAGE_BACKEND wins; otherwise use postgres whenever DATABASE_URL is set.
    fn storage_backend(has_database_url: bool) -> StorageBackend {
        let fallback = if has_database_url {
            StorageBackend::Postgres
        } else {
            StorageBackend::Memory
        };

        match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring STORAGE_BACKEND: {}. Using {}.", e, fallback);
                fallback
            }),
            Err(_) => fallback,
        }
    }
}

/// Pool settings for DATABASE_URL, tuned by the DB_* variables.
#[cfg(feature = "postgres")]
fn database_config(url: String) -> DatabaseConfig {
    DatabaseConfig {
        max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(100),
        min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(10),
        connect_timeout: parse_var("DB_CONNECT_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10)),
        ..DatabaseConfig::new(url)
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
