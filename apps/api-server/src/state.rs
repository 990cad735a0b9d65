//! Application state - shared across all handlers.

use std::sync::Arc;

use post_core::ports::{DatabaseProbe, PostRepository};
use post_core::{HealthService, PostService};
use post_infra::{InMemoryPostRepository, ProcessRuntimeProbe, TaskGauge};

use crate::config::{AppConfig, StorageBackend};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub health: Arc<HealthService>,
    /// Requests in flight across all workers.
    pub tasks: TaskGauge,
}

impl AppState {
    /// Wire services over an already-built store and optional database probe.
    pub fn new(
        repo: Arc<dyn PostRepository>,
        db: Option<Arc<dyn DatabaseProbe>>,
        version: &str,
    ) -> Self {
        let tasks = TaskGauge::new();

        Self {
            posts: PostService::new(repo),
            health: Arc::new(HealthService::new(
                db,
                Arc::new(ProcessRuntimeProbe::new(tasks.clone())),
                version,
            )),
            tasks,
        }
    }

    /// Build the application state for the configured storage backend.
    ///
    /// A database that cannot be reached is a start-up failure.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let state = match config.storage {
            StorageBackend::Memory => {
                tracing::warn!("Running without database (in-memory mode).");
                Self::new(Arc::new(InMemoryPostRepository::new()), None, &config.version)
            }
            StorageBackend::Postgres => Self::postgres(config).await?,
        };

        tracing::info!(storage = %config.storage, "Application state initialized");
        Ok(state)
    }

    #[cfg(feature = "postgres")]
    async fn postgres(config: &AppConfig) -> anyhow::Result<Self> {
        use anyhow::Context;
        use post_infra::{DatabaseConnections, PostgresPostRepository, SeaOrmDatabaseProbe};

        let db_config = config
            .database
            .as_ref()
            .context("DATABASE_URL must be set for the postgres storage backend")?;

        let connections = DatabaseConnections::init(db_config)
            .await
            .context("Failed to connect to database")?;

        let probe: Arc<dyn DatabaseProbe> =
            Arc::new(SeaOrmDatabaseProbe::new(connections.main.clone()));

        Ok(Self::new(
            Arc::new(PostgresPostRepository::new(connections.main)),
            Some(probe),
            &config.version,
        ))
    }

    #[cfg(not(feature = "postgres"))]
    async fn postgres(_config: &AppConfig) -> anyhow::Result<Self> {
        anyhow::bail!("postgres storage requested but the `postgres` feature is disabled")
    }
}
