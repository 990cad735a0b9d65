use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbConn};

use post_core::error::ProbeError;
use post_core::ports::{DatabaseProbe, PoolStats};

/// Database probe over a SeaORM connection.
pub struct SeaOrmDatabaseProbe {
    db: DbConn,
}

impl SeaOrmDatabaseProbe {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DatabaseProbe for SeaOrmDatabaseProbe {
    async fn ping(&self) -> Result<(), ProbeError> {
        self.db
            .ping()
            .await
            .map_err(|e| ProbeError::Ping(e.to_string()))
    }

    fn pool_stats(&self) -> Option<PoolStats> {
        // Only the sqlx Postgres pool exposes counters.
        let DatabaseConnection::SqlxPostgresPoolConnection(_) = &self.db else {
            return None;
        };

        let pool = self.db.get_postgres_connection_pool();
        let open_connections = pool.size();
        let idle = u32::try_from(pool.num_idle()).unwrap_or(open_connections);

        Some(PoolStats {
            open_connections,
            in_use: open_connections.saturating_sub(idle),
            idle,
            max_open: pool.options().get_max_connections(),
        })
    }
}
