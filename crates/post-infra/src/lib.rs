//! # Post Infrastructure
//!
//! Concrete implementations of the ports defined in `post-core`.
//! This crate contains the post stores, database connection management and
//! the probes used by health checks.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod database;
pub mod repository;
pub mod runtime;

// Re-exports - In-Memory
pub use repository::InMemoryPostRepository;
pub use runtime::{ProcessRuntimeProbe, TaskGauge, TaskGuard};

// Re-exports - PostgreSQL
pub use database::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository, SeaOrmDatabaseProbe};
