//! Health checks over the database, process memory and the async runtime.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;

use crate::domain::{
    Component, ComponentHealth, HealthResponse, HealthStatus, HealthSummary, LivenessResponse,
    ReadinessResponse,
};
use crate::error::ProbeError;
use crate::ports::{DatabaseProbe, RuntimeProbe};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Limits above which a component is reported degraded or unhealthy.
#[derive(Debug, Clone)]
pub struct HealthThresholds {
    pub ping_timeout: Duration,
    pub memory_degraded_mb: u64,
    pub memory_unhealthy_mb: u64,
    pub tasks_degraded: usize,
    pub tasks_unhealthy: usize,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            ping_timeout: Duration::from_secs(5),
            memory_degraded_mb: 512,
            memory_unhealthy_mb: 1024,
            tasks_degraded: 1000,
            tasks_unhealthy: 5000,
        }
    }
}

/// Samples dependencies and runtime counters into health reports.
pub struct HealthService {
    db: Option<Arc<dyn DatabaseProbe>>,
    runtime: Arc<dyn RuntimeProbe>,
    started_at: Instant,
    version: String,
    thresholds: HealthThresholds,
}

impl HealthService {
    pub fn new(
        db: Option<Arc<dyn DatabaseProbe>>,
        runtime: Arc<dyn RuntimeProbe>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            db,
            runtime,
            started_at: Instant::now(),
            version: version.into(),
            thresholds: HealthThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: HealthThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Check every component and aggregate the results.
    pub async fn get_health(&self) -> HealthResponse {
        let components = vec![
            self.check_database().await,
            self.check_memory(),
            self.check_tasks(),
        ];

        let status = HealthStatus::worst(components.iter().map(|c| c.status));
        if !status.is_healthy() {
            tracing::warn!(status = ?status, "Service health check not healthy");
        }

        HealthResponse {
            status,
            timestamp: Utc::now(),
            version: self.version.clone(),
            uptime_seconds: self.started_at.elapsed().as_secs(),
            summary: HealthSummary::from_components(&components),
            components,
        }
    }

    /// A responding process is alive.
    pub fn get_liveness(&self) -> LivenessResponse {
        LivenessResponse {
            status: HealthStatus::Healthy,
            timestamp: Utc::now(),
            message: "Service is alive and responding".to_string(),
        }
    }

    /// Readiness only depends on the database.
    pub async fn get_readiness(&self) -> ReadinessResponse {
        let components = vec![self.check_database().await];

        let status = HealthStatus::worst(components.iter().map(|c| c.status));
        let message = match status {
            HealthStatus::Healthy => "Service is ready to accept requests",
            HealthStatus::Degraded => "Service is partially ready - some components degraded",
            HealthStatus::Unhealthy => "Service is not ready - critical components unhealthy",
        };

        ReadinessResponse {
            status,
            timestamp: Utc::now(),
            message: message.to_string(),
            components,
        }
    }

    /// Check a single component by name.
    ///
    /// Unknown names produce an unhealthy "Unknown component" report; callers
    /// that need to tell the two apart should parse into [`Component`] first.
    pub async fn check_component(&self, name: &str) -> ComponentHealth {
        match name.parse::<Component>() {
            Ok(component) => self.check(component).await,
            Err(_) => ComponentHealth::unknown(name),
        }
    }

    pub async fn check(&self, component: Component) -> ComponentHealth {
        match component {
            Component::Database => self.check_database().await,
            Component::Memory => self.check_memory(),
            Component::Tasks => self.check_tasks(),
        }
    }

    async fn check_database(&self) -> ComponentHealth {
        let name = Component::Database.as_str();

        let Some(db) = &self.db else {
            return ComponentHealth::new(name, HealthStatus::Unhealthy)
                .with_error("Database connection not initialized");
        };

        let start = Instant::now();
        let timeout = self.thresholds.ping_timeout;
        let ping = match tokio::time::timeout(timeout, db.ping()).await {
            Ok(result) => result,
            Err(_) => Err(ProbeError::Timeout(timeout)),
        };

        if let Err(e) = ping {
            tracing::error!(error = %e, "Database health check failed");
            return ComponentHealth::new(name, HealthStatus::Unhealthy)
                .with_error(format!("Database health check failed: {e}"))
                .with_response_time(elapsed_ms(start));
        }

        let component = match db.pool_stats() {
            Some(stats) => {
                let (status, message) = if stats.is_near_capacity() {
                    (HealthStatus::Degraded, "High connection usage detected")
                } else {
                    (HealthStatus::Healthy, "Database connection healthy")
                };
                ComponentHealth::new(name, status)
                    .with_message(message)
                    .with_detail("open_connections", stats.open_connections)
                    .with_detail("in_use", stats.in_use)
                    .with_detail("idle", stats.idle)
                    .with_detail("max_open", stats.max_open)
            }
            None => ComponentHealth::new(name, HealthStatus::Degraded)
                .with_message("Could not get connection stats")
                .with_error("connection pool statistics unavailable"),
        };

        component.with_response_time(elapsed_ms(start))
    }

    fn check_memory(&self) -> ComponentHealth {
        let stats = self.runtime.memory();
        let alloc_mb = stats.allocated_bytes / BYTES_PER_MB;
        let sys_mb = stats.reserved_bytes / BYTES_PER_MB;

        let (status, message) = if alloc_mb > self.thresholds.memory_unhealthy_mb {
            (HealthStatus::Unhealthy, "Critical memory usage")
        } else if alloc_mb > self.thresholds.memory_degraded_mb {
            (HealthStatus::Degraded, "High memory usage detected")
        } else {
            (HealthStatus::Healthy, "Memory usage normal")
        };

        ComponentHealth::new(Component::Memory.as_str(), status)
            .with_message(message)
            .with_detail("alloc_mb", alloc_mb)
            .with_detail("sys_mb", sys_mb)
    }

    fn check_tasks(&self) -> ComponentHealth {
        let name = Component::Tasks.as_str();

        let Some(stats) = self.runtime.tasks() else {
            return ComponentHealth::new(name, HealthStatus::Degraded)
                .with_message("Task metrics unavailable")
                .with_error("task counters unavailable");
        };

        let (status, message) = if stats.alive_tasks > self.thresholds.tasks_unhealthy {
            (HealthStatus::Unhealthy, "Critical task count")
        } else if stats.alive_tasks > self.thresholds.tasks_degraded {
            (HealthStatus::Degraded, "High task count detected")
        } else {
            (HealthStatus::Healthy, "Task count normal")
        };

        let health = ComponentHealth::new(name, status)
            .with_message(message)
            .with_detail("count", stats.alive_tasks);

        match stats.threads {
            Some(threads) => health.with_detail("threads", threads),
            None => health,
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
