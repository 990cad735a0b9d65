//! Probe ports - read-only views of runtime resources used by health checks.

use async_trait::async_trait;

use crate::error::ProbeError;

/// Connection pool counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    pub open_connections: u32,
    pub in_use: u32,
    pub idle: u32,
    pub max_open: u32,
}

impl PoolStats {
    /// True when more than 80% of the allowed connections are open.
    pub fn is_near_capacity(&self) -> bool {
        u64::from(self.open_connections) * 5 > u64::from(self.max_open) * 4
    }
}

/// Process memory counters, in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStats {
    /// Memory currently resident for the process.
    pub allocated_bytes: u64,
    /// Total address space reserved by the process.
    pub reserved_bytes: u64,
}

/// Counters for concurrent work across the whole process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// Units of work currently in flight.
    pub alive_tasks: usize,
    /// OS threads, where the platform reports them.
    pub threads: Option<usize>,
}

/// Database liveness probe.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Round-trip to the database.
    async fn ping(&self) -> Result<(), ProbeError>;

    /// Current pool counters, if the backend exposes them.
    fn pool_stats(&self) -> Option<PoolStats>;
}

/// Process and runtime counters.
pub trait RuntimeProbe: Send + Sync {
    fn memory(&self) -> MemoryStats;

    /// `None` when the counters are unavailable.
    fn tasks(&self) -> Option<TaskStats>;
}
