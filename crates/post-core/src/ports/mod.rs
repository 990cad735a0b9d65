//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod probe;
mod repository;

pub use probe::{DatabaseProbe, MemoryStats, PoolStats, RuntimeProbe, TaskStats};
pub use repository::PostRepository;
