//! Application services - orchestration over the ports.

mod health;
mod post;

pub use health::{HealthService, HealthThresholds};
pub use post::PostService;
