//! Domain entities - the core business objects.

pub mod health;
mod post;

pub use health::{
    Component, ComponentHealth, HealthResponse, HealthStatus, HealthSummary, LivenessResponse,
    ReadinessResponse, UnknownComponent,
};
pub use post::{Post, PostDraft, PostPatch};
