//! # Post Core
//!
//! The domain layer of the post service.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! entities, the ports infrastructure must implement, and the services built on them.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::{HealthService, HealthThresholds, PostService};
