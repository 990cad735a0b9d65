//! Observability module - request IDs and in-flight request counting.

mod in_flight;
mod request_id;

pub use in_flight::InFlightMiddleware;
pub use request_id::RequestIdMiddleware;
