//! Health check endpoints.

use actix_web::{HttpResponse, http::StatusCode, web};

use post_core::domain::{Component, HealthStatus};
use post_shared::dto::PingResponse;

use crate::state::AppState;

/// Only a fully healthy status is served as 200.
fn status_code(status: HealthStatus) -> StatusCode {
    match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded | HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /api/v1/health
pub async fn get_health(state: web::Data<AppState>) -> HttpResponse {
    let report = state.health.get_health().await;
    HttpResponse::build(status_code(report.status)).json(report)
}

/// GET /api/v1/health/live
pub async fn get_liveness(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.health.get_liveness())
}

/// GET /api/v1/health/ready
pub async fn get_readiness(state: web::Data<AppState>) -> HttpResponse {
    let report = state.health.get_readiness().await;
    HttpResponse::build(status_code(report.status)).json(report)
}

/// GET /api/v1/health/ping
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(PingResponse::ok())
}

/// GET /api/v1/health/component/{name}
pub async fn get_component(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();

    match name.parse::<Component>() {
        Ok(component) => {
            let report = state.health.check(component).await;
            HttpResponse::build(status_code(report.status)).json(report)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Health check requested for unknown component");
            HttpResponse::NotFound().json(state.health.check_component(&name).await)
        }
    }
}
