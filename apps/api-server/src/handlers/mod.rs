//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use post_shared::ErrorResponse;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/posts")
                        .route("", web::post().to(posts::create_post))
                        .route("", web::get().to(posts::get_all_posts))
                        .route("/{id}", web::get().to(posts::get_post))
                        .route("/{id}", web::put().to(posts::update_post))
                        .route("/{id}", web::delete().to(posts::delete_post)),
                )
                .service(
                    web::scope("/health")
                        .route("", web::get().to(health::get_health))
                        .route("/live", web::get().to(health::get_liveness))
                        .route("/ready", web::get().to(health::get_readiness))
                        .route("/ping", web::get().to(health::ping))
                        .route("/component/{name}", web::get().to(health::get_component)),
                ),
        )
        // Unversioned probes for orchestrators
        .route("/health/live", web::get().to(health::get_liveness))
        .route("/health/ready", web::get().to(health::get_readiness));
}

/// JSON extractor config: malformed or incomplete bodies become RFC 7807 400s.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");

        let body = ErrorResponse::bad_request(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}
