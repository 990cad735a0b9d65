//! In-flight middleware - counts requests being served by any worker.

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use post_infra::TaskGauge;
use std::future::{Future, Ready, ready};
use std::pin::Pin;

/// Middleware that holds a [`TaskGauge`] slot while a request is handled.
///
/// Every worker shares the same gauge, so the tasks health check sees the
/// whole process.
pub struct InFlightMiddleware {
    gauge: TaskGauge,
}

impl InFlightMiddleware {
    pub fn new(gauge: TaskGauge) -> Self {
        Self { gauge }
    }
}

impl<S, B> Transform<S, ServiceRequest> for InFlightMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = InFlightService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(InFlightService {
            service,
            gauge: self.gauge.clone(),
        }))
    }
}

pub struct InFlightService<S> {
    service: S,
    gauge: TaskGauge,
}

impl<S, B> Service<ServiceRequest> for InFlightService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let guard = self.gauge.track();
        let fut = self.service.call(req);

        Box::pin(async move {
            let _guard = guard;
            fut.await
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, HttpResponse, test, web};

    use super::*;

    #[actix_web::test]
    async fn test_request_counted_while_handled() {
        let gauge = TaskGauge::new();
        let seen = gauge.clone();

        let app = test::init_service(
            App::new().wrap(InFlightMiddleware::new(gauge.clone())).route(
                "/",
                web::get().to(move || {
                    let in_flight = seen.current();
                    async move { HttpResponse::Ok().body(in_flight.to_string()) }
                }),
            ),
        )
        .await;

        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request())
            .await;

        assert_eq!(body, "1");
        assert_eq!(gauge.current(), 0);
    }
}
