//! Middleware chain applied around both services' routers.
//!
//! - [`ApiKeyAuth`] short-circuits with 401 unless `X-API-KEY` matches the
//!   configured secret exactly.
//! - [`AccessLog`] records method, path, final status and duration once the
//!   wrapped service has produced its response. It never touches the body or
//!   status.
//!
//! actix applies the last `.wrap()` outermost, so registering `ApiKeyAuth`
//! first and `AccessLog` second makes rejected requests show up in the log.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::time::Instant;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error;
use futures_util::future::LocalBoxFuture;
use log::Level;
use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use crate::json_error;

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Static shared-secret check.
#[derive(Clone)]
pub struct ApiKeyAuth {
    expected: Rc<str>,
}

impl ApiKeyAuth {
    pub fn new(api_key: &SecretString) -> Self {
        Self {
            expected: Rc::from(api_key.expose_secret()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ApiKeyAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ApiKeyAuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyAuthMiddleware {
            service,
            expected: Rc::clone(&self.expected),
        }))
    }
}

pub struct ApiKeyAuthMiddleware<S> {
    service: S,
    expected: Rc<str>,
}

impl<S> ApiKeyAuthMiddleware<S> {
    fn is_authorized(&self, req: &ServiceRequest) -> bool {
        req.headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|presented| !presented.is_empty() && presented == &*self.expected)
    }
}

impl<S, B> Service<ServiceRequest> for ApiKeyAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !self.is_authorized(&req) {
            let response =
                json_error(StatusCode::UNAUTHORIZED, "unauthorized").map_into_right_body();
            return Box::pin(ready(Ok(req.into_response(response))));
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
    }
}

/// Per-request access log line, tagged with a fresh request id.
#[derive(Clone, Copy, Default)]
pub struct AccessLog;

impl<S, B> Transform<S, ServiceRequest> for AccessLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AccessLogMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessLogMiddleware { service }))
    }
}

pub struct AccessLogMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AccessLogMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let request_id = Uuid::new_v4();

        let fut = self.service.call(req);
        Box::pin(async move {
            let result = fut.await;
            // Errors are rendered into responses further out; report the status they will get.
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            let level = if status.is_server_error() {
                Level::Warn
            } else {
                Level::Info
            };
            log::log!(
                level,
                "event=http_request request_id={} method={} path={} status={} duration_ms={:.3}",
                request_id,
                method,
                path,
                status.as_u16(),
                started.elapsed().as_secs_f64() * 1000.0
            );
            result
        })
    }
}
