//! In-memory task list service.

pub mod config;
pub mod error;
pub mod handlers;
pub mod service;
pub mod store;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use secrecy::SecretString;
use taskdesk_shared::{AccessLog, ApiKeyAuth};

pub use error::{TaskError, TaskResult};
pub use service::{TaskService, MAX_TITLE_LENGTH};
pub use store::TaskStore;

/// Assembles the application: access log outermost, then the API-key check,
/// then the `/tasks` routes.
pub fn build_app(
    service: web::Data<TaskService>,
    api_key: &SecretString,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(service)
        .configure(handlers::configure)
        .default_service(web::to(handlers::not_found))
        .wrap(ApiKeyAuth::new(api_key))
        .wrap(AccessLog)
}
