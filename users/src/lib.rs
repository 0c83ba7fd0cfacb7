//! Postgres-backed user management service.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use secrecy::SecretString;
use taskdesk_shared::{AccessLog, ApiKeyAuth};

pub use error::{UserError, UserResult};
pub use models::{User, UserPayload};
pub use repository::{InMemoryUserRepository, PgUserRepository, RepoError, UserRepository};
pub use service::UserService;

/// Assembles the application with the same middleware order as the task
/// service: access log, API-key check, routes.
pub fn build_app(
    service: web::Data<UserService>,
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
