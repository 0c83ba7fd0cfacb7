//! HTTP surface: `/health`, `/users` and `/users/{id}` (trailing slash accepted).

use actix_web::{http::StatusCode, web, HttpResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use taskdesk_shared::json_error;

use crate::error::{UserError, UserResult};
use crate::models::{CreatedResponse, DeletedResponse, MessageResponse, UserPayload};
use crate::service::UserService;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/users")
            .route(web::get().to(list_users))
            .route(web::post().to(create_user))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/users/")
            .route(web::get().to(missing_id))
            .route(web::put().to(missing_id))
            .route(web::delete().to(missing_id))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource(["/users/{id}", "/users/{id}/"])
            .route(web::get().to(get_user))
            .route(web::put().to(update_user))
            .route(web::delete().to(delete_user))
            .default_service(web::to(method_not_allowed)),
    );
}

fn parse_id(raw: &str) -> UserResult<i64> {
    raw.parse().map_err(|_| UserError::INVALID_ID)
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> UserResult<T> {
    serde_json::from_slice(body).map_err(|_| UserError::INVALID_BODY)
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

async fn list_users(service: web::Data<UserService>) -> UserResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(service.list_users().await?))
}

async fn get_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> UserResult<HttpResponse> {
    let user = service.get_user(parse_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(user))
}

async fn create_user(
    service: web::Data<UserService>,
    body: web::Bytes,
) -> UserResult<HttpResponse> {
    let payload: UserPayload = decode_body(&body)?;
    let id = service.create_user(&payload).await?;
    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}

async fn update_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
    body: web::Bytes,
) -> UserResult<HttpResponse> {
    let id = parse_id(&id)?;
    let payload: UserPayload = decode_body(&body)?;
    service.update_user(id, &payload).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "user updated successfully".into(),
    }))
}

async fn delete_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> UserResult<HttpResponse> {
    let rows_affected = service.delete_user(parse_id(&id)?).await?;
    Ok(HttpResponse::Ok().json(DeletedResponse {
        message: "user deleted successfully".into(),
        rows_affected,
    }))
}

/// `/users/` names no user.
async fn missing_id() -> UserResult<HttpResponse> {
    Err(UserError::INVALID_ID)
}

async fn method_not_allowed() -> UserResult<HttpResponse> {
    Err(UserError::MethodNotAllowed)
}

pub async fn not_found() -> HttpResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}
