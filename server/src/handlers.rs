//! HTTP surface for `/tasks`.
//!
//! Dispatch is by method on a single resource; `id` and `done` travel in the
//! query string. Parsing failures are reported here, business-rule failures
//! come back from [`TaskService`].

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use serde::de::DeserializeOwned;
use taskdesk_shared::{
    json_error, CreateTaskRequest, DeleteResponse, UpdateResponse, UpdateTaskRequest,
};

use crate::error::{TaskError, TaskResult};
use crate::service::TaskService;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/tasks")
            .route(web::get().to(get_tasks))
            .route(web::post().to(create_task))
            .route(web::patch().to(update_task))
            .route(web::delete().to(delete_task))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Decoded query string. Lookups return the first value for a key and treat
/// an empty value as absent.
struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    fn from_request(req: &HttpRequest) -> TaskResult<Self> {
        web::Query::<Vec<(String, String)>>::from_query(req.query_string())
            .map(|query| Self(query.into_inner()))
            .map_err(|_| TaskError::InvalidInput("invalid query string"))
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }

    fn required_id(&self) -> TaskResult<u64> {
        self.get("id").ok_or(TaskError::MISSING_ID).and_then(parse_id)
    }
}

fn parse_id(raw: &str) -> TaskResult<u64> {
    raw.parse().map_err(|_| TaskError::INVALID_ID)
}

/// Accepts the usual spellings: `1 t T TRUE true True` and their false counterparts.
fn parse_bool(raw: &str) -> TaskResult<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(TaskError::INVALID_DONE),
    }
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> TaskResult<T> {
    serde_json::from_slice(body).map_err(|_| TaskError::INVALID_BODY)
}

async fn get_tasks(
    req: HttpRequest,
    service: web::Data<TaskService>,
) -> TaskResult<HttpResponse> {
    let query = QueryParams::from_request(&req)?;

    if let Some(raw) = query.get("id") {
        let task = service.get_task(parse_id(raw)?)?;
        return Ok(HttpResponse::Ok().json(task));
    }

    let filter = query.get("done").map(parse_bool).transpose()?;
    Ok(HttpResponse::Ok().json(service.list_tasks(filter)))
}

async fn create_task(
    service: web::Data<TaskService>,
    body: web::Bytes,
) -> TaskResult<HttpResponse> {
    let request: CreateTaskRequest = decode_body(&body)?;
    let task = service.create_task(&request.title)?;
    Ok(HttpResponse::Created().json(task))
}

async fn update_task(
    req: HttpRequest,
    service: web::Data<TaskService>,
    body: web::Bytes,
) -> TaskResult<HttpResponse> {
    let id = QueryParams::from_request(&req)?.required_id()?;
    let request: UpdateTaskRequest = decode_body(&body)?;
    service.update_task_status(id, request.done)?;
    Ok(HttpResponse::Ok().json(UpdateResponse { updated: true }))
}

async fn delete_task(
    req: HttpRequest,
    service: web::Data<TaskService>,
) -> TaskResult<HttpResponse> {
    let id = QueryParams::from_request(&req)?.required_id()?;
    service.delete_task(id)?;
    Ok(HttpResponse::Ok().json(DeleteResponse { deleted: true }))
}

async fn method_not_allowed() -> TaskResult<HttpResponse> {
    Err(TaskError::MethodNotAllowed)
}

/// Fallback for paths outside `/tasks`.
pub async fn not_found() -> HttpResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}
