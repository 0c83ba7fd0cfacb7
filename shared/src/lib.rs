use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};

pub mod logging;
pub mod middleware;
pub mod settings;

pub use middleware::{AccessLog, ApiKeyAuth, API_KEY_HEADER};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub done: bool,
}

/// Body of `POST /tasks`. A missing title decodes as empty and is rejected
/// by the service layer.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
}

/// Body of `PATCH /tasks?id=`. Only `done` is read; other fields are ignored.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct UpdateResponse {
    pub updated: bool,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Uniform JSON error body: `{"error": "<message>"}`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Builds a JSON error response with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_ignores_unknown_fields() {
        let req: UpdateTaskRequest =
            serde_json::from_str(r#"{"done":true,"title":"renamed"}"#).unwrap();
        assert!(req.done);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let create: CreateTaskRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(create.title, "");
        let update: UpdateTaskRequest = serde_json::from_str("{}").unwrap();
        assert!(!update.done);
    }

    #[test]
    fn error_body_shape() {
        let body = serde_json::to_value(ErrorResponse::new("task not found")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "task not found" }));
    }
}
