use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use taskdesk_shared::json_error;

/// Failures surfaced by the task service and its HTTP surface.
///
/// The store never produces these; it reports existence only. Each variant
/// renders as `{"error": <message>}` with its own status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("invalid title")]
    EmptyTitle,
    #[error("title too long (max 200 characters)")]
    TitleTooLong,
    #[error("task not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl TaskError {
    pub const INVALID_ID: Self = Self::InvalidInput("invalid id");
    pub const MISSING_ID: Self = Self::InvalidInput("id parameter is required");
    pub const INVALID_DONE: Self = Self::InvalidInput("invalid done parameter");
    pub const INVALID_BODY: Self = Self::InvalidInput("invalid request body");
}

pub type TaskResult<T> = Result<T, TaskError>;

impl ResponseError for TaskError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::EmptyTitle | Self::TitleTooLong => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        json_error(self.status_code(), self.to_string())
    }
}
