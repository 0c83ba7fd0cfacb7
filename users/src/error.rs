use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use taskdesk_shared::json_error;

use crate::repository::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("user with id={0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Repository(RepoError),
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl UserError {
    pub const INVALID_ID: Self = Self::Validation("invalid id");
    pub const INVALID_BODY: Self = Self::Validation("invalid request body");
}

pub type UserResult<T> = Result<T, UserError>;

impl From<RepoError> for UserError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

impl ResponseError for UserError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Repository(err) = self {
            // Backend detail stays in the log.
            log::error!("event=user_repository status=error error={err}");
            return json_error(self.status_code(), "internal server error");
        }
        json_error(self.status_code(), self.to_string())
    }
}
