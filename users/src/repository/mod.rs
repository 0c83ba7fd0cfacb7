//! Persistence boundary for users.
//!
//! Implementations report a missing row as [`RepoError::NotFound`] so callers
//! can tell it apart from infrastructure failures.

use std::time::Duration;

use async_trait::async_trait;

use crate::models::{User, UserPayload};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("user with id={0} not found")]
    NotFound(i64),
    #[error("database operation timed out after {0:?}")]
    Timeout(Duration),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_users(&self) -> RepoResult<Vec<User>>;

    async fn get_user_by_id(&self, id: i64) -> RepoResult<User>;

    /// Inserts a user and returns the id assigned by the backend.
    async fn create_user(&self, user: &UserPayload) -> RepoResult<i64>;

    async fn update_user(&self, id: i64, user: &UserPayload) -> RepoResult<()>;

    /// Deletes a user and returns the number of rows removed.
    async fn delete_user(&self, id: i64) -> RepoResult<u64>;
}
