//! Postgres-backed [`UserRepository`].
//!
//! Every statement is bounded by `execution_timeout`.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use super::{RepoError, RepoResult, UserRepository};
use crate::models::{User, UserPayload};

const USER_COLUMNS: &str = "id, name, email, age, phone, created_at";

#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
    execution_timeout: Duration,
}

impl PgUserRepository {
    pub fn new(pool: PgPool, execution_timeout: Duration) -> Self {
        Self {
            pool,
            execution_timeout,
        }
    }

    async fn bounded<T, F>(&self, operation: F) -> RepoResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        tokio::time::timeout(self.execution_timeout, operation)
            .await
            .map_err(|_| RepoError::Timeout(self.execution_timeout))?
            .map_err(RepoError::from)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list_users(&self) -> RepoResult<Vec<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id");
        self.bounded(sqlx::query_as::<_, User>(&sql).fetch_all(&self.pool))
            .await
    }

    async fn get_user_by_id(&self, id: i64) -> RepoResult<User> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        self.bounded(
            sqlx::query_as::<_, User>(&sql)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await?
        .ok_or(RepoError::NotFound(id))
    }

    async fn create_user(&self, user: &UserPayload) -> RepoResult<i64> {
        self.bounded(
            sqlx::query_scalar::<_, i64>(
                "INSERT INTO users (name, email, age, phone) VALUES ($1, $2, $3, $4) RETURNING id",
            )
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.age)
            .bind(&user.phone)
            .fetch_one(&self.pool),
        )
        .await
    }

    async fn update_user(&self, id: i64, user: &UserPayload) -> RepoResult<()> {
        let result = self
            .bounded(
                sqlx::query(
                    "UPDATE users SET name = $1, email = $2, age = $3, phone = $4 WHERE id = $5",
                )
                .bind(&user.name)
                .bind(&user.email)
                .bind(user.age)
                .bind(&user.phone)
                .bind(id)
                .execute(&self.pool),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    async fn delete_user(&self, id: i64) -> RepoResult<u64> {
        let result = self
            .bounded(
                sqlx::query("DELETE FROM users WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool),
            )
            .await?;

        match result.rows_affected() {
            0 => Err(RepoError::NotFound(id)),
            rows => Ok(rows),
        }
    }
}
