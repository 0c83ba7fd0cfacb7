//! User use-cases: input validation in front of a [`UserRepository`].

use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserPayload};
use crate::repository::UserRepository;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        Ok(self.repo.list_users().await?)
    }

    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        Ok(self.repo.get_user_by_id(id).await?)
    }

    /// Requires `name` and `email`.
    pub async fn create_user(&self, user: &UserPayload) -> UserResult<i64> {
        require(&user.name, "name is required")?;
        require(&user.email, "email is required")?;
        Ok(self.repo.create_user(user).await?)
    }

    /// Replaces all writable fields. Requires `name`.
    pub async fn update_user(&self, id: i64, user: &UserPayload) -> UserResult<()> {
        require(&user.name, "name is required")?;
        Ok(self.repo.update_user(id, user).await?)
    }

    pub async fn delete_user(&self, id: i64) -> UserResult<u64> {
        Ok(self.repo.delete_user(id).await?)
    }
}

fn require(value: &str, message: &'static str) -> UserResult<()> {
    if value.trim().is_empty() {
        return Err(UserError::Validation(message));
    }
    Ok(())
}
