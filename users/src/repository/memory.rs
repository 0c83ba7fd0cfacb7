//! Process-local [`UserRepository`], used when exercising the HTTP surface
//! and use-case layer without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{RepoError, RepoResult, UserRepository};
use crate::models::{User, UserPayload};

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.state.read().await.users.values().cloned().collect())
    }

    async fn get_user_by_id(&self, id: i64) -> RepoResult<User> {
        self.state
            .read()
            .await
            .users
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound(id))
    }

    async fn create_user(&self, user: &UserPayload) -> RepoResult<i64> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let id = state.last_id;
        state.users.insert(
            id,
            User {
                id,
                name: user.name.clone(),
                email: user.email.clone(),
                age: user.age,
                phone: user.phone.clone(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn update_user(&self, id: i64, user: &UserPayload) -> RepoResult<()> {
        let mut state = self.state.write().await;
        let existing = state.users.get_mut(&id).ok_or(RepoError::NotFound(id))?;
        existing.name.clone_from(&user.name);
        existing.email.clone_from(&user.email);
        existing.age = user.age;
        existing.phone.clone_from(&user.phone);
        Ok(())
    }

    async fn delete_user(&self, id: i64) -> RepoResult<u64> {
        match self.state.write().await.users.remove(&id) {
            Some(_) => Ok(1),
            None => Err(RepoError::NotFound(id)),
        }
    }
}
