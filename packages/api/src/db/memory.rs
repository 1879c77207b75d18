use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::UserStore;
use crate::error::ApiError;
use crate::models::{NewUser, User};

/// In-memory user store keyed by email.
#[derive(Clone, Debug, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, ApiError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(ApiError::EmailTaken);
        }
        let user = user.into_user(Utc::now());
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn update_names(
        &self,
        id: Uuid,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<User>, ApiError> {
        let mut users = self.users.write().await;
        let Some(user) = users.values_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        user.first_name = Some(first_name.to_string());
        user.last_name = Some(last_name.to_string());
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }
}
