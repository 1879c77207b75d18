use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::UserStore;
use crate::error::ApiError;
use crate::models::{AccountType, NewUser, User};

/// One row of the `users` table.
#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    first_name: Option<String>,
    last_name: Option<String>,
    account_type: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            first_name: row.first_name,
            last_name: row.last_name,
            account_type: row
                .account_type
                .as_deref()
                .and_then(|s| s.parse::<AccountType>().ok()),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL-backed user store.
#[derive(Clone, Debug)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(User::from))
    }

    async fn insert(&self, user: NewUser) -> Result<User, ApiError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (id, email, password_hash, first_name, last_name, account_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.account_type.map(|t| t.as_str()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => ApiError::EmailTaken,
            other => ApiError::Database(other),
        })?;
        Ok(row.into())
    }

    async fn update_names(
        &self,
        id: Uuid,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<User>, ApiError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }
}
