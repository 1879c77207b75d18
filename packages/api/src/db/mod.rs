//! # User persistence
//!
//! [`UserStore`] is the seam between the auth handlers and storage. Two backends:
//!
//! - [`MemoryUserStore`]: a `HashMap` behind a `tokio` `RwLock`; lost on restart. Used
//!   when no database URL is configured, and by the tests.
//! - [`PgUserStore`]: PostgreSQL through a shared [`sqlx::PgPool`]; the pool is opened
//!   by [`connect`], which also runs the embedded migrations.
//!
//! Both key users on the normalised email and report a duplicate sign-up as
//! [`ApiError::EmailTaken`].

mod memory;
mod pool;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{NewUser, User};

pub use memory::MemoryUserStore;
pub use pool::connect;
pub use postgres::PgUserStore;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    /// Insert a new account; fails with [`ApiError::EmailTaken`] if the email exists.
    async fn insert(&self, user: NewUser) -> Result<User, ApiError>;

    /// Update the display names of an existing account, `None` if it does not exist.
    async fn update_names(
        &self,
        id: Uuid,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<User>, ApiError>;
}
