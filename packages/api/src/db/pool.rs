//! Database connection pool.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::ApiError;

/// Open a pool to `database_url` and bring the schema up to date.
pub async fn connect(database_url: &str) -> Result<PgPool, ApiError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("database migrations applied");

    Ok(pool)
}
