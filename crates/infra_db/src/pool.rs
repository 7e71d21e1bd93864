//! Connection pool and migration helpers

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::DatabaseError;

/// Creates a PostgreSQL connection pool
pub async fn create_pool(database_url: &str) -> Result<PgPool, DatabaseError> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(database_url)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    tracing::info!("Database connection established");
    Ok(pool)
}

/// Applies the embedded SQL migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    tracing::info!("Running database migrations...");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

    tracing::info!("Database ready");
    Ok(())
}
