use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::core::config::DatabaseConfig;

/// Build the Postgres pool from [`DatabaseConfig`]. Timeouts and lifetime
/// come from the config's `*_secs` fields, surfaced here as [`Duration`]s.
///
/// [`Duration`]: std::time::Duration
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await?;

    tracing::debug!(
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(pool)
}
