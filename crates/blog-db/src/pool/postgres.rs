//! PostgreSQL pool and schema setup

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

/// Ordered schema migrations. Versions must increase by one.
const MIGRATIONS: &[(i32, &str, &str)] = &[(
    1,
    "init",
    include_str!("../../migrations/0001_init.sql"),
)];

/// Pool sizing and timeouts
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// How long a request waits for a free connection
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    /// Pool settings for a given URL and connection bounds
    pub fn with_url(url: impl Into<String>, max_connections: u32, min_connections: u32) -> Self {
        Self {
            url: url.into(),
            max_connections,
            min_connections,
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(&config.url)
        .await
}

/// Lock key serializing concurrent migration runs
const MIGRATION_LOCK: i64 = 0x626c_6f67;

/// Bring the schema up to date
///
/// Applied versions are recorded in `schema_migrations`. The whole run is a
/// single transaction holding an advisory lock, so servers starting together
/// apply each migration once.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(MIGRATION_LOCK)
        .execute(&mut *tx)
        .await?;

    sqlx::raw_sql(
        r"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version     INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            applied_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        ",
    )
    .execute(&mut *tx)
    .await?;

    let current: i32 = sqlx::query_scalar("SELECT COALESCE(MAX(version), 0) FROM schema_migrations")
        .fetch_one(&mut *tx)
        .await?;

    info!(
        current_version = current,
        target_version = latest_version(),
        "Checking database migrations"
    );

    for (version, name, sql) in MIGRATIONS.iter().filter(|(v, _, _)| *v > current) {
        info!(version, name, "Applying migration");
        sqlx::raw_sql(sql).execute(&mut *tx).await?;
        sqlx::query("INSERT INTO schema_migrations (version, name) VALUES ($1, $2)")
            .bind(*version)
            .bind(*name)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await
}

fn latest_version() -> i32 {
    MIGRATIONS.last().map_or(0, |(v, _, _)| *v)
}
