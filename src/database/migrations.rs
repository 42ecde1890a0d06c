//! # Schema Migrations
//!
//! The service owns a single table, so migrations are embedded DDL applied
//! idempotently at startup rather than a versioned migration directory.

use sqlx::PgPool;
use tracing::info;

const CREATE_SEMINAR_REGISTRATIONS: &str =
    include_str!("../../migrations/20260115000000_create_seminar_registrations.sql");

/// Apply the schema. Safe to run on every startup.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(CREATE_SEMINAR_REGISTRATIONS).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
