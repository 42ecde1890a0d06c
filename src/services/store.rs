//! Persistence seam for registrations.

use crate::error::{Result, SeminarError};
use crate::models::{NewSeminarRegistration, SeminarRegistration};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

/// Durable storage for registrations.
///
/// One method because the subsystem is write-once: a registration is created
/// per form submission and never mutated or deleted here.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Persist a registration, returning its storage identifier.
    async fn create_registration(&self, new: NewSeminarRegistration) -> Result<i64>;
}

/// PostgreSQL-backed store.
pub struct PgRegistrationStore {
    pool: PgPool,
}

impl PgRegistrationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationStore for PgRegistrationStore {
    async fn create_registration(&self, new: NewSeminarRegistration) -> Result<i64> {
        let row = SeminarRegistration::create(&self.pool, new)
            .await
            .map_err(|e| SeminarError::DatabaseError(e.to_string()))?;

        debug!(registration_id = row.id, "Registration persisted");
        Ok(row.id)
    }
}
