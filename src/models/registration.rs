//! # Registration Model
//!
//! Row model for persisted seminar registrations.
//!
//! ## Database Schema
//!
//! Maps to the `seminar_registrations` table:
//! - `id`: Primary key (BIGSERIAL)
//! - `company_name`, `contact_name`, `position`, `email`, `phone`: required text
//! - `challenge`: optional free text
//! - `selected_seminars`: JSONB array of offering identifiers
//! - `created_at`: insertion timestamp
//!
//! Rows are write-once from this component's perspective: one insert per form
//! submission, never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// A persisted registration tying a person/company to selected offerings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SeminarRegistration {
    pub id: i64,
    pub company_name: String,
    pub contact_name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub challenge: Option<String>,
    pub selected_seminars: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// New registration for creation (without generated fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSeminarRegistration {
    pub company_name: String,
    pub contact_name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub challenge: Option<String>,
    pub selected_seminars: Vec<String>,
}

impl SeminarRegistration {
    /// Insert a new registration and return the stored row.
    pub async fn create(
        pool: &PgPool,
        new: NewSeminarRegistration,
    ) -> Result<SeminarRegistration, sqlx::Error> {
        let selected = serde_json::Value::from(new.selected_seminars);

        sqlx::query_as::<_, SeminarRegistration>(
            r#"
            INSERT INTO seminar_registrations (
                company_name, contact_name, position, email, phone,
                challenge, selected_seminars, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            RETURNING id, company_name, contact_name, position, email, phone,
                      challenge, selected_seminars, created_at
            "#,
        )
        .bind(new.company_name)
        .bind(new.contact_name)
        .bind(new.position)
        .bind(new.email)
        .bind(new.phone)
        .bind(new.challenge)
        .bind(selected)
        .fetch_one(pool)
        .await
    }

    /// Count of stored registrations, used by operational checks.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM seminar_registrations")
            .fetch_one(pool)
            .await
    }
}
