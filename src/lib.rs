#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Seminar Registration Service
//!
//! Backend for the Gemini seminar series landing page. Accepts registration
//! submissions, validates them, persists them to PostgreSQL, and notifies the
//! operations mailbox through a transactional-email provider.
//!
//! ## Overview
//!
//! The whole service is a single mutation wired through a narrow HTTP surface:
//!
//! 1. `POST /v1/registrations` validates the submission shape (no side effect
//!    happens on invalid input)
//! 2. the registration row is inserted into `seminar_registrations`
//! 3. a notification email describing the registration is dispatched
//! 4. the caller receives a well-formed `{success, message}` result —
//!    post-validation failures are logged and folded into a soft failure,
//!    never surfaced as a transport error
//!
//! ## Module Organization
//!
//! - [`catalog`] - Seminar offering catalog (the 1-or-N offerings axis)
//! - [`config`] - Environment-aware YAML configuration
//! - [`database`] - Connection pool and schema migrations
//! - [`error`] - Structured error handling
//! - [`models`] - Registration row model and insert
//! - [`services`] - Notification dispatch and the submission procedure
//! - [`validation`] - Pre-side-effect input validation
//! - [`web`] - Axum router, handlers, and API error mapping
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use seminar_registration::config::ConfigManager;
//! use seminar_registration::database::DatabaseConnection;
//! use seminar_registration::web;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ConfigManager::load()?;
//! let db = DatabaseConnection::from_config(&config.config().database).await?;
//! let state = web::state::AppState::from_config(config.config(), db.pool().clone())?;
//! let app = web::create_router(state);
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! Storage and notification sit behind traits, so the submission procedure is
//! tested end to end with recording doubles and no live PostgreSQL/SendGrid:
//!
//! ```bash
//! cargo test --lib    # Unit tests
//! cargo test          # All tests
//! ```

pub mod catalog;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod validation;
pub mod web;

pub use error::{Result, SeminarError};
