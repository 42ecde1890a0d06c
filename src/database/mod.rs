//! # Database Layer
//!
//! Connection pool construction and schema migrations for the registration
//! store.

pub mod connection;
pub mod migrations;

pub use connection::DatabaseConnection;
pub use migrations::run_migrations;
