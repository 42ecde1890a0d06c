//! # Services
//!
//! The submission procedure and its two external collaborators, each behind
//! a narrow trait so the flow is testable without PostgreSQL or a live email
//! provider.

pub mod notification;
pub mod registration;
pub mod store;

pub use notification::{EmailMessage, NoopSender, NotificationSender, SendGridSender};
pub use registration::{RegistrationOutcome, RegistrationService};
pub use store::{PgRegistrationStore, RegistrationStore};
