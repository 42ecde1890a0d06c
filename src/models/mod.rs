//! # Data Layer
//!
//! Row models for the registration service. The subsystem is write-once:
//! rows are inserted on submission and never mutated or deleted here.

pub mod registration;
pub mod registration_request;

pub use registration::{NewSeminarRegistration, SeminarRegistration};
pub use registration_request::RegistrationRequest;
