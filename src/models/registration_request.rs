//! Incoming registration submission, as posted by the landing-page form.

use serde::{Deserialize, Serialize};

/// The raw form submission.
///
/// Field names mirror the form wire format; `selected_seminars` may be
/// omitted entirely in a single-offering deployment, where the lone catalog
/// entry is implied (see [`crate::validation`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Company the registrant belongs to.
    pub company: String,
    /// Registrant's full name.
    pub name: String,
    /// Registrant's position or title.
    pub position: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number; presence only, no format validation.
    pub phone: String,
    /// Optional free-text description of the registrant's challenge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    /// Selected offering identifiers.
    #[serde(default)]
    pub selected_seminars: Vec<String>,
}
