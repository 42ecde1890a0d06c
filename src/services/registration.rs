//! # Registration Submission Procedure
//!
//! The one mutation this service exists for: validate, persist, notify.
//!
//! Validation failures reject the call before any side effect. Everything
//! after validation is a soft failure: storage and delivery errors are
//! logged and folded into a [`RegistrationOutcome`] so the caller always
//! receives a well-formed result. The outcome keeps "could not save" and
//! "could not notify" distinct for operators even though the wire response
//! collapses both.

use crate::catalog::SeminarCatalog;
use crate::models::{NewSeminarRegistration, RegistrationRequest};
use crate::services::notification::{EmailMessage, NotificationSender};
use crate::services::store::RegistrationStore;
use crate::validation::{validate_registration, FieldError};
use std::sync::Arc;
use tracing::{error, info};

/// Result of a post-validation submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Row written and notification accepted by the provider.
    Completed { registration_id: i64 },
    /// Row written but the notification could not be delivered.
    SavedButNotNotified { registration_id: i64 },
    /// The durable write itself failed; nothing was persisted.
    Failed,
}

impl RegistrationOutcome {
    /// Whether both the write and the send path completed.
    pub fn is_complete(&self) -> bool {
        matches!(self, RegistrationOutcome::Completed { .. })
    }
}

/// Orchestrates one registration submission against the store and the
/// notification sender.
pub struct RegistrationService {
    store: Arc<dyn RegistrationStore>,
    sender: Arc<dyn NotificationSender>,
    catalog: Arc<SeminarCatalog>,
    notify_to: String,
    subject: String,
}

impl RegistrationService {
    pub fn new(
        store: Arc<dyn RegistrationStore>,
        sender: Arc<dyn NotificationSender>,
        catalog: Arc<SeminarCatalog>,
        notify_to: String,
        subject: String,
    ) -> Self {
        Self { store, sender, catalog, notify_to, subject }
    }

    pub fn catalog(&self) -> &SeminarCatalog {
        &self.catalog
    }

    /// Process one submission.
    ///
    /// `Err` carries per-field validation errors and guarantees no side
    /// effect occurred. `Ok` means the submission was accepted for
    /// processing; inspect the outcome for what actually happened.
    pub async fn submit(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationOutcome, Vec<FieldError>> {
        let selection = validate_registration(request, &self.catalog)?;

        let new = NewSeminarRegistration {
            company_name: request.company.clone(),
            contact_name: request.name.clone(),
            position: request.position.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            challenge: request.challenge.clone(),
            selected_seminars: selection.clone(),
        };

        let registration_id = match self.store.create_registration(new).await {
            Ok(id) => id,
            Err(e) => {
                error!(error = %e, company = %request.company, "Failed to persist registration");
                return Ok(RegistrationOutcome::Failed);
            }
        };

        let email = EmailMessage {
            to: self.notify_to.clone(),
            subject: self.subject.clone(),
            text: build_notification_body(request, &selection, &self.catalog),
            html: None,
        };

        match self.sender.send_email(&email).await {
            Ok(()) => {
                info!(
                    registration_id,
                    company = %request.company,
                    seminars = ?selection,
                    "Registration completed"
                );
                Ok(RegistrationOutcome::Completed { registration_id })
            }
            Err(e) => {
                error!(
                    registration_id,
                    error = %e,
                    "Registration saved but notification failed"
                );
                Ok(RegistrationOutcome::SavedButNotNotified { registration_id })
            }
        }
    }
}

/// Render the operator notification body from every submitted field plus the
/// catalog details of the selected offerings.
pub fn build_notification_body(
    request: &RegistrationRequest,
    selection: &[String],
    catalog: &SeminarCatalog,
) -> String {
    let challenge = request
        .challenge
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or("なし");
    let seminar_details = catalog.render_selection(selection);

    format!(
        "新しいセミナー登録がありました。\n\
         \n\
         会社名: {company}\n\
         氏名: {name}\n\
         役職: {position}\n\
         メールアドレス: {email}\n\
         電話番号: {phone}\n\
         課題: {challenge}\n\
         \n\
         参加希望セミナー:\n\
         {seminar_details}",
        company = request.company,
        name = request.name,
        position = request.position,
        email = request.email,
        phone = request.phone,
    )
}
