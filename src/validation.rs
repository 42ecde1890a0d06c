//! Input validation for registration submissions
//!
//! Shape validation runs before any side effect: a submission that fails here
//! is rejected with per-field errors and neither persisted nor notified.

use crate::catalog::SeminarCatalog;
use crate::models::RegistrationRequest;
use serde::Serialize;

/// One offending field with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self { field: field.to_string(), message: message.to_string() }
    }
}

/// Validates a submission against the required-field rules and the offering
/// catalog.
///
/// Returns the (possibly defaulted) selection on success. In a
/// single-offering deployment an empty selection is filled in with the lone
/// catalog entry; with more than one offering at least one selection is
/// required.
pub fn validate_registration(
    request: &RegistrationRequest,
    catalog: &SeminarCatalog,
) -> Result<Vec<String>, Vec<FieldError>> {
    let mut errors = Vec::new();

    if is_blank(&request.company) {
        errors.push(FieldError::new("company", "会社名を入力してください"));
    }
    if is_blank(&request.name) {
        errors.push(FieldError::new("name", "氏名を入力してください"));
    }
    if is_blank(&request.position) {
        errors.push(FieldError::new("position", "役職を入力してください"));
    }
    if is_blank(&request.email) {
        errors.push(FieldError::new("email", "メールアドレスを入力してください"));
    } else if !is_valid_email(&request.email) {
        errors.push(FieldError::new(
            "email",
            "メールアドレスの形式が正しくありません",
        ));
    }
    if is_blank(&request.phone) {
        errors.push(FieldError::new("phone", "電話番号を入力してください"));
    }

    let selection = resolve_selection(&request.selected_seminars, catalog, &mut errors);

    if errors.is_empty() {
        Ok(selection)
    } else {
        Err(errors)
    }
}

fn resolve_selection(
    selected: &[String],
    catalog: &SeminarCatalog,
    errors: &mut Vec<FieldError>,
) -> Vec<String> {
    if selected.is_empty() {
        // A one-seminar deployment has an implicit selection.
        if let Some(only) = catalog.sole_offering() {
            return vec![only.id.clone()];
        }
        errors.push(FieldError::new(
            "selected_seminars",
            "参加希望セミナーを1つ以上選択してください",
        ));
        return Vec::new();
    }
    // Unknown ids are tolerated here and skipped at render time; the form
    // only ever submits catalog ids, and a stale id must not reject the
    // registration.
    selected.to_vec()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Minimal address-grammar check: a non-empty local part and a dotted,
/// whitespace-free domain on either side of a single `@`.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    // Reject a second '@' and an undotted or dot-terminated domain.
    !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
