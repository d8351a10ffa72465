//! Domain models

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// Name stored in place of the submitted one when the signer stays anonymous.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Checkbox value meaning "show my name".
pub const SHOW_NAME_ON: &str = "on";

/// Raw form body of `POST /`.
///
/// Missing fields deserialize as empty strings so the validation rules see them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignatureForm {
    pub name: String,
    pub national_id: String,
    pub comment: String,
    pub show_name: Option<String>,
}

impl SignatureForm {
    pub fn shows_name(&self) -> bool {
        self.show_name.as_deref() == Some(SHOW_NAME_ON)
    }
}

/// A submission that passed validation and sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedSignature {
    pub name: String,
    pub national_id: String,
    pub comment: String,
}

/// Row about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSignature {
    pub id: Uuid,
    pub name: String,
    pub national_id: String,
    pub comment: String,
    pub anonymous: bool,
}

impl NewSignature {
    /// Map a sanitized submission to the stored identity.
    ///
    /// Hiding the name replaces it with [`ANONYMOUS_NAME`] and raises the flag.
    pub fn from_submission(sanitized: SanitizedSignature, show_name: bool) -> Self {
        let (name, anonymous) = if show_name {
            (sanitized.name, false)
        } else {
            (ANONYMOUS_NAME.to_string(), true)
        };

        Self {
            id: Uuid::new_v4(),
            name,
            national_id: sanitized.national_id,
            comment: sanitized.comment,
            anonymous,
        }
    }
}

/// Row as loaded from `signatures`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSignature {
    pub id: Uuid,
    pub name: String,
    pub national_id: String,
    pub comment: String,
    pub anonymous: bool,
    pub signed: DateTime<Utc>,
}

/// Display-ready signature: every text field escaped, `signed` as `DD.MM.YYYY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureView {
    pub id: String,
    pub name: String,
    pub national_id: String,
    pub comment: String,
    pub anonymous: bool,
    pub signed: String,
}

/// A failed validation rule, tagged with the form field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Everything the index page needs.
#[derive(Debug, Clone)]
pub struct FormState {
    pub name: String,
    pub national_id: String,
    pub comment: String,
    /// State of the "show my name" box. Starts checked.
    pub show_name: bool,
    pub signatures: Vec<SignatureView>,
    pub errors: Vec<FieldError>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            national_id: String::new(),
            comment: String::new(),
            show_name: true,
            signatures: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl FormState {
    /// Whether `field` has at least one error, for highlighting inputs.
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}
