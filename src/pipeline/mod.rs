//! Submission pipeline: validate, then sanitize.

pub mod sanitize;
pub mod validation;

pub use sanitize::{escape, sanitize};
pub use validation::validate;

use crate::models::{FieldError, SanitizedSignature, SignatureForm};

/// Validate `form` and, only if every rule passes, sanitize it.
pub fn process(form: &SignatureForm) -> Result<SanitizedSignature, Vec<FieldError>> {
    validate(form)?;
    Ok(sanitize(form))
}
