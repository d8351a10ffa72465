//! Validation rules for a submitted signature.
//!
//! Rules run in declaration order and every rule runs, so a single response
//! reports all problems at once.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{FieldError, SignatureForm};

pub const NAME_MAX_CHARS: usize = 128;
pub const COMMENT_MAX_CHARS: usize = 400;

pub const FIELD_NAME: &str = "name";
pub const FIELD_NATIONAL_ID: &str = "nationalId";
pub const FIELD_COMMENT: &str = "comment";

pub const MSG_NAME_EMPTY: &str = "name must not be empty";
pub const MSG_NAME_TOO_LONG: &str = "name must be at most 128 characters";
pub const MSG_NATIONAL_ID_EMPTY: &str = "national id must not be empty";
pub const MSG_NATIONAL_ID_FORMAT: &str = "must be 000000-0000 or 0000000000 format";
pub const MSG_COMMENT_TOO_LONG: &str = "comment must be at most 400 characters";

fn national_id_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{6}-?[0-9]{4}$").expect("national id pattern is valid"))
}

/// One rule over the whole form.
pub type Rule = fn(&SignatureForm) -> Result<(), FieldError>;

fn check(ok: bool, field: &'static str, message: &'static str) -> Result<(), FieldError> {
    if ok {
        Ok(())
    } else {
        Err(FieldError { field, message })
    }
}

fn name_present(form: &SignatureForm) -> Result<(), FieldError> {
    check(!form.name.trim().is_empty(), FIELD_NAME, MSG_NAME_EMPTY)
}

fn name_max_len(form: &SignatureForm) -> Result<(), FieldError> {
    check(form.name.chars().count() <= NAME_MAX_CHARS, FIELD_NAME, MSG_NAME_TOO_LONG)
}

fn national_id_present(form: &SignatureForm) -> Result<(), FieldError> {
    check(!form.national_id.trim().is_empty(), FIELD_NATIONAL_ID, MSG_NATIONAL_ID_EMPTY)
}

fn national_id_format(form: &SignatureForm) -> Result<(), FieldError> {
    check(
        national_id_pattern().is_match(&form.national_id),
        FIELD_NATIONAL_ID,
        MSG_NATIONAL_ID_FORMAT,
    )
}

fn comment_max_len(form: &SignatureForm) -> Result<(), FieldError> {
    check(
        form.comment.chars().count() <= COMMENT_MAX_CHARS,
        FIELD_COMMENT,
        MSG_COMMENT_TOO_LONG,
    )
}

/// The signature rules, in reporting order.
pub const RULES: &[Rule] = &[
    name_present,
    name_max_len,
    national_id_present,
    national_id_format,
    comment_max_len,
];

/// Run every rule and collect the failures.
pub fn validate(form: &SignatureForm) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = RULES.iter().filter_map(|rule| rule(form).err()).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
