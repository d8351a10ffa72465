//! Sanitization: trim, escape, strip. Runs only after validation passed.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{SanitizedSignature, SignatureForm};

/// A well-formed entity reference at the start of the haystack.
fn entity_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]{0,31}|#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6});")
            .expect("entity pattern is valid")
    })
}

/// Escape markup-significant characters.
///
/// Idempotent: an `&` that already begins an entity reference is kept as-is,
/// so escaped text passes through unchanged.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, c) in input.char_indices() {
        match c {
            '&' if entity_prefix().is_match(&input[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

/// Drop every hyphen.
pub fn strip_hyphens(input: &str) -> String {
    input.chars().filter(|c| *c != '-').collect()
}

type Transform = fn(&str) -> String;

fn trim_escape(input: &str) -> String {
    escape(input.trim())
}

const NAME_STEPS: &[Transform] = &[trim_escape];
const NATIONAL_ID_STEPS: &[Transform] = &[strip_hyphens];
const COMMENT_STEPS: &[Transform] = &[trim_escape];

fn apply(steps: &[Transform], input: &str) -> String {
    steps.iter().fold(input.to_string(), |acc, step| step(&acc))
}

/// Run every field through its transformation list.
pub fn sanitize(form: &SignatureForm) -> SanitizedSignature {
    SanitizedSignature {
        name: apply(NAME_STEPS, &form.name),
        national_id: apply(NATIONAL_ID_STEPS, &form.national_id),
        comment: apply(COMMENT_STEPS, &form.comment),
    }
}
