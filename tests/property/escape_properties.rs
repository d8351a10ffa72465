//! Property tests for the sanitization and validation pipeline.

use proptest::prelude::*;

use petition::models::SignatureForm;
use petition::pipeline::sanitize::{escape, strip_hyphens};
use petition::pipeline::validation::{validate, MSG_NAME_EMPTY, MSG_NATIONAL_ID_FORMAT};

fn form(name: String, national_id: String) -> SignatureForm {
    SignatureForm {
        name,
        national_id,
        comment: String::new(),
        show_name: Some("on".into()),
    }
}

fn markup_heavy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("&".to_string()),
            Just("&amp;".to_string()),
            Just("&#x2F;".to_string()),
            Just("&#".to_string()),
            Just(";".to_string()),
            Just("<".to_string()),
            Just(">".to_string()),
            Just("\"".to_string()),
            Just("'".to_string()),
            Just("/".to_string()),
            Just("\\".to_string()),
            Just("`".to_string()),
            "[a-z0-9#x]{1,4}",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    // Read path re-escapes stored text; that is only safe if escaping is idempotent.
    #[test]
    fn prop_escape_is_idempotent(s in any::<String>()) {
        let once = escape(&s);
        prop_assert_eq!(escape(&once), once);
    }

    #[test]
    fn prop_escape_idempotent_on_markup(s in markup_heavy()) {
        let once = escape(&s);
        prop_assert_eq!(escape(&once), once);
    }

    #[test]
    fn prop_escaped_text_has_no_raw_markup(s in any::<String>()) {
        let out = escape(&s);
        for c in ['<', '>', '"', '\'', '/', '\\', '`'] {
            prop_assert!(!out.contains(c));
        }
    }

    #[test]
    fn prop_well_formed_ids_pass(digits in "[0-9]{10}", hyphen in any::<bool>()) {
        let id = if hyphen {
            format!("{}-{}", &digits[..6], &digits[6..])
        } else {
            digits.clone()
        };
        prop_assert!(validate(&form("Jón".into(), id.clone())).is_ok());
        prop_assert_eq!(strip_hyphens(&id), digits);
    }

    #[test]
    fn prop_wrong_digit_counts_fail(head in "[0-9]{0,5}|[0-9]{7,9}", tail in "[0-9]{4}") {
        let errors = validate(&form("Jón".into(), format!("{head}-{tail}"))).unwrap_err();
        prop_assert!(errors.iter().any(|e| e.message == MSG_NATIONAL_ID_FORMAT));
    }

    #[test]
    fn prop_blank_names_fail(name in "[ \t\n]{0,8}") {
        let errors = validate(&form(name, "1234567890".into())).unwrap_err();
        prop_assert!(errors.iter().any(|e| e.field == "name" && e.message == MSG_NAME_EMPTY));
    }
}
