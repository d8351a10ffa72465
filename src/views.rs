//! HTML pages: the form with its listing, and the "could not save" page.
//!
//! Signature views arrive already escaped. Raw form values echoed back after a
//! validation failure are escaped here.

use crate::models::{FormState, SignatureView};
use crate::pipeline::escape;
use crate::pipeline::validation::{FIELD_COMMENT, FIELD_NAME, FIELD_NATIONAL_ID};

const PAGE_TITLE: &str = "Petition";

fn layout(body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{PAGE_TITLE}</title>\n\
         <link rel=\"stylesheet\" href=\"/public/styles.css\">\n\
         </head>\n<body>\n<main>\n{body}</main>\n</body>\n</html>\n"
    )
}

fn input_class(state: &FormState, field: &str) -> &'static str {
    if state.has_error(field) {
        "field field--invalid"
    } else {
        "field"
    }
}

fn render_errors(state: &FormState) -> String {
    if state.errors.is_empty() {
        return String::new();
    }
    let items: String = state
        .errors
        .iter()
        .map(|e| {
            format!(
                "<li><label for=\"{}\">{}</label></li>\n",
                e.field,
                escape(e.message)
            )
        })
        .collect();
    format!("<section class=\"errors\">\n<h2>Errors</h2>\n<ul>\n{items}</ul>\n</section>\n")
}

fn render_form(state: &FormState) -> String {
    format!(
        "<form method=\"post\" action=\"/\" class=\"form\">\n\
         <div class=\"{name_class}\">\n<label for=\"{FIELD_NAME}\">Name*</label>\n\
         <input type=\"text\" id=\"{FIELD_NAME}\" name=\"{FIELD_NAME}\" value=\"{name}\">\n</div>\n\
         <div class=\"{nid_class}\">\n<label for=\"{FIELD_NATIONAL_ID}\">National ID*</label>\n\
         <input type=\"text\" id=\"{FIELD_NATIONAL_ID}\" name=\"{FIELD_NATIONAL_ID}\" value=\"{national_id}\" placeholder=\"000000-0000\">\n</div>\n\
         <div class=\"{comment_class}\">\n<label for=\"{FIELD_COMMENT}\">Comment</label>\n\
         <textarea id=\"{FIELD_COMMENT}\" name=\"{FIELD_COMMENT}\">{comment}</textarea>\n</div>\n\
         <div class=\"checkbox\">\n<input type=\"checkbox\" id=\"showName\" name=\"showName\"{checked}>\n\
         <label for=\"showName\">Show my name on the list</label>\n</div>\n\
         <button>Sign</button>\n</form>\n",
        name_class = input_class(state, FIELD_NAME),
        nid_class = input_class(state, FIELD_NATIONAL_ID),
        comment_class = input_class(state, FIELD_COMMENT),
        name = escape(&state.name),
        national_id = escape(&state.national_id),
        comment = escape(&state.comment),
        checked = if state.show_name { " checked" } else { "" },
    )
}

fn render_row(sig: &SignatureView) -> String {
    format!(
        "<tr>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n</tr>\n",
        sig.signed, sig.name, sig.comment
    )
}

fn render_listing(signatures: &[SignatureView]) -> String {
    if signatures.is_empty() {
        return "<section class=\"signatures\">\n<h2>Signatures</h2>\n<p>No signatures yet.</p>\n</section>\n"
            .to_string();
    }
    let rows: String = signatures.iter().map(render_row).collect();
    format!(
        "<section class=\"signatures\">\n<h2>Signatures</h2>\n\
         <p>{count} signatures</p>\n\
         <table>\n<thead>\n<tr><th>Date</th><th>Name</th><th>Comment</th></tr>\n</thead>\n\
         <tbody>\n{rows}</tbody>\n</table>\n</section>\n",
        count = signatures.len(),
    )
}

/// Form, any validation errors, and the full listing.
pub fn index_page(state: &FormState) -> String {
    let body = format!(
        "<h1>Sign the petition</h1>\n{}{}{}",
        render_errors(state),
        render_form(state),
        render_listing(&state.signatures)
    );
    layout(&body)
}

/// Shown when the insert did not go through.
pub fn save_failed_page() -> String {
    layout(
        "<h1>Could not save your signature</h1>\n\
         <p>Something went wrong while saving. Please try again later.</p>\n\
         <p><a href=\"/\">Back to the petition</a></p>\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldError;
    use crate::pipeline::validation::MSG_NAME_EMPTY;

    #[test]
    fn echoed_values_are_escaped() {
        let state = FormState {
            name: "\"><script>".into(),
            ..Default::default()
        };
        let html = index_page(&state);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn errors_are_listed_and_field_marked() {
        let state = FormState {
            errors: vec![FieldError {
                field: FIELD_NAME,
                message: MSG_NAME_EMPTY,
            }],
            ..Default::default()
        };
        let html = index_page(&state);
        assert!(html.contains(MSG_NAME_EMPTY));
        assert!(html.contains("field field--invalid"));
    }

    #[test]
    fn show_name_box_follows_state() {
        let html = index_page(&FormState::default());
        assert!(html.contains("name=\"showName\" checked>"));

        let html = index_page(&FormState {
            show_name: false,
            ..Default::default()
        });
        assert!(html.contains("name=\"showName\">"));
        assert!(!html.contains("name=\"showName\" checked"));
    }

    #[test]
    fn listing_shows_rows() {
        let state = FormState {
            signatures: vec![SignatureView {
                id: "x".into(),
                name: "Jón".into(),
                national_id: "1234567890".into(),
                comment: "hi".into(),
                anonymous: false,
                signed: "01.02.2021".into(),
            }],
            ..Default::default()
        };
        let html = index_page(&state);
        assert!(html.contains("<td>Jón</td>"));
        assert!(html.contains("<td>01.02.2021</td>"));
        assert!(!html.contains("1234567890"));
    }
}
