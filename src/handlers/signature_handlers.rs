//! Signature HTTP handlers
//!
//! `GET /` renders the form and listing, `POST /` runs the submission through
//! validation, sanitization and the write path.

use actix_web::error::UrlencodedError;
use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::models::{FieldError, FormState, NewSignature, SignatureForm, SignatureView};
use crate::pipeline;
use crate::repository::{list_signatures, save_signature, SignatureStore};
use crate::views;

/// Largest urlencoded body `POST /` accepts. Far above what valid input needs,
/// so an over-long comment still reaches validation.
pub const FORM_LIMIT_BYTES: usize = 100 * 1024;

fn form_rejected(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, path = %req.path(), "form body rejected");
    AppError::FormRejected(err.to_string()).into()
}

/// Body limit, and extractor failures rendered as the fixed 500 page.
fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(FORM_LIMIT_BYTES)
        .error_handler(form_rejected)
}

/// Configure signature routes
pub fn configure<S: SignatureStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .app_data(form_config())
            .route(web::get().to(show_form::<S>))
            .route(web::post().to(submit::<S>)),
    );
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

async fn load_listing<S: SignatureStore>(store: &S) -> AppResult<Vec<SignatureView>> {
    list_signatures(store).await.ok_or(AppError::ListingUnavailable)
}

/// Empty form plus every signature.
async fn show_form<S: SignatureStore + 'static>(store: web::Data<S>) -> AppResult<HttpResponse> {
    let signatures = load_listing(store.get_ref()).await?;
    Ok(html(views::index_page(&FormState {
        signatures,
        ..Default::default()
    })))
}

/// Re-render the form with the raw values and every failed rule.
async fn reject<S: SignatureStore>(
    store: &S,
    form: SignatureForm,
    errors: Vec<FieldError>,
) -> AppResult<HttpResponse> {
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    info!(?fields, "submission failed validation");

    let signatures = load_listing(store).await?;
    let show_name = form.shows_name();
    Ok(html(views::index_page(&FormState {
        name: form.name,
        national_id: form.national_id,
        comment: form.comment,
        show_name,
        signatures,
        errors,
    })))
}

/// Validate, sanitize, store, redirect.
async fn submit<S: SignatureStore + 'static>(
    store: web::Data<S>,
    form: web::Form<SignatureForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let sanitized = match pipeline::process(&form) {
        Ok(sanitized) => sanitized,
        Err(errors) => return reject(store.get_ref(), form, errors).await,
    };

    let row = NewSignature::from_submission(sanitized, form.shows_name());
    match save_signature(store.get_ref(), &row).await {
        Some(()) => Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, "/"))
            .finish()),
        None => {
            warn!(id = %row.id, "signature could not be saved");
            Ok(html(views::save_failed_page()))
        }
    }
}
