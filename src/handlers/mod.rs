//! HTTP handlers and route table.

pub mod signature_handlers;
pub mod static_files;

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

pub use static_files::PublicDir;

use crate::errors::NOT_FOUND_BODY;
use crate::repository::SignatureStore;

/// Fixed 404 body for anything unmatched.
pub fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body(NOT_FOUND_BODY)
}

async fn fallback() -> HttpResponse {
    not_found()
}

/// Every route of the service, plus the 404 fallback.
pub fn configure<S: SignatureStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.configure(static_files::configure)
        .configure(signature_handlers::configure::<S>)
        .default_service(web::to(fallback));
}
