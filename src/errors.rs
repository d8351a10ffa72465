//! Error handling module
//!
//! - `ConfigError` for startup configuration (fatal)
//! - `AppError` for anything a request handler cannot recover from
//!
//! Validation failures and persistence failures are not errors here: the first
//! is a normal form outcome, the second is a `None` from the gateway.

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Fixed body for the 404 fallback.
pub const NOT_FOUND_BODY: &str = "404 - page not found";

/// Fixed body for every unexpected error.
pub const INTERNAL_ERROR_BODY: &str = "500 - internal server error";

/// Startup configuration errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Application-level errors surfaced as the generic 500 page.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("signature listing unavailable")]
    ListingUnavailable,

    #[error("form body rejected: {0}")]
    FormRejected(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "unhandled request error");
        HttpResponse::InternalServerError()
            .content_type(ContentType::plaintext())
            .body(INTERNAL_ERROR_BODY)
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn app_error_renders_fixed_body() {
        let resp = AppError::ListingUnavailable.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body.as_ref(), INTERNAL_ERROR_BODY.as_bytes());
    }

    #[actix_web::test]
    async fn rejected_form_renders_fixed_body() {
        let resp = AppError::FormRejected("Content type error".into()).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body.as_ref(), INTERNAL_ERROR_BODY.as_bytes());
    }

    #[test]
    fn config_error_names_the_variable() {
        let err = ConfigError::Missing("DATABASE_URL");
        assert!(err.to_string().contains("DATABASE_URL"));
    }
}
