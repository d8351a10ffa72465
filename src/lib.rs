//! # petition
//!
//! Signature collection form backed by Postgres.
//! Submissions are validated, sanitized and appended to `signatures`;
//! `GET /` renders the form and every stored signature.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pipeline;
pub mod repository;
pub mod views;

pub use config::Config;
pub use errors::{AppError, AppResult, ConfigError};
pub use repository::{Gateway, MemorySignatureStore, SignatureRepository, SignatureStore};
