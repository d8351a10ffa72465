//! Middleware module

pub mod logging;

pub use logging::RequestLogging;
