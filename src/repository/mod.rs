//! Repository module
//!
//! Data access layer with SQLx

pub mod gateway;
pub mod memory;
pub mod schema;
pub mod signature_repository;

pub use gateway::{Gateway, SqlParam};
pub use memory::MemorySignatureStore;
pub use signature_repository::{
    format_signed, list_signatures, save_signature, SignatureRepository, SignatureStore,
};
