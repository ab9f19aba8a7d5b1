//! Photostore core library
//!
//! Shared foundation for the photostore service: configuration, the
//! unified error taxonomy, storage backend identifiers, and the domain
//! models with their JSON response projections.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
