//! Photostore storage library
//!
//! Storage abstraction and backends for the photostore service: the
//! `Storage` trait, an S3 implementation over `object_store`, and a local
//! filesystem implementation for development and tests.
//!
//! # Storage key format
//!
//! Keys are `{folder}/{uuid}.{ext}` where the folder names the artifact
//! class (`image_assets`, `pdf_assets`, `textract_jobs`). Keys are always
//! generated server-side; see the `keys` module.

pub mod factory;
pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

pub use factory::create_storage;
pub use keys::{generate_storage_key, IMAGE_FOLDER, PDF_FOLDER, TEXT_FOLDER};
pub use local::LocalStorage;
pub use photostore_core::StorageBackend;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
