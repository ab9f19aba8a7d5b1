//! Photostore database library
//!
//! Repositories for the metadata store. Each repository owns the queries
//! for one table and returns clean domain models from `photostore-core`.

pub mod db;

pub use db::{ping, AssetRepository, NewAsset, PdfRepository, TextExtractionRepository};
