//! Application state.
//!
//! Built once at process start and passed to every handler; no ambient
//! globals. The pool and the storage handle are safe for concurrent use,
//! so requests share them without application-level locking.

use photostore_core::Config;
use photostore_db::{AssetRepository, PdfRepository, TextExtractionRepository};
use photostore_processing::OcrEngine;
use photostore_storage::Storage;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Instant;

/// Main application state shared across request handlers.
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub assets: AssetRepository,
    pub pdfs: PdfRepository,
    pub extractions: TextExtractionRepository,
    pub storage: Arc<dyn Storage>,
    pub ocr: OcrEngine,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool, storage: Arc<dyn Storage>) -> Self {
        let ocr = OcrEngine::new(config.ocr_language.clone());
        Self {
            assets: AssetRepository::new(pool.clone()),
            pdfs: PdfRepository::new(pool.clone()),
            extractions: TextExtractionRepository::new(pool.clone()),
            config,
            pool,
            storage,
            ocr,
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was constructed at process start.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
