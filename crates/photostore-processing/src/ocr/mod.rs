//! OCR text recognition.

mod engine;

pub use engine::{OcrEngine, OcrError};
