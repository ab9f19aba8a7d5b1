//! Photostore processing library
//!
//! The three adapters behind the pipelines: image decode/resize, PDF
//! assembly from image buffers, and OCR text recognition. Everything in
//! this crate is CPU-bound or shells out; callers on the async runtime
//! are expected to wrap the heavy entry points in `spawn_blocking`.

pub mod image;
pub mod ocr;
pub mod pdf;

pub use crate::image::{ImageProcessor, ImageResizer};
pub use crate::ocr::{OcrEngine, OcrError};
pub use crate::pdf::{AssemblyError, PdfAssembler};
