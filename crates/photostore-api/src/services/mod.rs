//! Pipeline services.
//!
//! Each service runs one fixed sequence of validation and external-call
//! steps for a request: upload, PDF assembly, OCR extraction. Handlers
//! stay thin; the step ordering and error taxonomy live here.

pub mod ocr;
pub mod pdf;
pub mod upload;

pub use ocr::OcrService;
pub use pdf::PdfService;
pub use upload::UploadService;
