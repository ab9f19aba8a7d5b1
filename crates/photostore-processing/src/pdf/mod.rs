//! PDF assembly from image buffers.

mod assembler;

pub use assembler::{AssemblyError, PdfAssembler};
