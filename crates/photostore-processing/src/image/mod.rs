//! Image decode and resize adapters.

mod processor;
mod resizer;

pub use processor::ImageProcessor;
pub use resizer::ImageResizer;
