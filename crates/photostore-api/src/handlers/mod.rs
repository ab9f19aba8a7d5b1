//! HTTP route handlers, one module per endpoint.

pub mod assets_list;
pub mod health;
pub mod image_get;
pub mod image_to_pdf;
pub mod image_upload;
pub mod text_extract;
