//! Image-to-PDF assembly.
//!
//! Lays each source image on its own Letter-sized page, scaled to fit a
//! 500x500 point bounding box and centered. Pages appear in input order.
//! Images are normalized to baseline JPEG so every page embeds as a
//! DCTDecode XObject.

use image::{DynamicImage, ImageFormat, ImageReader};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::io::Cursor;
use thiserror::Error;

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const FIT_BOX: f32 = 500.0;

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("At least one image is required to create a PDF.")]
    EmptyDocument,

    #[error("Page {index}: unreadable image: {source}")]
    UnreadableImage {
        index: usize,
        source: image::ImageError,
    },

    #[error("PDF serialization failed: {0}")]
    Serialize(#[from] lopdf::Error),

    #[error("Page {index}: encoding failed: {source}")]
    PageEncode {
        index: usize,
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct PdfAssembler;

impl PdfAssembler {
    /// Assemble the given image buffers into a single PDF buffer.
    pub fn assemble(images: &[Vec<u8>]) -> Result<Vec<u8>, AssemblyError> {
        if images.is_empty() {
            return Err(AssemblyError::EmptyDocument);
        }

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let mut kids: Vec<Object> = Vec::with_capacity(images.len());

        for (index, data) in images.iter().enumerate() {
            let (jpeg, width, height) = normalize_to_jpeg(data, index)?;

            let image_stream = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => width as i64,
                    "Height" => height as i64,
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => 8,
                    "Filter" => "DCTDecode",
                },
                jpeg,
            );
            let image_id = doc.add_object(image_stream);

            let (draw_width, draw_height) = fit_dimensions(width, height);
            let x = (PAGE_WIDTH - draw_width) / 2.0;
            let y = (PAGE_HEIGHT - draw_height) / 2.0;

            let content = Content {
                operations: vec![
                    Operation::new("q", vec![]),
                    Operation::new(
                        "cm",
                        vec![
                            draw_width.into(),
                            0.into(),
                            0.into(),
                            draw_height.into(),
                            x.into(),
                            y.into(),
                        ],
                    ),
                    Operation::new("Do", vec!["Im0".into()]),
                    Operation::new("Q", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    0.into(),
                    0.into(),
                    PAGE_WIDTH.into(),
                    PAGE_HEIGHT.into(),
                ],
                "Contents" => content_id,
                "Resources" => dictionary! {
                    "XObject" => dictionary! {
                        "Im0" => image_id,
                    },
                },
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;

        tracing::debug!(
            pages = page_count,
            size_bytes = buffer.len() as u64,
            "PDF assembly complete"
        );

        Ok(buffer)
    }
}

/// Decode a source image and re-encode it as RGB JPEG.
fn normalize_to_jpeg(data: &[u8], index: usize) -> Result<(Vec<u8>, u32, u32), AssemblyError> {
    let img = ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .decode()
        .map_err(|source| AssemblyError::UnreadableImage { index, source })?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut jpeg = Vec::new();
    DynamicImage::ImageRgb8(rgb)
        .write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
        .map_err(|source| AssemblyError::PageEncode { index, source })?;

    Ok((jpeg, width, height))
}

/// Scale (width, height) to fit within the bounding box, preserving
/// aspect ratio.
fn fit_dimensions(width: u32, height: u32) -> (f32, f32) {
    let scale = (FIT_BOX / width as f32).min(FIT_BOX / height as f32);
    (width as f32 * scale, height as f32 * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn create_test_image(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 200, 30, 255]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = PdfAssembler::assemble(&[]);
        assert!(matches!(result, Err(AssemblyError::EmptyDocument)));
    }

    #[test]
    fn test_page_count_matches_input() {
        let images = vec![
            create_test_image(100, 80),
            create_test_image(80, 100),
            create_test_image(50, 50),
        ];
        let pdf = PdfAssembler::assemble(&images).unwrap();

        assert!(pdf.starts_with(b"%PDF"));
        let parsed = Document::load_mem(&pdf).unwrap();
        assert_eq!(parsed.get_pages().len(), 3);
    }

    #[test]
    fn test_pages_follow_input_order() {
        // Distinct source sizes so each page is identifiable by the
        // width recorded on its image XObject.
        let sizes = [(120u32, 40u32), (40, 120), (77, 77)];
        let images: Vec<Vec<u8>> = sizes
            .iter()
            .map(|&(w, h)| create_test_image(w, h))
            .collect();
        let pdf = PdfAssembler::assemble(&images).unwrap();
        let parsed = Document::load_mem(&pdf).unwrap();

        let widths: Vec<i64> = parsed
            .get_pages()
            .values()
            .map(|&page_id| {
                let page = parsed.get_dictionary(page_id).unwrap();
                let resources = page
                    .get(b"Resources")
                    .and_then(Object::as_dict)
                    .unwrap();
                let xobjects = resources
                    .get(b"XObject")
                    .and_then(Object::as_dict)
                    .unwrap();
                let image_ref = xobjects.get(b"Im0").unwrap();
                let stream = parsed
                    .get_object(image_ref.as_reference().unwrap())
                    .and_then(Object::as_stream)
                    .unwrap();
                stream.dict.get(b"Width").and_then(Object::as_i64).unwrap()
            })
            .collect();

        assert_eq!(widths, vec![120, 40, 77]);
    }

    #[test]
    fn test_unreadable_image_aborts_assembly() {
        let images = vec![create_test_image(10, 10), b"not an image".to_vec()];
        let result = PdfAssembler::assemble(&images);
        assert!(matches!(
            result,
            Err(AssemblyError::UnreadableImage { index: 1, .. })
        ));
    }

    #[test]
    fn test_fit_dimensions_landscape() {
        let (w, h) = fit_dimensions(1000, 500);
        assert_eq!(w, 500.0);
        assert_eq!(h, 250.0);
    }

    #[test]
    fn test_fit_dimensions_portrait_upscales() {
        let (w, h) = fit_dimensions(100, 250);
        assert_eq!(h, 500.0);
        assert_eq!(w, 200.0);
    }
}
