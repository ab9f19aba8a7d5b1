//! Image metadata extraction and validation.

use image::GenericImageView;
use image::ImageReader;
use std::io::Cursor;

pub struct ImageProcessor;

impl ImageProcessor {
    /// Decode an image buffer and return its intrinsic (width, height).
    ///
    /// A buffer that cannot be decoded is an error; this doubles as the
    /// "is this actually an image" validation before any network call.
    pub fn decode_dimensions(data: &[u8]) -> Result<(u32, u32), anyhow::Error> {
        let cursor = Cursor::new(data);
        let img = ImageReader::new(cursor).with_guessed_format()?.decode()?;
        Ok(img.dimensions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn create_test_image(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        img.write_to(&mut cursor, ImageFormat::Png).unwrap();
        buffer
    }

    #[test]
    fn test_decode_dimensions() {
        let data = create_test_image(400, 300);
        let (width, height) = ImageProcessor::decode_dimensions(&data).unwrap();
        assert_eq!(width, 400);
        assert_eq!(height, 300);
    }

    #[test]
    fn test_decode_dimensions_invalid_image() {
        let result = ImageProcessor::decode_dimensions(b"not an image");
        assert!(result.is_err());
    }
}
