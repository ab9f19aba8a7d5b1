//! Exact-target-size resize.

use bytes::Bytes;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

pub struct ImageResizer;

impl ImageResizer {
    /// Resize an image buffer to exactly `width` x `height` (aspect ratio
    /// is not preserved) and encode the result as JPEG.
    pub fn resize_exact(data: &[u8], width: u32, height: u32) -> Result<Bytes, anyhow::Error> {
        anyhow::ensure!(
            width > 0 && height > 0,
            "Target dimensions must be positive"
        );

        let cursor = Cursor::new(data);
        let img = ImageReader::new(cursor).with_guessed_format()?.decode()?;

        let resized = img.resize_exact(width, height, FilterType::Lanczos3);

        // JPEG output has no alpha channel; flatten before encoding.
        let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());

        let estimated_size = (width * height * 3) as usize;
        let mut buffer = Vec::with_capacity(estimated_size);
        let mut cursor = Cursor::new(&mut buffer);
        rgb.write_to(&mut cursor, ImageFormat::Jpeg)?;

        Ok(Bytes::from(buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};

    fn create_test_image(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([0, 128, 255, 255]));
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        img.write_to(&mut cursor, ImageFormat::Png).unwrap();
        buffer
    }

    #[test]
    fn test_resize_to_exact_target() {
        let data = create_test_image(400, 300);
        let resized = ImageResizer::resize_exact(&data, 100, 100).unwrap();

        let out = ImageReader::new(Cursor::new(resized.as_ref()))
            .with_guessed_format()
            .unwrap();
        assert_eq!(out.format(), Some(ImageFormat::Jpeg));
        assert_eq!(out.decode().unwrap().dimensions(), (100, 100));
    }

    #[test]
    fn test_resize_can_upscale() {
        let data = create_test_image(10, 10);
        let resized = ImageResizer::resize_exact(&data, 64, 32).unwrap();

        let out = ImageReader::new(Cursor::new(resized.as_ref()))
            .with_guessed_format()
            .unwrap()
            .decode()
            .unwrap();
        assert_eq!(out.dimensions(), (64, 32));
    }

    #[test]
    fn test_resize_rejects_zero_dimension() {
        let data = create_test_image(10, 10);
        assert!(ImageResizer::resize_exact(&data, 0, 100).is_err());
        assert!(ImageResizer::resize_exact(&data, 100, 0).is_err());
    }

    #[test]
    fn test_resize_rejects_undecodable_input() {
        assert!(ImageResizer::resize_exact(b"garbage", 100, 100).is_err());
    }
}
