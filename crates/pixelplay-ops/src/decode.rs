//! Image decoding.
//!
//! Accepts raw image bytes (PNG, JPEG, BMP, WebP) and produces the
//! three-channel RGB buffer every operation works on. Alpha is dropped
//! and grayscale or palette images are expanded to RGB.

use image::RgbImage;

use crate::types::{Dimensions, OpsError};

/// Decode raw image bytes into an 8-bit RGB buffer.
///
/// # Errors
///
/// Returns [`OpsError::EmptyInput`] if `bytes` is empty.
/// Returns [`OpsError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, OpsError> {
    if bytes.is_empty() {
        return Err(OpsError::EmptyInput);
    }

    let rgb = image::load_from_memory(bytes)?.to_rgb8();
    let dims = Dimensions::of(&rgb);
    tracing::debug!(
        width = dims.width,
        height = dims.height,
        bytes = bytes.len(),
        "decoded image"
    );
    Ok(rgb)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Encode an RGBA buffer as PNG bytes.
    fn png_bytes(img: &image::RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    }

    #[test]
    fn empty_input_returns_error() {
        let result = decode_rgb(&[]);
        assert!(matches!(result, Err(OpsError::EmptyInput)));
    }

    #[test]
    fn corrupt_bytes_returns_image_decode_error() {
        let result = decode_rgb(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(result, Err(OpsError::ImageDecode(_))));
    }

    #[test]
    fn output_dimensions_match_input() {
        let img = image::RgbaImage::from_pixel(17, 31, image::Rgba([128, 64, 32, 255]));
        let rgb = decode_rgb(&png_bytes(&img)).unwrap();
        assert_eq!(rgb.width(), 17);
        assert_eq!(rgb.height(), 31);
    }

    #[test]
    fn alpha_is_dropped_and_colour_kept() {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 0]));
        let rgb = decode_rgb(&png_bytes(&img)).unwrap();
        for p in rgb.pixels() {
            assert_eq!(p.0, [10, 20, 30]);
        }
    }

    #[test]
    fn grayscale_png_expands_to_rgb() {
        let gray = image::GrayImage::from_pixel(3, 1, image::Luma([90]));
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            gray.as_raw(),
            gray.width(),
            gray.height(),
            image::ExtendedColorType::L8,
        )
        .unwrap();

        let rgb = decode_rgb(&buf).unwrap();
        assert_eq!(rgb.get_pixel(2, 0).0, [90, 90, 90]);
    }

    #[test]
    fn jpeg_decodes() {
        let img = image::RgbImage::from_pixel(8, 8, image::Rgb([200, 100, 50]));
        let mut buf = Vec::new();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, 95);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgb8,
        )
        .unwrap();

        let rgb = decode_rgb(&buf).unwrap();
        assert_eq!((rgb.width(), rgb.height()), (8, 8));
        // Lossy, but a flat colour survives within a few levels.
        let [r, g, b] = rgb.get_pixel(4, 4).0;
        assert!(r.abs_diff(200) <= 4 && g.abs_diff(100) <= 4 && b.abs_diff(50) <= 4);
    }
}
