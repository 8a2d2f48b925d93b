//! Raster image encoding and Blob URL creation.
//!
//! Converts operation results to browser-displayable Blob URLs by
//! encoding to PNG and creating object URLs via the Web API.

use image::{ExtendedColorType, ImageEncoder};
use pixelplay_ops::Raster;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur during raster-to-Blob-URL conversion.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    PngEncode(String),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for RasterError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<image::ImageError> for RasterError {
    fn from(err: image::ImageError) -> Self {
        Self::PngEncode(err.to_string())
    }
}

/// PNG color type matching the raster's channel layout.
const fn color_type(raster: &Raster) -> ExtendedColorType {
    match raster {
        Raster::Rgb(_) => ExtendedColorType::Rgb8,
        Raster::Gray(_) => ExtendedColorType::L8,
    }
}

/// Encode a raster as PNG bytes.
///
/// RGB rasters become 8-bit truecolor PNGs; single-channel rasters
/// become 8-bit grayscale PNGs.
///
/// # Errors
///
/// Returns [`RasterError::PngEncode`] if encoding fails.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, RasterError> {
    let dims = raster.dimensions();
    let mut png_bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut png_bytes).write_image(
        raster.as_raw(),
        dims.width,
        dims.height,
        color_type(raster),
    )?;
    Ok(png_bytes)
}

/// Encode a raster as a PNG Blob URL for use as an `<img src>`.
///
/// The returned URL must be revoked via [`revoke_blob_url`] when no
/// longer needed to avoid memory leaks.
///
/// # Errors
///
/// Returns [`RasterError::PngEncode`] if PNG encoding fails.
/// Returns [`RasterError::JsError`] if Blob or URL creation fails.
pub fn raster_to_blob_url(raster: &Raster) -> Result<String, RasterError> {
    let png_bytes = encode_png(raster)?;

    let uint8_array = js_sys::Uint8Array::from(png_bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Revoke a Blob URL previously created by [`raster_to_blob_url`].
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked or garbage collected.
pub fn revoke_blob_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
