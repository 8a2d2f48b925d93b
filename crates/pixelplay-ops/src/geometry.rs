//! Geometric operations: crop, flips, quarter-turn rotations, and zoom.
//!
//! Flips and rotations delegate to `image::imageops`. Rotation angles
//! are clockwise, so [`rotate_90`] turns the top row into the right
//! column.

use image::RgbImage;
use image::imageops::{self, FilterType};

use crate::types::{Dimensions, OpsError};

/// Interpolation used when scaling the zoomed region back up.
pub const ZOOM_FILTER: FilterType = FilterType::CatmullRom;

/// Keep columns `left..right` and rows `top..bottom`.
///
/// # Errors
///
/// Returns [`OpsError::InvalidCrop`] if `left >= right`, `top >= bottom`,
/// or either far edge lies past the image.
pub fn crop(
    image: &RgbImage,
    left: u32,
    right: u32,
    top: u32,
    bottom: u32,
) -> Result<RgbImage, OpsError> {
    let dims = Dimensions::of(image);
    if left >= right || top >= bottom || right > dims.width || bottom > dims.height {
        return Err(OpsError::InvalidCrop {
            left,
            right,
            top,
            bottom,
            width: dims.width,
            height: dims.height,
        });
    }

    Ok(imageops::crop_imm(image, left, top, right - left, bottom - top).to_image())
}

/// Mirror left to right.
#[must_use]
pub fn flip_horizontal(image: &RgbImage) -> RgbImage {
    imageops::flip_horizontal(image)
}

/// Mirror top to bottom.
#[must_use]
pub fn flip_vertical(image: &RgbImage) -> RgbImage {
    imageops::flip_vertical(image)
}

/// Rotate 90° clockwise. Width and height swap.
#[must_use]
pub fn rotate_90(image: &RgbImage) -> RgbImage {
    imageops::rotate90(image)
}

/// Rotate 180°.
#[must_use]
pub fn rotate_180(image: &RgbImage) -> RgbImage {
    imageops::rotate180(image)
}

/// Rotate 270° clockwise (90° counter-clockwise). Width and height swap.
#[must_use]
pub fn rotate_270(image: &RgbImage) -> RgbImage {
    imageops::rotate270(image)
}

/// Size and offset of the centre region shown at `factor`
/// magnification: `(left, top, width, height)`.
///
/// The region is `trunc(dim / factor)` on each axis (never less than one
/// pixel), centred with integer division.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn zoom_region(dims: Dimensions, factor: f64) -> (u32, u32, u32, u32) {
    let shrink = |len: u32| ((f64::from(len) / factor) as u32).clamp(1, len.max(1));
    let cw = shrink(dims.width);
    let ch = shrink(dims.height);
    let left = dims.width.saturating_sub(cw) / 2;
    let top = dims.height.saturating_sub(ch) / 2;
    (left, top, cw, ch)
}

/// Crop the centre `1/factor` of each axis and scale it back to the
/// original size.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if `factor` is not finite or
/// is below 1.0.
pub fn zoom(image: &RgbImage, factor: f64) -> Result<RgbImage, OpsError> {
    if !factor.is_finite() || factor < 1.0 {
        return Err(OpsError::InvalidParameter(format!(
            "zoom factor must be a finite value of at least 1.0, got {factor}"
        )));
    }

    let dims = Dimensions::of(image);
    if dims.width == 0 || dims.height == 0 {
        return Ok(image.clone());
    }

    let (left, top, cw, ch) = zoom_region(dims, factor);
    if cw == dims.width && ch == dims.height {
        return Ok(image.clone());
    }

    let region = imageops::crop_imm(image, left, top, cw, ch).to_image();
    Ok(imageops::resize(&region, dims.width, dims.height, ZOOM_FILTER))
}
