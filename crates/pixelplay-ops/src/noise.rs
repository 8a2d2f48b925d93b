//! Salt-and-pepper noise.
//!
//! Draws `trunc(amount * width * height)` random coordinates and paints
//! them white, then draws a second, independent set and paints them
//! black. Coordinates are drawn with replacement, so the same pixel can
//! be hit more than once and the effective noise density is slightly
//! below `amount`. Pepper is applied after salt.

use image::{Rgb, RgbImage};
use rand::Rng;

use crate::types::{Dimensions, OpsError};

const SALT: Rgb<u8> = Rgb([255, 255, 255]);
const PEPPER: Rgb<u8> = Rgb([0, 0, 0]);

/// Number of coordinates drawn for each of salt and pepper.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn noise_count(dims: Dimensions, amount: f64) -> u64 {
    (amount * dims.pixel_count() as f64) as u64
}

/// Return a copy of `image` with salt-and-pepper noise applied.
///
/// `amount` is the fraction of the pixel count drawn for each colour.
///
/// # Errors
///
/// Returns [`OpsError::InvalidParameter`] if `amount` is not within
/// `0.0..=1.0`.
pub fn salt_and_pepper<R: Rng + ?Sized>(
    image: &RgbImage,
    amount: f64,
    rng: &mut R,
) -> Result<RgbImage, OpsError> {
    if !(0.0..=1.0).contains(&amount) {
        return Err(OpsError::InvalidParameter(format!(
            "noise amount must be within 0.0..=1.0, got {amount}"
        )));
    }

    let dims = Dimensions::of(image);
    let mut noisy = image.clone();
    let count = noise_count(dims, amount);
    if count == 0 {
        return Ok(noisy);
    }

    for colour in [SALT, PEPPER] {
        for _ in 0..count {
            let x = rng.gen_range(0..dims.width);
            let y = rng.gen_range(0..dims.height);
            noisy.put_pixel(x, y, colour);
        }
    }

    tracing::trace!(count, amount, "applied salt and pepper noise");
    Ok(noisy)
}
