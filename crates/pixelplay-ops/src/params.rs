//! Per-operation parameters and their accepted ranges.
//!
//! Defaults and ranges are associated constants so the web sliders, the
//! CLI flags, and [`Params::validate`] all read from one place.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::types::{Dimensions, OpsError};

/// Crop rectangle as four edges, in pixels.
///
/// Columns `left..right` and rows `top..bottom` are kept (half-open).
/// `None` for `right` or `bottom` means "the image edge", which lets the
/// default box cover any image without knowing its size in advance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropBox {
    /// First kept column.
    pub left: u32,
    /// One past the last kept column, or `None` for the image width.
    pub right: Option<u32>,
    /// First kept row.
    pub top: u32,
    /// One past the last kept row, or `None` for the image height.
    pub bottom: Option<u32>,
}

impl CropBox {
    /// The whole image.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            left: 0,
            right: None,
            top: 0,
            bottom: None,
        }
    }

    /// Resolve to concrete `(left, right, top, bottom)` for an image of
    /// the given size.
    #[must_use]
    pub fn resolve(&self, dims: Dimensions) -> (u32, u32, u32, u32) {
        (
            self.left,
            self.right.unwrap_or(dims.width),
            self.top,
            self.bottom.unwrap_or(dims.height),
        )
    }
}

/// Parameters for every operation that takes one.
///
/// Operations ignore the fields that do not concern them, so a single
/// `Params` value can be kept across operation switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Crop rectangle.
    pub crop: CropBox,
    /// Value added to every sample before clamping.
    pub brightness: i16,
    /// Grayscale values strictly above this become white.
    pub threshold: u8,
    /// Fraction of pixels to turn white, and again black.
    pub noise_amount: f64,
    /// Seed for the noise generator. `None` draws from entropy.
    pub noise_seed: Option<u64>,
    /// Magnification for the centre zoom.
    pub zoom_factor: f64,
}

impl Params {
    pub const DEFAULT_BRIGHTNESS: i16 = 0;
    pub const DEFAULT_THRESHOLD: u8 = 128;
    pub const DEFAULT_NOISE_AMOUNT: f64 = 0.02;
    pub const DEFAULT_ZOOM_FACTOR: f64 = 1.5;

    pub const BRIGHTNESS_RANGE: RangeInclusive<i16> = -100..=100;
    pub const NOISE_AMOUNT_MAX: f64 = 0.1;
    pub const NOISE_AMOUNT_STEP: f64 = 0.01;
    pub const ZOOM_FACTOR_RANGE: RangeInclusive<f64> = 1.0..=3.0;
    pub const ZOOM_FACTOR_STEP: f64 = 0.1;

    /// Check every field against the ranges offered by the UI.
    ///
    /// The operations themselves accept wider inputs; this is for front
    /// ends that take free-form values (CLI flags, JSON).
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] naming the first field out
    /// of range.
    pub fn validate(&self) -> Result<(), OpsError> {
        if !Self::BRIGHTNESS_RANGE.contains(&self.brightness) {
            return Err(OpsError::InvalidParameter(format!(
                "brightness {} is outside {}..={}",
                self.brightness,
                Self::BRIGHTNESS_RANGE.start(),
                Self::BRIGHTNESS_RANGE.end(),
            )));
        }
        if !(0.0..=Self::NOISE_AMOUNT_MAX).contains(&self.noise_amount) {
            return Err(OpsError::InvalidParameter(format!(
                "noise amount {} is outside 0..={}",
                self.noise_amount,
                Self::NOISE_AMOUNT_MAX,
            )));
        }
        if !Self::ZOOM_FACTOR_RANGE.contains(&self.zoom_factor) {
            return Err(OpsError::InvalidParameter(format!(
                "zoom factor {} is outside {}..={}",
                self.zoom_factor,
                Self::ZOOM_FACTOR_RANGE.start(),
                Self::ZOOM_FACTOR_RANGE.end(),
            )));
        }
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            crop: CropBox::full(),
            brightness: Self::DEFAULT_BRIGHTNESS,
            threshold: Self::DEFAULT_THRESHOLD,
            noise_amount: Self::DEFAULT_NOISE_AMOUNT,
            noise_seed: None,
            zoom_factor: Self::DEFAULT_ZOOM_FACTOR,
        }
    }
}
