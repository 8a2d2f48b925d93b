//! Pointwise and per-channel colour operations.
//!
//! Every function here maps each pixel independently and returns a new
//! buffer; the source is never modified.

use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::map::map_pixels;

/// Luminance weights for R, G, B.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2989, 0.5870, 0.1140];

/// Weighted luminance of one RGB pixel, truncated to `u8`.
///
/// Truncation rather than rounding means pure white maps to 254.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn luminance(Rgb([r, g, b]): Rgb<u8>) -> u8 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    let y = wr * f64::from(r) + wg * f64::from(g) + wb * f64::from(b);
    y as u8
}

/// Convert to single-channel grayscale using [`LUMA_WEIGHTS`].
#[must_use]
pub fn grayscale(image: &RgbImage) -> GrayImage {
    map_pixels(image, |p| Luma([luminance(p)]))
}

/// Replace every sample `v` with `255 - v`.
#[must_use]
pub fn invert(image: &RgbImage) -> RgbImage {
    map_pixels(image, |Rgb(c)| Rgb(c.map(|v| 255 - v)))
}

/// The image negative, computed directly over the raw sample buffer.
///
/// Produces exactly the same output as [`invert`].
#[must_use]
pub fn negative(image: &RgbImage) -> RgbImage {
    let mut out = image.clone();
    for sample in out.iter_mut() {
        *sample = u8::MAX - *sample;
    }
    out
}

/// Add `delta` to every sample and clamp to `0..=255`.
#[must_use]
pub fn adjust_brightness(image: &RgbImage, delta: i16) -> RgbImage {
    map_pixels(image, |Rgb(c)| {
        Rgb(c.map(|v| {
            let shifted = (i32::from(v) + i32::from(delta)).clamp(0, 255);
            u8::try_from(shifted).unwrap_or(u8::MAX)
        }))
    })
}

/// Binarize: grayscale values strictly greater than `cutoff` become 255,
/// everything else 0.
#[must_use]
pub fn threshold(image: &RgbImage, cutoff: u8) -> GrayImage {
    map_pixels(image, |p| {
        if luminance(p) > cutoff {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// One of the three colour channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in RGB order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Index of this channel within an RGB pixel.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }

    /// Lowercase name, used as a file-name suffix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Caption used for the split panel.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Red => "Red Channel",
            Self::Green => "Green Channel",
            Self::Blue => "Blue Channel",
        }
    }
}

/// Keep only `channel`, zeroing the other two.
#[must_use]
pub fn isolate_channel(image: &RgbImage, channel: Channel) -> RgbImage {
    let keep = channel.index();
    map_pixels(image, |Rgb(c)| {
        let mut out = [0u8; 3];
        out[keep] = c[keep];
        Rgb(out)
    })
}

/// Split into red, green, and blue images, in that order.
#[must_use]
pub fn split_channels(image: &RgbImage) -> [(Channel, RgbImage); 3] {
    Channel::ALL.map(|ch| (ch, isolate_channel(image, ch)))
}
