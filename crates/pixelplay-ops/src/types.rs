//! Shared types for pixelplay operations.

use serde::{Deserialize, Serialize};

/// Re-export `RgbImage` so downstream crates can hold the decoded
/// source without depending on `image` directly.
pub use image::RgbImage;

/// Re-export `GrayImage` for single-channel results (grayscale,
/// threshold).
pub use image::GrayImage;

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Dimensions of an image buffer.
    #[must_use]
    pub fn of<P: image::Pixel>(image: &image::ImageBuffer<P, Vec<P::Subpixel>>) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }

    /// Total number of pixels (`width * height`).
    #[must_use]
    pub const fn pixel_count(self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// The raster produced by an operation.
///
/// Most operations keep all three channels; grayscale and threshold
/// collapse to one.
#[derive(Debug, Clone, PartialEq)]
pub enum Raster {
    /// Three-channel 8-bit RGB.
    Rgb(RgbImage),
    /// Single-channel 8-bit luminance.
    Gray(GrayImage),
}

impl Raster {
    /// Dimensions of the underlying buffer.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        match self {
            Self::Rgb(img) => Dimensions::of(img),
            Self::Gray(img) => Dimensions::of(img),
        }
    }

    /// Raw sample bytes in row-major order.
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        match self {
            Self::Rgb(img) => img.as_raw(),
            Self::Gray(img) => img.as_raw(),
        }
    }

}

/// One captioned image in a [`Rendering`].
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Caption shown beneath the image.
    pub caption: String,
    /// The image itself.
    pub raster: Raster,
}

impl Panel {
    /// Create a panel from a caption and raster.
    #[must_use]
    pub fn new(caption: impl Into<String>, raster: Raster) -> Self {
        Self {
            caption: caption.into(),
            raster,
        }
    }
}

/// Result of applying one operation: an ordered, non-empty list of
/// panels.
///
/// Every operation yields a single panel except RGB channel split,
/// which yields one panel per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendering {
    panels: Vec<Panel>,
}

impl Rendering {
    /// A rendering with exactly one panel.
    #[must_use]
    pub fn single(caption: impl Into<String>, raster: Raster) -> Self {
        Self {
            panels: vec![Panel::new(caption, raster)],
        }
    }

    /// A rendering with several panels, in display order.
    #[must_use]
    pub fn split(first: Panel, rest: impl IntoIterator<Item = Panel>) -> Self {
        let mut panels = vec![first];
        panels.extend(rest);
        Self { panels }
    }

    /// All panels in display order.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// The first panel. Always present.
    #[must_use]
    pub fn primary(&self) -> &Panel {
        &self.panels[0]
    }

    /// Number of panels (at least one).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.panels.len()
    }

    /// Always `false`; provided for API symmetry with [`Self::len`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

/// Errors that can occur while decoding or transforming an image.
#[derive(Debug, thiserror::Error)]
pub enum OpsError {
    /// The `image` crate could not decode the input bytes.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// No bytes were supplied.
    #[error("input image data is empty")]
    EmptyInput,

    /// Crop bounds are empty, inverted, or outside the image.
    #[error(
        "invalid crop: columns {left}..{right}, rows {top}..{bottom} in a {width}x{height} image"
    )]
    InvalidCrop {
        left: u32,
        right: u32,
        top: u32,
        bottom: u32,
        width: u32,
        height: u32,
    },

    /// A numeric parameter is outside its accepted range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl OpsError {
    /// Whether this error should be shown as a warning rather than a
    /// failure.
    ///
    /// Only an invalid crop qualifies: it is the expected result of
    /// dragging the crop sliders past each other.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::InvalidCrop { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_pixel_count() {
        let dims = Dimensions {
            width: 640,
            height: 480,
        };
        assert_eq!(dims.pixel_count(), 307_200);
    }

    #[test]
    fn dimensions_pixel_count_does_not_overflow_u32() {
        let dims = Dimensions {
            width: u32::MAX,
            height: 2,
        };
        assert_eq!(dims.pixel_count(), u64::from(u32::MAX) * 2);
    }

    #[test]
    fn raster_dimensions() {
        let rgb = Raster::Rgb(RgbImage::new(3, 5));
        let gray = Raster::Gray(GrayImage::new(7, 2));
        assert_eq!(
            rgb.dimensions(),
            Dimensions {
                width: 3,
                height: 5
            }
        );
        assert_eq!(
            gray.dimensions(),
            Dimensions {
                width: 7,
                height: 2
            }
        );
        assert_eq!(rgb.as_raw().len(), 3 * 5 * 3);
        assert_eq!(gray.as_raw().len(), 7 * 2);
    }

    #[test]
    fn rendering_split_keeps_order() {
        let panel = |c: &str| Panel::new(c, Raster::Gray(GrayImage::new(1, 1)));
        let r = Rendering::split(panel("a"), [panel("b"), panel("c")]);
        let captions: Vec<_> = r.panels().iter().map(|p| p.caption.as_str()).collect();
        assert_eq!(captions, ["a", "b", "c"]);
        assert_eq!(r.primary().caption, "a");
    }

    #[test]
    fn rendering_single_has_one_panel() {
        let r = Rendering::single("caption", Raster::Gray(GrayImage::new(1, 1)));
        assert_eq!(r.len(), 1);
        assert!(!r.is_empty());
        assert_eq!(r.primary().caption, "caption");
    }

    #[test]
    fn error_display() {
        assert_eq!(
            OpsError::EmptyInput.to_string(),
            "input image data is empty"
        );
        assert_eq!(
            OpsError::InvalidParameter("zoom factor must be at least 1.0".into()).to_string(),
            "invalid parameter: zoom factor must be at least 1.0",
        );
        let crop = OpsError::InvalidCrop {
            left: 5,
            right: 5,
            top: 0,
            bottom: 10,
            width: 10,
            height: 10,
        };
        assert_eq!(
            crop.to_string(),
            "invalid crop: columns 5..5, rows 0..10 in a 10x10 image",
        );
    }

    #[test]
    fn only_invalid_crop_is_a_warning() {
        let crop = OpsError::InvalidCrop {
            left: 1,
            right: 0,
            top: 0,
            bottom: 1,
            width: 1,
            height: 1,
        };
        assert!(crop.is_warning());
        assert!(!OpsError::EmptyInput.is_warning());
        assert!(!OpsError::InvalidParameter("x".into()).is_warning());
    }
}
