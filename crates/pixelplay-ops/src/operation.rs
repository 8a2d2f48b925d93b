//! The closed set of transformations a user can pick.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fifteen selectable transformations, in menu order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// Show the decoded source unchanged.
    #[default]
    Original,
    /// Weighted luminance conversion.
    Grayscale,
    /// Three images, one per RGB channel.
    ChannelSplit,
    /// `255 - v` on every sample.
    Invert,
    /// Rectangular sub-image.
    Crop,
    /// Add a constant and clamp.
    Brightness,
    /// Mirror left to right.
    FlipHorizontal,
    /// Mirror top to bottom.
    FlipVertical,
    /// Quarter turn clockwise.
    #[serde(rename = "rotate-90")]
    Rotate90,
    /// Half turn.
    #[serde(rename = "rotate-180")]
    Rotate180,
    /// Three quarter turns clockwise.
    #[serde(rename = "rotate-270")]
    Rotate270,
    /// Grayscale, then binarize at a cutoff.
    Threshold,
    /// Random white and black pixels.
    SaltAndPepper,
    /// Centre crop resized back to full size.
    Zoom,
    /// Same result as [`Operation::Invert`], computed per byte.
    Negative,
}

impl Operation {
    /// All operations in menu order.
    pub const ALL: [Self; 15] = [
        Self::Original,
        Self::Grayscale,
        Self::ChannelSplit,
        Self::Invert,
        Self::Crop,
        Self::Brightness,
        Self::FlipHorizontal,
        Self::FlipVertical,
        Self::Rotate90,
        Self::Rotate180,
        Self::Rotate270,
        Self::Threshold,
        Self::SaltAndPepper,
        Self::Zoom,
        Self::Negative,
    ];

    /// Menu label shown in the operation selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Original => "Original Image",
            Self::Grayscale => "Convert to Grayscale",
            Self::ChannelSplit => "RGB Channel Split",
            Self::Invert => "Invert Colors",
            Self::Crop => "Crop Image",
            Self::Brightness => "Adjust Brightness",
            Self::FlipHorizontal => "Horizontal Flip",
            Self::FlipVertical => "Vertical Flip",
            Self::Rotate90 => "Rotate 90° Clockwise",
            Self::Rotate180 => "Rotate 180°",
            Self::Rotate270 => "Rotate 270° Clockwise",
            Self::Threshold => "Thresholding (Binarize)",
            Self::SaltAndPepper => "Add Noise (Salt & Pepper)",
            Self::Zoom => "Image Zoom",
            Self::Negative => "Image Negative (Manual Invert)",
        }
    }

    /// Stable machine name, used for CLI arguments, `<option>` values,
    /// and output file names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Grayscale => "grayscale",
            Self::ChannelSplit => "channel-split",
            Self::Invert => "invert",
            Self::Crop => "crop",
            Self::Brightness => "brightness",
            Self::FlipHorizontal => "flip-horizontal",
            Self::FlipVertical => "flip-vertical",
            Self::Rotate90 => "rotate-90",
            Self::Rotate180 => "rotate-180",
            Self::Rotate270 => "rotate-270",
            Self::Threshold => "threshold",
            Self::SaltAndPepper => "salt-and-pepper",
            Self::Zoom => "zoom",
            Self::Negative => "negative",
        }
    }

    /// Look up an operation by its [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Whether the operation reads anything from [`Params`](crate::Params).
    #[must_use]
    pub const fn has_parameters(self) -> bool {
        matches!(
            self,
            Self::Crop | Self::Brightness | Self::Threshold | Self::SaltAndPepper | Self::Zoom
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when parsing an unknown operation name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0:?}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownOperation(s.to_owned()))
    }
}
