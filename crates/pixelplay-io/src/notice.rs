//! User-facing messages shown above the result area.

use pixelplay_ops::OpsError;

/// Message shown when crop edges are empty or inverted.
pub const INVALID_CROP_MESSAGE: &str = "Please select valid crop coordinates.";

/// A message for the user, with its severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Recoverable input problem; the user can fix it with the controls.
    Warning(String),
    /// Anything else: unreadable upload, encoder failure.
    Error(String),
}

impl Notice {
    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Warning(m) | Self::Error(m) => m,
        }
    }

    /// Whether this is a warning rather than an error.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::Warning(_))
    }
}

impl From<&OpsError> for Notice {
    fn from(err: &OpsError) -> Self {
        if err.is_warning() {
            Self::Warning(INVALID_CROP_MESSAGE.to_owned())
        } else {
            Self::Error(err.to_string())
        }
    }
}
