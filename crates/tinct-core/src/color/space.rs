//! Color space tags for authored color tokens.

use serde::{Deserialize, Serialize};

/// Identifies the color space a token was authored in.
///
/// The tag records which component family the user last edited; it does not
/// restrict which accessors may be read. Every token answers every accessor,
/// converting on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSpace {
    /// sRGB (red/green/blue components).
    Srgb,
    /// Hue, saturation, brightness (HSV under its picker-facing name).
    Hsb,
    /// Cyan, magenta, yellow, key black.
    Cmyk,
    /// Single white level.
    Grayscale,
}

impl ColorSpace {
    /// Human-readable label for UI menus and status text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Srgb => "sRGB",
            Self::Hsb => "HSB",
            Self::Cmyk => "CMYK",
            Self::Grayscale => "Gray Scale",
        }
    }
}
