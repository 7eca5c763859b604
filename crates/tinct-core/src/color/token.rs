//! The immutable multi-space color value.
//!
//! A `ColorToken` is authored in one color space (RGB, HSB, CMYK, or
//! grayscale) but answers accessors for every space, converting on read.
//! RGB↔HSB goes through `palette`; CMYK and the white level use the
//! standard naive mappings:
//!
//! ```text
//!   k = 1 − max(r, g, b)
//!   c = (1 − r − k) / (1 − k)      (0 when k = 1)
//!   r = (1 − c) × (1 − k)
//! ```
//!
//! Tokens are plain values: every edit returns a new token. Equality is by
//! value; identity for selection purposes lives on gradient stops, not here.

use std::fmt;

use palette::{FromColor, Hsv, Srgb, SrgbLuma};
use serde::{Deserialize, Serialize};

use crate::color::space::ColorSpace;
use crate::error::ColorParseError;

/// An immutable color, stored canonically as straight-alpha sRGB with a tag
/// recording the space it was authored in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorToken {
    space: ColorSpace,
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl ColorToken {
    /// Opaque sRGB color. Components are clamped to [0, 1].
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// sRGB color with alpha. Components are clamped to [0, 1].
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            space: ColorSpace::Srgb,
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Hue/saturation/brightness color. All components in [0, 1]; hue wraps
    /// the full circle (1.0 = 360°).
    pub fn hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self::hsba(hue, saturation, brightness, 1.0)
    }

    /// HSB color with alpha.
    pub fn hsba(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        let hsv: Hsv = Hsv::new(
            hue.clamp(0.0, 1.0) * 360.0,
            saturation.clamp(0.0, 1.0),
            brightness.clamp(0.0, 1.0),
        );
        let rgb = Srgb::from_color(hsv);
        Self {
            space: ColorSpace::Hsb,
            r: rgb.red,
            g: rgb.green,
            b: rgb.blue,
            a: alpha.clamp(0.0, 1.0),
        }
    }

    /// Cyan/magenta/yellow/key-black color, all components in [0, 1].
    pub fn cmyk(cyan: f32, magenta: f32, yellow: f32, key_black: f32) -> Self {
        let c = cyan.clamp(0.0, 1.0);
        let m = magenta.clamp(0.0, 1.0);
        let y = yellow.clamp(0.0, 1.0);
        let k = key_black.clamp(0.0, 1.0);
        Self {
            space: ColorSpace::Cmyk,
            r: (1.0 - c) * (1.0 - k),
            g: (1.0 - m) * (1.0 - k),
            b: (1.0 - y) * (1.0 - k),
            a: 1.0,
        }
    }

    /// Achromatic color at the given white level in [0, 1].
    pub fn white(level: f32) -> Self {
        let w = level.clamp(0.0, 1.0);
        Self {
            space: ColorSpace::Grayscale,
            r: w,
            g: w,
            b: w,
            a: 1.0,
        }
    }

    /// The space this token was authored (or last edited) in.
    pub const fn space(&self) -> ColorSpace {
        self.space
    }

    // ── sRGB accessors ──────────────────────────────────────────

    pub const fn red(&self) -> f32 {
        self.r
    }

    pub const fn green(&self) -> f32 {
        self.g
    }

    pub const fn blue(&self) -> f32 {
        self.b
    }

    pub const fn alpha(&self) -> f32 {
        self.a
    }

    // ── HSB accessors ───────────────────────────────────────────

    /// Hue in [0, 1). Achromatic colors report 0.
    pub fn hue(&self) -> f32 {
        self.as_hsv().hue.into_positive_degrees() / 360.0
    }

    /// HSV saturation in [0, 1].
    pub fn saturation(&self) -> f32 {
        self.as_hsv().saturation
    }

    /// HSV value, named "brightness" to match the picker surface.
    pub fn brightness(&self) -> f32 {
        self.as_hsv().value
    }

    // ── CMYK accessors ──────────────────────────────────────────

    pub fn cyan(&self) -> f32 {
        self.cmyk_components()[0]
    }

    pub fn magenta(&self) -> f32 {
        self.cmyk_components()[1]
    }

    pub fn yellow(&self) -> f32 {
        self.cmyk_components()[2]
    }

    pub fn key_black(&self) -> f32 {
        self.cmyk_components()[3]
    }

    // ── Grayscale accessor ──────────────────────────────────────

    /// Perceptual white level: the sRGB-encoded relative luminance.
    ///
    /// For tokens built with [`ColorToken::white`] this round-trips the
    /// authored level exactly.
    pub fn white_level(&self) -> f32 {
        SrgbLuma::from_color(self.as_srgb()).luma
    }

    // ── Immutable updates ───────────────────────────────────────
    //
    // Each returns a new token; the authored-space tag follows the
    // component family being edited.

    pub fn with_red(&self, red: f32) -> Self {
        Self::rgba(red, self.g, self.b, self.a)
    }

    pub fn with_green(&self, green: f32) -> Self {
        Self::rgba(self.r, green, self.b, self.a)
    }

    pub fn with_blue(&self, blue: f32) -> Self {
        Self::rgba(self.r, self.g, blue, self.a)
    }

    pub fn with_hue(&self, hue: f32) -> Self {
        Self::hsba(hue, self.saturation(), self.brightness(), self.a)
    }

    pub fn with_saturation(&self, saturation: f32) -> Self {
        Self::hsba(self.hue(), saturation, self.brightness(), self.a)
    }

    pub fn with_brightness(&self, brightness: f32) -> Self {
        Self::hsba(self.hue(), self.saturation(), brightness, self.a)
    }

    pub fn with_cyan(&self, cyan: f32) -> Self {
        let [_, m, y, k] = self.cmyk_components();
        Self {
            a: self.a,
            ..Self::cmyk(cyan, m, y, k)
        }
    }

    pub fn with_magenta(&self, magenta: f32) -> Self {
        let [c, _, y, k] = self.cmyk_components();
        Self {
            a: self.a,
            ..Self::cmyk(c, magenta, y, k)
        }
    }

    pub fn with_yellow(&self, yellow: f32) -> Self {
        let [c, m, _, k] = self.cmyk_components();
        Self {
            a: self.a,
            ..Self::cmyk(c, m, yellow, k)
        }
    }

    pub fn with_key_black(&self, key_black: f32) -> Self {
        let [c, m, y, _] = self.cmyk_components();
        Self {
            a: self.a,
            ..Self::cmyk(c, m, y, key_black)
        }
    }

    pub fn with_white_level(&self, level: f32) -> Self {
        Self {
            a: self.a,
            ..Self::white(level)
        }
    }

    /// Same color, different alpha. Keeps the authored-space tag.
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    // ── Text representations ────────────────────────────────────

    /// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional, case
    /// insensitive) into an sRGB-tagged token.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        // Byte-range slicing below is only safe on ASCII input; anything
        // else must fail as a parse error, not a char-boundary panic.
        if !hex.is_ascii() {
            return Err(ColorParseError::NonAscii);
        }
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::HexLength(hex.len()));
        }
        let byte = |range: std::ops::Range<usize>, component| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|source| ColorParseError::HexDigit { component, source })
        };
        let r = byte(0..2, "red")?;
        let g = byte(2..4, "green")?;
        let b = byte(4..6, "blue")?;
        let a = if hex.len() == 8 { byte(6..8, "alpha")? } else { 255 };
        Ok(Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ))
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when the token is translucent.
    /// Components are quantized to 8 bits with rounding.
    pub fn to_hex(&self) -> String {
        let q = |v: f32| (v * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                q(self.r),
                q(self.g),
                q(self.b),
                q(self.a)
            )
        } else {
            format!("#{:02x}{:02x}{:02x}", q(self.r), q(self.g), q(self.b))
        }
    }

    // ── Conversion plumbing ─────────────────────────────────────

    fn as_srgb(&self) -> Srgb<f32> {
        Srgb::new(self.r, self.g, self.b)
    }

    fn as_hsv(&self) -> Hsv {
        Hsv::from_color(self.as_srgb())
    }

    fn cmyk_components(&self) -> [f32; 4] {
        let k = 1.0 - self.r.max(self.g).max(self.b);
        if k >= 1.0 {
            return [0.0, 0.0, 0.0, 1.0];
        }
        let inv = 1.0 - k;
        [
            (1.0 - self.r - k) / inv,
            (1.0 - self.g - k) / inv,
            (1.0 - self.b - k) / inv,
            k,
        ]
    }
}

impl Default for ColorToken {
    /// Opaque white.
    fn default() -> Self {
        Self::white(1.0)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_rgb_constructor_clamps_components() {
        let c = ColorToken::rgb(1.5, -0.3, 0.5);
        assert_eq!(c.red(), 1.0);
        assert_eq!(c.green(), 0.0);
        assert_eq!(c.blue(), 0.5);
        assert_eq!(c.alpha(), 1.0);
        assert_eq!(c.space(), ColorSpace::Srgb);
    }

    #[test]
    fn test_hsb_round_trips_through_rgb() {
        let c = ColorToken::hsb(0.3, 0.5, 0.5);
        assert!((c.hue() - 0.3).abs() < EPSILON, "hue: {}", c.hue());
        assert!((c.saturation() - 0.5).abs() < EPSILON);
        assert!((c.brightness() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_pure_red_has_hue_zero_full_saturation() {
        let c = ColorToken::rgb(1.0, 0.0, 0.0);
        assert!(c.hue().abs() < EPSILON);
        assert!((c.saturation() - 1.0).abs() < EPSILON);
        assert!((c.brightness() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_cmyk_round_trips() {
        let c = ColorToken::cmyk(0.5, 0.25, 0.0, 0.2);
        assert!((c.cyan() - 0.5).abs() < EPSILON);
        assert!((c.magenta() - 0.25).abs() < EPSILON);
        assert!(c.yellow().abs() < EPSILON);
        assert!((c.key_black() - 0.2).abs() < EPSILON);
    }

    #[test]
    fn test_black_reports_full_key_and_zero_cmy() {
        let c = ColorToken::rgb(0.0, 0.0, 0.0);
        assert_eq!(c.cyan(), 0.0);
        assert_eq!(c.magenta(), 0.0);
        assert_eq!(c.yellow(), 0.0);
        assert_eq!(c.key_black(), 1.0);
    }

    #[test]
    fn test_white_level_round_trips_for_gray() {
        let c = ColorToken::white(0.3);
        assert!(
            (c.white_level() - 0.3).abs() < EPSILON,
            "level: {}",
            c.white_level()
        );
    }

    #[test]
    fn test_update_preserves_other_components() {
        let c = ColorToken::rgb(0.2, 0.5, 0.8).with_green(0.1);
        assert!((c.red() - 0.2).abs() < EPSILON);
        assert!((c.green() - 0.1).abs() < EPSILON);
        assert!((c.blue() - 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_cmyk_and_white_updates_preserve_alpha() {
        let c = ColorToken::rgba(0.5, 0.5, 0.5, 0.5);
        assert_eq!(c.with_cyan(0.2).alpha(), 0.5);
        assert_eq!(c.with_magenta(0.2).alpha(), 0.5);
        assert_eq!(c.with_yellow(0.2).alpha(), 0.5);
        assert_eq!(c.with_key_black(0.2).alpha(), 0.5);
        assert_eq!(c.with_white_level(0.3).alpha(), 0.5);
    }

    #[test]
    fn test_update_retags_authored_space() {
        let c = ColorToken::rgb(0.2, 0.5, 0.8);
        assert_eq!(c.space(), ColorSpace::Srgb);
        assert_eq!(c.with_hue(0.5).space(), ColorSpace::Hsb);
        assert_eq!(c.with_cyan(0.5).space(), ColorSpace::Cmyk);
        assert_eq!(c.with_alpha(0.5).space(), ColorSpace::Srgb);
    }

    #[test]
    fn test_hex_formats_opaque_without_alpha_digits() {
        assert_eq!(ColorToken::rgb(1.0, 0.0, 0.0).to_hex(), "#ff0000");
        assert_eq!(
            ColorToken::rgba(1.0, 0.0, 0.0, 0.5).to_hex(),
            "#ff000080"
        );
    }

    #[test]
    fn test_hex_parses_with_and_without_hash() {
        let c = ColorToken::from_hex("#3f5efb").unwrap();
        assert!((c.red() - 63.0 / 255.0).abs() < EPSILON);
        assert!((c.green() - 94.0 / 255.0).abs() < EPSILON);
        assert!((c.blue() - 251.0 / 255.0).abs() < EPSILON);
        assert!(ColorToken::from_hex("3f5efb").is_ok());
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert!(matches!(
            ColorToken::from_hex("#12345"),
            Err(ColorParseError::HexLength(5))
        ));
        assert!(matches!(
            ColorToken::from_hex("zzzzzz"),
            Err(ColorParseError::HexDigit { component: "red", .. })
        ));
    }

    #[test]
    fn test_hex_rejects_non_ascii_without_panicking() {
        // Six BYTES but not six ASCII digits; slicing this by byte range
        // would split a char boundary.
        assert!(matches!(
            ColorToken::from_hex("a\u{e9}\u{e9}a"),
            Err(ColorParseError::NonAscii)
        ));
        assert!(matches!(
            ColorToken::from_hex("#a\u{e9}\u{e9}a"),
            Err(ColorParseError::NonAscii)
        ));
    }

    #[test]
    fn test_hex_round_trip() {
        let c = ColorToken::from_hex("#fc466b").unwrap();
        assert_eq!(c.to_hex(), "#fc466b");
    }

    #[test]
    fn test_serde_round_trip() {
        let c = ColorToken::hsba(0.3, 0.5, 0.5, 0.75);
        let json = serde_json::to_string(&c).unwrap();
        let back: ColorToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
