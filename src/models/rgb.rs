//! RGB color handling with hex parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::Hsl;

/// Strict `#RRGGBB` / `RRGGBB` pattern, case-insensitive.
static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})$").expect("hex pattern is valid")
});

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from exactly six hex digits with an optional `#`.
    ///
    /// Any other length, stray whitespace or non-hex character yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradient_lab::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::parse("#6366f1"), Some(RgbColor::new(99, 102, 241)));
    /// assert_eq!(RgbColor::parse("06B6D4"), Some(RgbColor::new(6, 182, 212)));
    /// assert_eq!(RgbColor::parse("#FFF"), None);
    /// ```
    #[must_use]
    pub fn parse(hex: &str) -> Option<Self> {
        let caps = HEX_PATTERN.captures(hex)?;
        let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
        Some(Self::new(channel(1)?, channel(2)?, channel(3)?))
    }

    /// Parses an `RgbColor` from user input, reporting why it was rejected.
    ///
    /// Surrounding whitespace is ignored; otherwise the rules match [`RgbColor::parse`].
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex.trim();
        Self::parse(trimmed).ok_or_else(|| {
            anyhow::anyhow!("Invalid hex colour '{trimmed}'. Expected 6 hex digits (#RRGGBB)")
        })
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use gradient_lab::models::RgbColor;
    ///
    /// let color = RgbColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#FF0000");
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to HSL with integer degrees and percentages.
    ///
    /// Hue lies in `0..360`, saturation and lightness in `0..=100`. Grays
    /// (all channels equal) report hue and saturation 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradient_lab::models::{Hsl, RgbColor};
    ///
    /// let indigo = RgbColor::new(99, 102, 241);
    /// assert_eq!(indigo.to_hsl(), Hsl::new(239, 84, 67));
    /// ```
    #[must_use]
    pub fn to_hsl(&self) -> Hsl {
        let max_channel = self.r.max(self.g).max(self.b);
        let min_channel = self.r.min(self.g).min(self.b);

        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = f64::from(max_channel) / 255.0;
        let min = f64::from(min_channel) / 255.0;

        let l = (max + min) / 2.0;

        let (h, s) = if max_channel == min_channel {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };

            // Ties resolve red first, then green, matching the channel order.
            let h = if self.r == max_channel {
                (g - b) / d + if self.g < self.b { 6.0 } else { 0.0 }
            } else if self.g == max_channel {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };

            (h / 6.0, s)
        };

        // Near-red hues can round up to a full turn.
        let hue = (h * 360.0).round() as u16 % 360;

        Hsl::new(hue, (s * 100.0).round() as u8, (l * 100.0).round() as u8)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}
