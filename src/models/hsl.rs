//! HSL color triple with whole-number components.

use serde::{Deserialize, Serialize};

/// A color in HSL space, rounded to whole degrees and percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees (0-359)
    pub h: u16,
    /// Saturation percentage (0-100)
    pub s: u8,
    /// Lightness percentage (0-100)
    pub l: u8,
}

impl Hsl {
    /// Creates a new `Hsl` from its components.
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}
