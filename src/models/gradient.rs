//! Gradient configuration value types.
//!
//! A [`GradientConfig`] fully determines the CSS text the engine produces:
//! two colours, a style, a compass direction and an output colour notation.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_COLOUR1, DEFAULT_COLOUR2};

/// CSS gradient function to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GradientStyle {
    /// `linear-gradient(...)`
    #[default]
    Linear,
    /// `radial-gradient(circle ...)`
    Radial,
    /// `conic-gradient(from ...)`
    Conic,
}

impl GradientStyle {
    /// Returns all styles in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Linear, Self::Radial, Self::Conic]
    }

    /// Lowercase name used in CSS, share links and config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Radial => "radial",
            Self::Conic => "conic",
        }
    }

    /// Parses a style name, falling back to [`GradientStyle::Linear`] for
    /// anything unrecognised.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for GradientStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradientStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!("Invalid gradient style '{s}'. Must be 'linear', 'radial', or 'conic'")
            })
    }
}

/// Output notation for colours. Never changes the colour value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColourFormat {
    /// `#RRGGBB`
    #[default]
    Hex,
    /// `rgba(R, G, B, 1)`
    Rgba,
    /// `hsla(H, S%, L%, 1)`
    Hsla,
}

impl ColourFormat {
    /// Returns all formats in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Hex, Self::Rgba, Self::Hsla]
    }

    /// Lowercase name used in share links and config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgba => "rgba",
            Self::Hsla => "hsla",
        }
    }
}

impl fmt::Display for ColourFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColourFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!("Invalid colour format '{s}'. Must be 'hex', 'rgba', or 'hsla'")
            })
    }
}

/// One of the eight compass points.
///
/// Linear and conic gradients use [`Direction::degrees`]; radial and conic
/// gradients use [`Direction::radial_position`].
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North (0deg, top centre)
    N,
    /// North-east (45deg, top right)
    NE,
    /// East (90deg, right centre)
    E,
    /// South-east (135deg, bottom right)
    SE,
    /// South (180deg, bottom centre)
    S,
    /// South-west (225deg, bottom left)
    SW,
    /// West (270deg, left centre)
    W,
    /// North-west (315deg, top left)
    NW,
}

impl Direction {
    /// Returns all directions clockwise from north.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::N,
            Self::NE,
            Self::E,
            Self::SE,
            Self::S,
            Self::SW,
            Self::W,
            Self::NW,
        ]
    }

    /// Compass abbreviation used in share links and config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }

    /// Angle in degrees for `linear-gradient` and `conic-gradient`.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::N => 0,
            Self::NE => 45,
            Self::E => 90,
            Self::SE => 135,
            Self::S => 180,
            Self::SW => 225,
            Self::W => 270,
            Self::NW => 315,
        }
    }

    /// `at <x> <y>` position keyword pair for radial and conic gradients.
    #[must_use]
    pub const fn radial_position(self) -> &'static str {
        match self {
            Self::N => "at center top",
            Self::NE => "at right top",
            Self::E => "at right center",
            Self::SE => "at right bottom",
            Self::S => "at center bottom",
            Self::SW => "at left bottom",
            Self::W => "at left center",
            Self::NW => "at left top",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|dir| dir.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid direction '{s}'. Must be one of N, NE, E, SE, S, SW, W, NW"
                )
            })
    }
}

/// Everything needed to produce a gradient's CSS text.
///
/// Colours are kept as the caller supplied them so that malformed input
/// reaches the formatter, which passes it through instead of failing.
///
/// Fields missing from stored data take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    /// First colour stop (e.g., "#6366F1")
    pub colour1: String,
    /// Second colour stop
    pub colour2: String,
    /// Gradient function
    pub style: GradientStyle,
    /// Notation for both colours in the output
    pub format: ColourFormat,
    /// Angle / position
    pub direction: Direction,
}

impl GradientConfig {
    /// Creates a config from its parts.
    #[must_use]
    pub fn new(
        colour1: impl Into<String>,
        colour2: impl Into<String>,
        style: GradientStyle,
        format: ColourFormat,
        direction: Direction,
    ) -> Self {
        Self {
            colour1: colour1.into(),
            colour2: colour2.into(),
            style,
            format,
            direction,
        }
    }
}

impl Default for GradientConfig {
    /// Indigo to cyan, linear, hex, towards the bottom right.
    fn default() -> Self {
        Self::new(
            DEFAULT_COLOUR1,
            DEFAULT_COLOUR2,
            GradientStyle::Linear,
            ColourFormat::Hex,
            Direction::SE,
        )
    }
}
