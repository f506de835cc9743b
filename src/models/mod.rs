//! Data models for colours and gradient configuration.
//!
//! This module contains the value types passed into the engine.
//! Models are independent of the CLI and of persistence.

pub mod gradient;
pub mod hsl;
pub mod rgb;

// Re-export all model types
pub use gradient::{ColourFormat, Direction, GradientConfig, GradientStyle};
pub use hsl::Hsl;
pub use rgb::RgbColor;
