//! Gradient CSS assembly.

use crate::engine::format_colour;
use crate::models::{GradientConfig, GradientStyle};

/// Builds the CSS gradient function for `config`.
///
/// Conic gradients repeat the first colour as a final stop so the sweep
/// closes without a seam.
///
/// # Examples
///
/// ```
/// use gradient_lab::engine::generate_gradient_css;
/// use gradient_lab::models::{ColourFormat, Direction, GradientConfig, GradientStyle};
///
/// let config = GradientConfig::new(
///     "#000000",
///     "#FFFFFF",
///     GradientStyle::Linear,
///     ColourFormat::Hex,
///     Direction::N,
/// );
/// assert_eq!(generate_gradient_css(&config), "linear-gradient(0deg, #000000, #FFFFFF)");
/// ```
#[must_use]
pub fn generate_gradient_css(config: &GradientConfig) -> String {
    let c1 = format_colour(&config.colour1, config.format);
    let c2 = format_colour(&config.colour2, config.format);
    let degrees = config.direction.degrees();
    let position = config.direction.radial_position();

    match config.style {
        GradientStyle::Linear => format!("linear-gradient({degrees}deg, {c1}, {c2})"),
        GradientStyle::Radial => format!("radial-gradient(circle {position}, {c1}, {c2})"),
        GradientStyle::Conic => {
            format!("conic-gradient(from {degrees}deg {position}, {c1}, {c2}, {c1})")
        }
    }
}

/// Wraps the gradient in a complete `background` declaration.
#[must_use]
pub fn generate_full_css(config: &GradientConfig) -> String {
    format!("background: {};", generate_gradient_css(config))
}
