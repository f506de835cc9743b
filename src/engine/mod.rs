//! Colour and gradient computation.
//!
//! Every function here is pure: no I/O, no shared state, no panics on bad
//! input. Unparsable colours degrade to `None` (parser) or to the raw input
//! string (formatter) so the caller can always render something.

pub mod colour;
pub mod gradient;

pub use colour::{
    format_colour, generate_random_colour, generate_random_colour_with, hex_to_rgb, rgb_to_hsl,
};
pub use gradient::{generate_full_css, generate_gradient_css};
