//! Hex parsing, HSL conversion, colour notation and random colours.

use rand::Rng;

use crate::models::{ColourFormat, Hsl, RgbColor};

/// Symbols a random colour is drawn from.
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Parses `#RRGGBB` or `RRGGBB` (any case) into channels.
///
/// Returns `None` for any other length or a non-hex character.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<RgbColor> {
    RgbColor::parse(hex)
}

/// Converts 8-bit channels to HSL rounded to whole degrees and percentages.
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    RgbColor::new(r, g, b).to_hsl()
}

/// Renders a colour in the requested notation.
///
/// `Hex` uppercases the input without validating it. `Rgba` and `Hsla`
/// return the input unchanged when it does not parse.
///
/// # Examples
///
/// ```
/// use gradient_lab::engine::format_colour;
/// use gradient_lab::models::ColourFormat;
///
/// assert_eq!(format_colour("#6366f1", ColourFormat::Hex), "#6366F1");
/// assert_eq!(format_colour("#6366F1", ColourFormat::Rgba), "rgba(99, 102, 241, 1)");
/// assert_eq!(format_colour("#6366F1", ColourFormat::Hsla), "hsla(239, 84%, 67%, 1)");
/// assert_eq!(format_colour("not-a-colour", ColourFormat::Rgba), "not-a-colour");
/// ```
#[must_use]
pub fn format_colour(hex: &str, format: ColourFormat) -> String {
    if format == ColourFormat::Hex {
        return hex.to_uppercase();
    }

    let Some(rgb) = hex_to_rgb(hex) else {
        return hex.to_string();
    };

    match format {
        ColourFormat::Rgba => format!("rgba({}, {}, {}, 1)", rgb.r, rgb.g, rgb.b),
        ColourFormat::Hsla => {
            let hsl = rgb.to_hsl();
            format!("hsla({}, {}%, {}%, 1)", hsl.h, hsl.s, hsl.l)
        }
        ColourFormat::Hex => hex.to_uppercase(),
    }
}

/// Returns a uniformly random `#RRGGBB` colour using the thread-local RNG.
#[must_use]
pub fn generate_random_colour() -> String {
    generate_random_colour_with(&mut rand::thread_rng())
}

/// Returns a random `#RRGGBB` colour, sampling each of the six digits
/// independently from `rng`.
pub fn generate_random_colour_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut colour = String::with_capacity(7);
    colour.push('#');
    for _ in 0..6 {
        colour.push(char::from(HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())]));
    }
    colour
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_upper_hex_colour(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..].bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
    }

    #[test]
    fn test_hex_to_rgb_reencodes_to_same_digits() {
        for hex in ["#000000", "#FFFFFF", "#6366f1", "06B6D4", "#a1B2c3"] {
            let rgb = hex_to_rgb(hex).unwrap();
            let digits = hex.trim_start_matches('#');
            assert_eq!(&rgb.to_hex()[1..], digits.to_uppercase());
        }
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed() {
        assert_eq!(hex_to_rgb("not-a-colour"), None);
        assert_eq!(hex_to_rgb("#12345"), None);
        assert_eq!(hex_to_rgb("#1234567"), None);
        assert_eq!(hex_to_rgb("#12345G"), None);
    }

    #[test]
    fn test_rgb_to_hsl() {
        assert_eq!(rgb_to_hsl(99, 102, 241), Hsl::new(239, 84, 67));
        assert_eq!(rgb_to_hsl(0, 0, 0), Hsl::new(0, 0, 0));
        assert_eq!(rgb_to_hsl(255, 128, 0), Hsl::new(30, 100, 50));
    }

    #[test]
    fn test_format_colour_hex_uppercases_without_validation() {
        assert_eq!(format_colour("#6366F1", ColourFormat::Hex), "#6366F1");
        assert_eq!(format_colour("6366f1", ColourFormat::Hex), "6366F1");
        assert_eq!(format_colour("not-a-colour", ColourFormat::Hex), "NOT-A-COLOUR");
    }

    #[test]
    fn test_format_colour_rgba() {
        assert_eq!(format_colour("#6366F1", ColourFormat::Rgba), "rgba(99, 102, 241, 1)");
        assert_eq!(format_colour("#000000", ColourFormat::Rgba), "rgba(0, 0, 0, 1)");
    }

    #[test]
    fn test_format_colour_hsla() {
        assert_eq!(format_colour("#6366F1", ColourFormat::Hsla), "hsla(239, 84%, 67%, 1)");
        assert_eq!(format_colour("#FFFFFF", ColourFormat::Hsla), "hsla(0, 0%, 100%, 1)");
    }

    #[test]
    fn test_format_colour_falls_back_to_input() {
        assert_eq!(format_colour("not-a-colour", ColourFormat::Rgba), "not-a-colour");
        assert_eq!(format_colour("#abc", ColourFormat::Hsla), "#abc");
    }

    #[test]
    fn test_random_colour_shape() {
        for _ in 0..200 {
            let colour = generate_random_colour();
            assert!(is_upper_hex_colour(&colour), "unexpected colour {colour}");
        }
    }

    #[test]
    fn test_random_colour_seeded_is_reproducible() {
        let a = generate_random_colour_with(&mut StdRng::seed_from_u64(7));
        let b = generate_random_colour_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(is_upper_hex_colour(&a));
    }

    #[test]
    fn test_random_colour_uses_every_digit() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 16];
        for _ in 0..500 {
            for b in generate_random_colour_with(&mut rng)[1..].bytes() {
                let idx = HEX_DIGITS.iter().position(|d| *d == b).unwrap();
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
