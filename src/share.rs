//! Share links: a gradient config carried in a URL query string.
//!
//! Parameters are `c1`, `c2`, `style`, `dir` and `format`. Colours travel as
//! bare hex digits because `#` would start a URL fragment.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::models::{ColourFormat, Direction, GradientConfig, GradientStyle};

/// Page a share link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SharePage {
    /// The generator (`/`)
    #[default]
    Generator,
    /// The showcase (`/showcase`)
    Showcase,
}

impl SharePage {
    /// URL path of the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Generator => "/",
            Self::Showcase => "/showcase",
        }
    }
}

impl fmt::Display for SharePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generator => f.write_str("generator"),
            Self::Showcase => f.write_str("showcase"),
        }
    }
}

impl FromStr for SharePage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "generator" | "index" | "/" => Ok(Self::Generator),
            "showcase" | "/showcase" => Ok(Self::Showcase),
            _ => anyhow::bail!("Invalid page '{s}'. Must be 'generator' or 'showcase'"),
        }
    }
}

/// Encodes `config` as `c1=..&c2=..&style=..&dir=..&format=..`.
///
/// # Examples
///
/// ```
/// use gradient_lab::models::GradientConfig;
/// use gradient_lab::share::encode_query;
///
/// assert_eq!(
///     encode_query(&GradientConfig::default()),
///     "c1=6366F1&c2=06B6D4&style=linear&dir=SE&format=hex"
/// );
/// ```
#[must_use]
pub fn encode_query(config: &GradientConfig) -> String {
    format!(
        "c1={}&c2={}&style={}&dir={}&format={}",
        bare_hex(&config.colour1),
        bare_hex(&config.colour2),
        config.style,
        config.direction,
        config.format,
    )
}

/// Builds a root-relative link to `page` carrying `config`.
#[must_use]
pub fn share_link(config: &GradientConfig, page: SharePage) -> String {
    let path = page.path();
    format!("{path}?{}", encode_query(config))
}

/// Applies the parameters found in `query` on top of `base`.
///
/// `query` may be a bare query string, start with `?`, or be a whole link
/// such as `/showcase?c1=...#top`. Missing or empty parameters keep the base
/// value, and only the first occurrence of a repeated parameter counts. An
/// unknown style becomes linear; an unknown direction or format keeps the
/// base value.
#[must_use]
pub fn decode_query(query: &str, base: GradientConfig) -> GradientConfig {
    let query = query.split_once('#').map_or(query, |(q, _)| q);
    let query = query.split_once('?').map_or(query, |(_, q)| q);
    let mut config = base;
    let mut seen = HashSet::new();

    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = value.trim();
        if !seen.insert(key) || value.is_empty() {
            continue;
        }

        match key {
            "c1" => config.colour1 = with_hash(value),
            "c2" => config.colour2 = with_hash(value),
            "style" => {
                config.style = GradientStyle::parse_lenient(value);
                if !config.style.as_str().eq_ignore_ascii_case(value) {
                    warn!(style = value, "unknown gradient style in share link, using linear");
                }
            }
            "dir" => match value.parse::<Direction>() {
                Ok(dir) => config.direction = dir,
                Err(e) => warn!("ignoring share link direction: {e}"),
            },
            "format" => match value.parse::<ColourFormat>() {
                Ok(format) => config.format = format,
                Err(e) => warn!("ignoring share link format: {e}"),
            },
            _ => {}
        }
    }

    config
}

fn bare_hex(colour: &str) -> &str {
    colour.strip_prefix('#').unwrap_or(colour)
}

fn with_hash(value: &str) -> String {
    let digits = value.strip_prefix("%23").unwrap_or(value);
    format!("#{digits}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GradientConfig {
        GradientConfig::new(
            "#FF0080",
            "#00FF80",
            GradientStyle::Conic,
            ColourFormat::Hsla,
            Direction::NW,
        )
    }

    #[test]
    fn test_encode_strips_hash() {
        let query = encode_query(&sample());
        assert_eq!(query, "c1=FF0080&c2=00FF80&style=conic&dir=NW&format=hsla");
        assert!(!query.contains('#'));
    }

    #[test]
    fn test_round_trip() {
        let config = sample();
        let decoded = decode_query(&encode_query(&config), GradientConfig::default());
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_round_trip_every_style_and_direction() {
        for style in GradientStyle::all() {
            for dir in Direction::all() {
                let config =
                    GradientConfig::new("#123456", "#ABCDEF", *style, ColourFormat::Rgba, *dir);
                let decoded = decode_query(&encode_query(&config), GradientConfig::default());
                assert_eq!(decoded, config);
            }
        }
    }

    #[test]
    fn test_decode_readds_hash() {
        let decoded = decode_query("c1=abcdef", GradientConfig::default());
        assert_eq!(decoded.colour1, "#abcdef");
    }

    #[test]
    fn test_decode_accepts_encoded_hash() {
        let decoded = decode_query("c1=%23ABCDEF", GradientConfig::default());
        assert_eq!(decoded.colour1, "#ABCDEF");
    }

    #[test]
    fn test_decode_partial_keeps_base() {
        let base = sample();
        let decoded = decode_query("?dir=E", base.clone());
        assert_eq!(decoded.direction, Direction::E);
        assert_eq!(decoded.colour1, base.colour1);
        assert_eq!(decoded.style, base.style);
        assert_eq!(decoded.format, base.format);
    }

    #[test]
    fn test_decode_full_link() {
        let link = share_link(&sample(), SharePage::Showcase);
        assert!(link.starts_with("/showcase?"));
        assert_eq!(decode_query(&link, GradientConfig::default()), sample());
    }

    #[test]
    fn test_generator_link() {
        let link = share_link(&GradientConfig::default(), SharePage::Generator);
        assert_eq!(link, "/?c1=6366F1&c2=06B6D4&style=linear&dir=SE&format=hex");
    }

    #[test]
    fn test_decode_ignores_empty_and_unknown() {
        let base = sample();
        let decoded = decode_query("c1=&foo=bar&novalue&c2=", base.clone());
        assert_eq!(decoded, base);
    }

    #[test]
    fn test_decode_unknown_style_falls_back_to_linear() {
        let decoded = decode_query("style=diamond", sample());
        assert_eq!(decoded.style, GradientStyle::Linear);
    }

    #[test]
    fn test_decode_unknown_direction_and_format_keep_base() {
        let decoded = decode_query("dir=UP&format=cmyk", sample());
        assert_eq!(decoded.direction, Direction::NW);
        assert_eq!(decoded.format, ColourFormat::Hsla);
    }

    #[test]
    fn test_decode_first_occurrence_wins() {
        let decoded = decode_query("c1=111111&c1=222222&dir=N&dir=S", sample());
        assert_eq!(decoded.colour1, "#111111");
        assert_eq!(decoded.direction, Direction::N);
    }

    #[test]
    fn test_decode_drops_fragment() {
        let decoded = decode_query("/?c2=00AA00&format=rgba#preview", sample());
        assert_eq!(decoded.colour2, "#00AA00");
        assert_eq!(decoded.format, ColourFormat::Rgba);
    }

    #[test]
    fn test_share_page_parse() {
        assert_eq!("showcase".parse::<SharePage>().unwrap(), SharePage::Showcase);
        assert_eq!("Generator".parse::<SharePage>().unwrap(), SharePage::Generator);
        assert!("home".parse::<SharePage>().is_err());
    }
}
