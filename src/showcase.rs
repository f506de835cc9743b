//! Showcase stylesheet: the same gradient applied to sample UI contexts.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::engine::generate_gradient_css;
use crate::models::GradientConfig;

/// A place in a page where the gradient is demonstrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShowcaseContext {
    /// Full-width preview strip
    Banner,
    /// Headline text filled with the gradient
    Headline,
    /// Icon glyphs filled with the gradient
    Icon,
    /// Translucent layer over an image
    Overlay,
    /// Bottom fade over an image, tinted with the first colour
    Fade,
    /// Call-to-action panel background
    Cta,
}

impl ShowcaseContext {
    /// Returns all contexts in stylesheet order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Banner,
            Self::Headline,
            Self::Icon,
            Self::Overlay,
            Self::Fade,
            Self::Cta,
        ]
    }

    /// Short name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Banner => "banner",
            Self::Headline => "headline",
            Self::Icon => "icon",
            Self::Overlay => "overlay",
            Self::Fade => "fade",
            Self::Cta => "cta",
        }
    }

    /// CSS class selector for the context.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Banner => ".gradient-banner",
            Self::Headline => ".gradient-text",
            Self::Icon => ".gradient-icon",
            Self::Overlay => ".gradient-overlay",
            Self::Fade => ".gradient-fade",
            Self::Cta => ".gradient-cta",
        }
    }

    /// Declarations for this context, given the rendered gradient.
    fn declarations(self, config: &GradientConfig, gradient: &str) -> Vec<String> {
        match self {
            Self::Banner | Self::Cta => vec![format!("background: {gradient};")],
            Self::Headline => text_fill(gradient),
            // Icons always use a diagonal gradient of the raw colours.
            Self::Icon => text_fill(&format!(
                "linear-gradient(135deg, {}, {})",
                config.colour1, config.colour2
            )),
            Self::Overlay => vec![format!("background: {gradient};"), "opacity: 0.7;".to_string()],
            // Appends an alpha byte to the raw colour, so only #RRGGBB input yields valid CSS.
            Self::Fade => vec![format!(
                "background: linear-gradient(to top, {}ee, transparent 50%);",
                config.colour1
            )],
        }
    }

    /// Renders one CSS rule for this context.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradient_lab::models::GradientConfig;
    /// use gradient_lab::showcase::ShowcaseContext;
    ///
    /// let rule = ShowcaseContext::Banner.render(&GradientConfig::default());
    /// assert_eq!(
    ///     rule,
    ///     ".gradient-banner {\n  background: linear-gradient(135deg, #6366F1, #06B6D4);\n}\n"
    /// );
    /// ```
    #[must_use]
    pub fn render(self, config: &GradientConfig) -> String {
        render_rule(self, config, &generate_gradient_css(config))
    }
}

impl fmt::Display for ShowcaseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShowcaseContext {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|ctx| ctx.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid showcase context '{s}'. Must be one of banner, headline, icon, overlay, fade, cta"
                )
            })
    }
}

fn text_fill(gradient: &str) -> Vec<String> {
    vec![
        format!("background-image: {gradient};"),
        "-webkit-background-clip: text;".to_string(),
        "background-clip: text;".to_string(),
        "color: transparent;".to_string(),
    ]
}

fn render_rule(context: ShowcaseContext, config: &GradientConfig, gradient: &str) -> String {
    let mut rule = format!("{} {{\n", context.selector());
    for declaration in context.declarations(config, gradient) {
        let _ = writeln!(rule, "  {declaration}");
    }
    rule.push_str("}\n");
    rule
}

/// Renders the full showcase stylesheet, one rule per context separated by
/// blank lines.
#[must_use]
pub fn render_showcase(config: &GradientConfig) -> String {
    let gradient = generate_gradient_css(config);
    ShowcaseContext::all()
        .iter()
        .map(|ctx| render_rule(*ctx, config, &gradient))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColourFormat, Direction, GradientStyle};

    #[test]
    fn test_stylesheet_has_every_context_in_order() {
        let css = render_showcase(&GradientConfig::default());
        let mut last = 0;
        for ctx in ShowcaseContext::all() {
            let pos = css.find(ctx.selector()).unwrap_or_else(|| panic!("missing {ctx}"));
            assert!(pos >= last, "{ctx} out of order");
            last = pos;
        }
    }

    #[test]
    fn test_headline_clips_to_text() {
        let rule = ShowcaseContext::Headline.render(&GradientConfig::default());
        assert!(rule.contains("background-image: linear-gradient(135deg, #6366F1, #06B6D4);"));
        assert!(rule.contains("background-clip: text;"));
        assert!(rule.contains("color: transparent;"));
    }

    #[test]
    fn test_icon_is_always_diagonal() {
        let config = GradientConfig::new(
            "#112233",
            "#445566",
            GradientStyle::Conic,
            ColourFormat::Rgba,
            Direction::W,
        );
        let rule = ShowcaseContext::Icon.render(&config);
        assert!(rule.contains("background-image: linear-gradient(135deg, #112233, #445566);"));
        assert!(rule.contains("background-clip: text;"));
        assert!(!rule.contains("conic-gradient"));
    }

    #[test]
    fn test_overlay_is_translucent() {
        let rule = ShowcaseContext::Overlay.render(&GradientConfig::default());
        assert!(rule.contains("opacity: 0.7;"));
    }

    #[test]
    fn test_fade_uses_raw_first_colour() {
        let config = GradientConfig::new(
            "#6366F1",
            "#06B6D4",
            GradientStyle::Radial,
            ColourFormat::Hsla,
            Direction::N,
        );
        let rule = ShowcaseContext::Fade.render(&config);
        assert!(rule.contains("linear-gradient(to top, #6366F1ee, transparent 50%)"));
    }

    #[test]
    fn test_stylesheet_follows_config_style() {
        let config = GradientConfig::new(
            "#000000",
            "#FFFFFF",
            GradientStyle::Conic,
            ColourFormat::Hex,
            Direction::S,
        );
        let css = render_showcase(&config);
        assert!(css.contains(
            "background: conic-gradient(from 180deg at center bottom, #000000, #FFFFFF, #000000);"
        ));
    }

    #[test]
    fn test_context_parse() {
        assert_eq!("CTA".parse::<ShowcaseContext>().unwrap(), ShowcaseContext::Cta);
        assert!("footer".parse::<ShowcaseContext>().is_err());
    }
}
