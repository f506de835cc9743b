//! Shared CLI plumbing: error type, exit codes and gradient flags.

use clap::Args;
use std::fmt;

use crate::config::{Config, ConfigStore};
use crate::models::{ColourFormat, Direction, GradientConfig, GradientStyle, RgbColor};

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input (colour, enum value, missing option)
    ValidationError = 1,
    /// File system or clipboard failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code for `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    kind: ExitCode,
    message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Failure talking to the outside world.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        self.kind
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Gradient options shared by `css`, `share`, `showcase` and `config set`.
#[derive(Args, Debug, Clone, Default)]
pub struct GradientArgs {
    /// First colour (#RRGGBB)
    #[arg(long, visible_alias = "c1", value_name = "HEX")]
    pub colour1: Option<String>,

    /// Second colour (#RRGGBB)
    #[arg(long, visible_alias = "c2", value_name = "HEX")]
    pub colour2: Option<String>,

    /// Gradient style: linear, radial, or conic
    #[arg(short, long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Direction: N, NE, E, SE, S, SW, W, or NW
    #[arg(short, long, value_name = "DIR")]
    pub direction: Option<String>,

    /// Colour format: hex, rgba, or hsla
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,
}

impl GradientArgs {
    /// True when no option was given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colour1.is_none()
            && self.colour2.is_none()
            && self.style.is_none()
            && self.direction.is_none()
            && self.format.is_none()
    }

    /// Overrides fields of `base` with the options that were given.
    ///
    /// Colours are validated and normalised to uppercase `#RRGGBB`.
    pub fn apply(&self, base: GradientConfig) -> CliResult<GradientConfig> {
        let mut config = base;

        if let Some(colour) = &self.colour1 {
            config.colour1 = parse_colour(colour)?;
        }
        if let Some(colour) = &self.colour2 {
            config.colour2 = parse_colour(colour)?;
        }
        if let Some(style) = &self.style {
            config.style = style
                .parse::<GradientStyle>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }
        if let Some(direction) = &self.direction {
            config.direction = direction
                .parse::<Direction>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }
        if let Some(format) = &self.format {
            config.format = format
                .parse::<ColourFormat>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        Ok(config)
    }
}

/// Validates a colour from the command line and normalises it to `#RRGGBB`.
pub fn parse_colour(value: &str) -> CliResult<String> {
    RgbColor::from_hex(value)
        .map(|rgb| rgb.to_hex())
        .map_err(|e| CliError::validation(e.to_string()))
}

/// Validates and stores `config`.
///
/// A rejected value is a validation error; a failed write is an I/O error.
pub fn save_config(store: &dyn ConfigStore, config: &Config) -> CliResult<()> {
    config
        .validate()
        .map_err(|e| CliError::validation(format!("Cannot save configuration: {e}")))?;
    store
        .save(config)
        .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))
}

/// Pretty-prints `value` as JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Puts `text` on the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(text: &str) -> CliResult<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        .map_err(|e| CliError::io(format!("Failed to copy to clipboard: {e}")))
}

/// Puts `text` on the system clipboard.
#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_text: &str) -> CliResult<()> {
    Err(CliError::io(
        "Clipboard support is not available in this build (enable the 'clipboard' feature)",
    ))
}
