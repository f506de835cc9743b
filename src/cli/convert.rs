//! Convert a colour between notations.

use crate::cli::common::{parse_colour, print_json, CliError, CliResult};
use crate::engine::format_colour;
use crate::models::ColourFormat;
use clap::Args;
use std::collections::BTreeMap;

/// Show a colour as hex, rgba, and hsla
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Colour to convert (#RRGGBB or RRGGBB)
    #[arg(value_name = "HEX")]
    pub colour: String,

    /// Only print this format: hex, rgba, or hsla
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let conversions = self.conversions()?;

        if self.json {
            let map: BTreeMap<&str, &str> = conversions
                .iter()
                .map(|(format, text)| (format.as_str(), text.as_str()))
                .collect();
            print_json(&map)?;
        } else if conversions.len() == 1 {
            println!("{}", conversions[0].1);
        } else {
            for (format, text) in &conversions {
                println!("{:<5} {}", format.as_str(), text);
            }
        }

        Ok(())
    }

    /// Formats the colour in the selected notation, or all of them.
    pub fn conversions(&self) -> CliResult<Vec<(ColourFormat, String)>> {
        let hex = parse_colour(&self.colour)?;

        let formats = match &self.format {
            Some(name) => vec![name
                .parse::<ColourFormat>()
                .map_err(|e| CliError::validation(e.to_string()))?],
            None => ColourFormat::all().to_vec(),
        };

        Ok(formats
            .into_iter()
            .map(|format| (format, format_colour(&hex, format)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(colour: &str, format: Option<&str>) -> ConvertArgs {
        ConvertArgs {
            colour: colour.to_string(),
            format: format.map(str::to_string),
            json: false,
        }
    }

    #[test]
    fn test_conversions_all() {
        let conversions = args("6366f1", None).conversions().unwrap();
        assert_eq!(
            conversions,
            vec![
                (ColourFormat::Hex, "#6366F1".to_string()),
                (ColourFormat::Rgba, "rgba(99, 102, 241, 1)".to_string()),
                (ColourFormat::Hsla, "hsla(239, 84%, 67%, 1)".to_string()),
            ]
        );
    }

    #[test]
    fn test_conversions_single() {
        let conversions = args("#06B6D4", Some("hsla")).conversions().unwrap();
        assert_eq!(conversions, vec![(ColourFormat::Hsla, "hsla(189, 94%, 43%, 1)".to_string())]);
    }

    #[test]
    fn test_conversions_reject_malformed() {
        assert!(args("not-a-colour", None).conversions().is_err());
        assert!(args("#6366F1", Some("lab")).conversions().is_err());
    }
}
