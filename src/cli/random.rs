//! Random colour command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::engine::{format_colour, generate_random_colour};
use crate::models::ColourFormat;
use clap::Args;

/// Largest batch `random --count` will produce.
const MAX_COUNT: usize = 256;

/// Print random colours
#[derive(Args, Debug, Clone)]
pub struct RandomArgs {
    /// Number of colours to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Colour format: hex, rgba, or hsla
    #[arg(short, long, value_name = "FORMAT", default_value = "hex")]
    pub format: String,

    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl RandomArgs {
    /// Execute the random command
    pub fn execute(&self) -> CliResult<()> {
        let colours = self.generate()?;

        if self.json {
            print_json(&colours)?;
        } else {
            for colour in &colours {
                println!("{}", colour);
            }
        }

        Ok(())
    }

    /// Generates the requested colours in the requested notation.
    pub fn generate(&self) -> CliResult<Vec<String>> {
        if self.count == 0 || self.count > MAX_COUNT {
            return Err(CliError::validation(format!(
                "Count must be between 1 and {MAX_COUNT}, got {}",
                self.count
            )));
        }

        let format = self
            .format
            .parse::<ColourFormat>()
            .map_err(|e| CliError::validation(e.to_string()))?;

        Ok((0..self.count)
            .map(|_| format_colour(&generate_random_colour(), format))
            .collect())
    }
}
