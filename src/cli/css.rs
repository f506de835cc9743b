//! Generate gradient CSS.

use crate::cli::common::{copy_to_clipboard, print_json, save_config, CliResult, GradientArgs};
use crate::config::{load_or_default, ConfigStore};
use crate::engine::{generate_full_css, generate_gradient_css, generate_random_colour};
use crate::models::GradientConfig;
use clap::Args;
use serde::Serialize;
use tracing::{info, warn};

/// Print the CSS for a gradient
#[derive(Args, Debug, Clone, Default)]
pub struct CssArgs {
    #[command(flatten)]
    pub gradient: GradientArgs,

    /// Replace both colours with random ones
    #[arg(long, conflicts_with_all = ["colour1", "colour2"])]
    pub random: bool,

    /// Print only the gradient function, without `background: ...;`
    #[arg(long)]
    pub gradient_only: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy the CSS to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Remember this gradient for later commands
    #[arg(long)]
    pub save: bool,
}

/// JSON output for `css --json`
#[derive(Serialize, Debug)]
struct CssOutput<'a> {
    config: &'a GradientConfig,
    gradient: String,
    css: String,
}

impl CssArgs {
    /// Execute the css command
    pub fn execute(&self, store: &dyn ConfigStore) -> CliResult<()> {
        let mut stored = load_or_default(store);
        let config = self.resolve(stored.gradient.clone())?;

        let gradient_only = self.gradient_only || stored.output.gradient_only;
        let text = render(&config, gradient_only);

        if self.json {
            print_json(&CssOutput {
                config: &config,
                gradient: generate_gradient_css(&config),
                css: generate_full_css(&config),
            })?;
        } else {
            println!("{}", text);
        }

        if self.copy {
            copy_to_clipboard(&text)?;
            eprintln!("CSS copied to clipboard");
        } else if stored.output.copy_to_clipboard {
            // Preference only: a missing clipboard must not fail the command.
            match copy_to_clipboard(&text) {
                Ok(()) => eprintln!("CSS copied to clipboard"),
                Err(e) => warn!("{e}"),
            }
        }

        if self.save {
            stored.gradient = config;
            save_config(store, &stored)?;
            info!("gradient saved");
        }

        Ok(())
    }

    /// Effective gradient: stored values, then flags, then `--random`.
    pub fn resolve(&self, base: GradientConfig) -> CliResult<GradientConfig> {
        let mut config = self.gradient.apply(base)?;
        if self.random {
            config.colour1 = generate_random_colour();
            config.colour2 = generate_random_colour();
        }
        Ok(config)
    }
}

/// Renders either the full declaration or just the gradient function.
pub fn render(config: &GradientConfig, gradient_only: bool) -> String {
    if gradient_only {
        generate_gradient_css(config)
    } else {
        generate_full_css(config)
    }
}
