//! Showcase stylesheet command.

use crate::cli::common::{CliError, CliResult, GradientArgs};
use crate::config::{load_or_default, ConfigStore};
use crate::showcase::{render_showcase, ShowcaseContext};
use clap::Args;

/// Print CSS that applies the gradient to sample page elements
#[derive(Args, Debug, Clone, Default)]
pub struct ShowcaseArgs {
    #[command(flatten)]
    pub gradient: GradientArgs,

    /// Only print one context: banner, headline, icon, overlay, fade, or cta
    #[arg(short, long, value_name = "CONTEXT")]
    pub context: Option<String>,
}

impl ShowcaseArgs {
    /// Execute the showcase command
    pub fn execute(&self, store: &dyn ConfigStore) -> CliResult<()> {
        let config = self.gradient.apply(load_or_default(store).gradient)?;

        let css = match &self.context {
            Some(name) => name
                .parse::<ShowcaseContext>()
                .map_err(|e| CliError::validation(e.to_string()))?
                .render(&config),
            None => render_showcase(&config),
        };

        print!("{}", css);
        Ok(())
    }
}
