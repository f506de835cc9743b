//! Build and read share links.

use crate::cli::common::{print_json, save_config, CliError, CliResult, GradientArgs};
use crate::config::{load_or_default, ConfigStore};
use crate::models::GradientConfig;
use crate::share::{decode_query, share_link, SharePage};
use clap::Args;

/// Print a share link for a gradient, or decode one
#[derive(Args, Debug, Clone, Default)]
pub struct ShareArgs {
    #[command(flatten)]
    pub gradient: GradientArgs,

    /// Page to link to: generator or showcase
    #[arg(short, long, value_name = "PAGE", default_value = "generator")]
    pub page: String,

    /// Prefix for the link (e.g., https://example.com)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Decode a link or query string instead of building one
    #[arg(long, value_name = "LINK", conflicts_with_all = ["colour1", "colour2", "style", "direction", "format"])]
    pub decode: Option<String>,

    /// With --decode, remember the decoded gradient
    #[arg(long, requires = "decode")]
    pub save: bool,
}

impl ShareArgs {
    /// Execute the share command
    pub fn execute(&self, store: &dyn ConfigStore) -> CliResult<()> {
        let mut stored = load_or_default(store);

        if let Some(link) = &self.decode {
            let config = decode_query(link, stored.gradient.clone());
            print_json(&config)?;

            if self.save {
                stored.gradient = config;
                save_config(store, &stored)?;
            }
            return Ok(());
        }

        let config = self.gradient.apply(stored.gradient)?;
        println!("{}", self.link(&config)?);
        Ok(())
    }

    /// Link for `config` on the selected page, with the optional prefix.
    pub fn link(&self, config: &GradientConfig) -> CliResult<String> {
        let page = self
            .page
            .parse::<SharePage>()
            .map_err(|e| CliError::validation(e.to_string()))?;
        let link = share_link(config, page);

        Ok(match &self.base_url {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), link),
            None => link,
        })
    }
}
