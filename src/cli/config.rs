//! Configuration management CLI commands.

use crate::cli::common::{print_json, save_config, CliError, CliResult, GradientArgs};
use crate::config::{Config, ConfigStore, FileStore};
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Restore the default configuration
    Reset,
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    #[command(flatten)]
    gradient: GradientArgs,

    /// Print only the gradient function by default (true or false)
    #[arg(long, value_name = "BOOL")]
    gradient_only: Option<bool>,

    /// Copy generated CSS to the clipboard by default (true or false)
    #[arg(long, value_name = "BOOL")]
    copy_to_clipboard: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    path: String,
    #[serde(flatten)]
    config: &'a Config,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, store: &FileStore) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(store),
            ConfigCommand::Set(args) => args.execute(store),
            ConfigCommand::Reset => {
                save_config(store, &Config::default())?;
                println!("Configuration reset to defaults.");
                Ok(())
            }
            ConfigCommand::Path => {
                println!("{}", store.file_path().display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, store: &FileStore) -> CliResult<()> {
        let config = store
            .load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?
            .unwrap_or_default();

        if self.json {
            print_json(&ConfigOutput {
                path: store.file_path().to_string_lossy().to_string(),
                config: &config,
            })?;
        } else {
            output_human_readable(store, &config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, store: &FileStore) -> CliResult<()> {
        // At least one argument must be provided
        if self.gradient.is_empty()
            && self.gradient_only.is_none()
            && self.copy_to_clipboard.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --colour1, --colour2, --style, --direction, --format, --gradient-only, or --copy-to-clipboard",
            ));
        }

        // A corrupt file is replaced rather than blocking the update
        let mut config = store.load().ok().flatten().unwrap_or_default();
        self.apply(&mut config)?;

        save_config(store, &config)?;

        println!("Configuration updated successfully.");

        Ok(())
    }

    fn apply(&self, config: &mut Config) -> CliResult<()> {
        config.gradient = self.gradient.apply(config.gradient.clone())?;
        if let Some(value) = self.gradient_only {
            config.output.gradient_only = value;
        }
        if let Some(value) = self.copy_to_clipboard {
            config.output.copy_to_clipboard = value;
        }
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(store: &FileStore, config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();
    println!("File: {}", store.file_path().display());
    println!();

    println!("Gradient:");
    println!("  Colour 1:  {}", config.gradient.colour1);
    println!("  Colour 2:  {}", config.gradient.colour2);
    println!("  Style:     {}", config.gradient.style);
    println!("  Direction: {}", config.gradient.direction);
    println!("  Format:    {}", config.gradient.format);
    println!();

    println!("Output:");
    println!("  Gradient Only:     {}", config.output.gradient_only);
    println!("  Copy To Clipboard: {}", config.output.copy_to_clipboard);
    println!();
}
