//! Gradient Lab - CSS gradient generator for the terminal
//!
//! Pick two colours, a style, a direction and a colour format, and get
//! copyable CSS. Running without a subcommand prints the CSS for the saved
//! gradient.

use clap::{Parser, Subcommand};
use gradient_lab::cli::{
    CliError, CliResult, ConfigArgs, ConvertArgs, CssArgs, RandomArgs, ShareArgs, ShowcaseArgs,
};
use gradient_lab::config::FileStore;
use gradient_lab::constants::APP_BINARY_NAME;
use gradient_lab::logging;

/// Gradient Lab - CSS gradient generator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the CSS for a gradient
    Css(CssArgs),
    /// Print random colours
    Random(RandomArgs),
    /// Show a colour as hex, rgba, and hsla
    Convert(ConvertArgs),
    /// Print a share link for a gradient, or decode one
    Share(ShareArgs),
    /// Print CSS that applies the gradient to sample page elements
    Showcase(ShowcaseArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn open_store() -> CliResult<FileStore> {
    FileStore::from_env()
        .map_err(|e| CliError::io(format!("Failed to locate config directory: {e:#}")))
}

fn run(command: Command) -> CliResult<()> {
    match command {
        Command::Random(args) => args.execute(),
        Command::Convert(args) => args.execute(),
        Command::Css(args) => args.execute(&open_store()?),
        Command::Share(args) => args.execute(&open_store()?),
        Command::Showcase(args) => args.execute(&open_store()?),
        Command::Config(args) => args.execute(&open_store()?),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: {e}");
    }

    let command = cli
        .command
        .unwrap_or_else(|| Command::Css(CssArgs::default()));

    if let Err(e) = run(command) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
}
