//! CLI command handlers for Gradient Lab.
//!
//! Each command turns flags plus the stored configuration into a
//! `GradientConfig` and prints what the engine makes of it.

pub mod common;
pub mod config;
pub mod convert;
pub mod css;
pub mod random;
pub mod share;
pub mod showcase;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode, GradientArgs};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use css::CssArgs;
pub use random::RandomArgs;
pub use share::ShareArgs;
pub use showcase::ShowcaseArgs;
