//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use gradient_lab::config::{Config, ConfigStore, FileStore, OutputConfig};
use gradient_lab::models::{ColourFormat, Direction, GradientConfig, GradientStyle};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the gradient-lab binary
pub fn gradient_lab_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gradient-lab")
}

/// Creates an empty, isolated config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Runs the binary with `args` against the config directory `config_dir`.
pub fn run(args: &[&str], config_dir: &TempDir) -> Output {
    Command::new(gradient_lab_bin())
        .env("GRADIENT_LAB_CONFIG_DIR", config_dir.path())
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Runs the binary with an empty environment: no config dir override, no HOME.
pub fn run_without_config_env(args: &[&str]) -> Output {
    Command::new(gradient_lab_bin())
        .env_clear()
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Stdout of a command as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr of a command as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Black to white, linear, pointing north, hex output.
pub fn black_to_white() -> GradientConfig {
    GradientConfig::new(
        "#000000",
        "#FFFFFF",
        GradientStyle::Linear,
        ColourFormat::Hex,
        Direction::N,
    )
}

/// Writes `gradient` into a config directory the way `config set` would.
pub fn store_gradient(config_dir: &TempDir, gradient: GradientConfig) {
    let store = FileStore::new(config_dir.path());
    store
        .save(&Config {
            gradient,
            output: OutputConfig::default(),
        })
        .expect("Failed to save fixture config");
}
