//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the starting gradient.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Gradient Lab";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "gradient-lab";

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "GradientLab";

/// Environment variable that overrides the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "GRADIENT_LAB_CONFIG_DIR";

/// First colour of a fresh gradient (indigo).
pub const DEFAULT_COLOUR1: &str = "#6366F1";

/// Second colour of a fresh gradient (cyan).
pub const DEFAULT_COLOUR2: &str = "#06B6D4";
