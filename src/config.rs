//! Configuration management for the application.
//!
//! The last-used gradient and output preferences are persisted through a
//! [`ConfigStore`] handed to whoever needs them. [`FileStore`] keeps them in
//! TOML with platform-specific directory resolution; [`MemoryStore`] keeps them
//! in process.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use crate::engine::hex_to_rgb;
use crate::models::GradientConfig;

/// Output preferences for the `css` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Print only the gradient function instead of a `background:` declaration
    #[serde(default)]
    pub gradient_only: bool,
    /// Copy the generated CSS to the clipboard
    #[serde(default)]
    pub copy_to_clipboard: bool,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/GradientLab/config.toml`
/// - macOS: `~/Library/Application Support/GradientLab/config.toml`
/// - Windows: `%APPDATA%\GradientLab\config.toml`
///
/// `GRADIENT_LAB_CONFIG_DIR` replaces the directory when set.
///
/// # Validation
///
/// - both gradient colours must be 6-digit hex colours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Last-used gradient
    #[serde(default)]
    pub gradient: GradientConfig,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        for (name, colour) in [
            ("colour1", &self.gradient.colour1),
            ("colour2", &self.gradient.colour2),
        ] {
            if hex_to_rgb(colour).is_none() {
                anyhow::bail!("Invalid {name} '{colour}'. Expected 6 hex digits (#RRGGBB)");
            }
        }
        Ok(())
    }
}

/// Persistence capability for [`Config`].
pub trait ConfigStore {
    /// Loads the stored configuration, or `None` if nothing has been saved.
    fn load(&self) -> Result<Option<Config>>;

    /// Stores `config`, replacing any previous value.
    fn save(&self, config: &Config) -> Result<()>;
}

/// Loads from `store`, falling back to defaults when nothing is stored or
/// the stored data is unreadable.
pub fn load_or_default(store: &dyn ConfigStore) -> Config {
    match store.load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            warn!("Failed to load saved config, using defaults: {e:#}");
            Config::default()
        }
    }
}

/// TOML file store under the platform config directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store in the default location, honouring `GRADIENT_LAB_CONFIG_DIR`.
    pub fn from_env() -> Result<Self> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(Self::new(dir));
        }
        Ok(Self::new(Self::default_dir()?))
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/GradientLab/`
    /// - macOS: `~/Library/Application Support/GradientLab/`
    /// - Windows: `%APPDATA%\GradientLab\`
    pub fn default_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.dir.join("config.toml")
    }
}

impl ConfigStore for FileStore {
    fn load(&self) -> Result<Option<Config>> {
        let config_path = self.file_path();

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no saved config");
            return Ok(None);
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Config = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        debug!(path = %config_path.display(), "loaded config");
        Ok(Some(config))
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;

        fs::create_dir_all(&self.dir).context(format!(
            "Failed to create config directory: {}",
            self.dir.display()
        ))?;

        let content =
            toml::to_string_pretty(config).context("Failed to serialize configuration")?;

        let config_path = self.file_path();
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        debug!(path = %config_path.display(), "saved config");
        Ok(())
    }
}

/// In-process store, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Config>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `config`.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            slot: Mutex::new(Some(config)),
        }
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Result<Option<Config>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("Config store lock poisoned"))?;
        Ok(slot.clone())
    }

    fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("Config store lock poisoned"))?;
        *slot = Some(config.clone());
        Ok(())
    }
}
