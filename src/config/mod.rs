//! Configuration file support for findaway.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/findaway/config.toml`. Settings include the session defaults
//! (starting piece, animation, solver bound) and the keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::SessionConfig;

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Valid range for `session.max_evaluations`.
const MAX_EVALUATIONS_RANGE: std::ops::RangeInclusive<usize> = 1_000..=10_000_000;

/// Main configuration structure containing all user settings.
///
/// All fields have defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [session]
/// default_piece = "knight"
/// animate = true
/// max_evaluations = 50000
///
/// [keybindings]
/// run = ["Space", "R"]
/// partial_reset = ["I", "Backspace"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Session defaults (piece, animation, solver bound)
    #[serde(default)]
    pub session: SessionConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    fn validate_and_clamp(&mut self) {
        if !MAX_EVALUATIONS_RANGE.contains(&self.session.max_evaluations) {
            log::warn!(
                "Invalid max_evaluations {}, clamping to {}-{} range",
                self.session.max_evaluations,
                MAX_EVALUATIONS_RANGE.start(),
                MAX_EVALUATIONS_RANGE.end()
            );
            self.session.max_evaluations = self
                .session
                .max_evaluations
                .clamp(*MAX_EVALUATIONS_RANGE.start(), *MAX_EVALUATIONS_RANGE.end());
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/findaway/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("findaway");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file exists
    /// but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text without validation.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
