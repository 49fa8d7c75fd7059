//! Display configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Display settings for the TUI.
///
/// Every field has a default, so a config file only needs the settings
/// it wants to change.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color name for X marks.
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color name for O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Whether to show the key-binding help line.
    #[serde(default = "default_show_help")]
    show_help: bool,
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

fn default_show_help() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            x_color: default_x_color(),
            o_color: default_o_color(),
            show_help: default_show_help(),
        }
    }
}

impl UiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        // Surface bad color names at load time, not at the first draw.
        config.theme()?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configured color names into a drawable theme.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        let x = Color::from_str(&self.x_color)
            .map_err(|_| ConfigError::new(format!("Unknown color name: {}", self.x_color)))?;
        let o = Color::from_str(&self.o_color)
            .map_err(|_| ConfigError::new(format!("Unknown color name: {}", self.o_color)))?;

        Ok(Theme { x, o })
    }
}

/// Resolved mark colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Color for X marks.
    pub x: Color,
    /// Color for O marks.
    pub o: Color,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
