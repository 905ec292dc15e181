//! Configuration management for the to-do board.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Nothing here is persisted; the variables only shape how a session starts
//! and how it is drawn.

use crate::error::ConfigError;
use crate::types::DisplayMode;
use crate::view::{DEFAULT_TIME_FORMAT, ViewConfig};
use chrono::format::{Item, StrftimeItems};
use std::env;

/// Start in dark mode
pub const DARK_MODE_VAR: &str = "TODO_BOARD_DARK_MODE";
/// Timestamp format for completed notes
pub const TIME_FORMAT_VAR: &str = "TODO_BOARD_TIME_FORMAT";
/// Show timestamps in UTC instead of local time
pub const UTC_VAR: &str = "TODO_BOARD_UTC";
/// Emit terminal styling
pub const COLOR_VAR: &str = "TODO_BOARD_COLOR";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Display mode the board starts in
    pub initial_display: DisplayMode,
    /// Whether the painter emits colours and strikethrough
    pub color: bool,
    /// Timestamp presentation
    pub view: ViewConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let dark = parse_bool(DARK_MODE_VAR, lookup(DARK_MODE_VAR))?.unwrap_or(false);
        let utc = parse_bool(UTC_VAR, lookup(UTC_VAR))?.unwrap_or(false);
        let color = parse_bool(COLOR_VAR, lookup(COLOR_VAR))?.unwrap_or(true);

        let time_format = lookup(TIME_FORMAT_VAR).unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_string());
        validate_time_format(&time_format)?;

        Ok(Self {
            initial_display: if dark { DisplayMode::Dark } else { DisplayMode::Light },
            color,
            view: ViewConfig::default()
                .with_time_format(time_format)
                .with_local_time(!utc),
        })
    }

    /// Set the starting display mode
    #[must_use]
    pub const fn with_initial_display(mut self, display: DisplayMode) -> Self {
        self.initial_display = display;
        self
    }

    /// Enable or disable terminal styling
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Replace the timestamp presentation
    #[must_use]
    pub fn with_view(mut self, view: ViewConfig) -> Self {
        self.view = view;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_display: DisplayMode::Light,
            color: true,
            view: ViewConfig::default(),
        }
    }
}

fn parse_bool(key: &'static str, value: Option<String>) -> Result<Option<bool>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidBool { key, value }),
    }
}

fn validate_time_format(format: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidTimeFormat {
            key: TIME_FORMAT_VAR,
            value: format.to_string(),
        });
    }
    Ok(())
}
