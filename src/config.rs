use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::game::{Mode, ModeSet};

/// Game setup options.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Modes offered at setup, in menu order.
    pub modes: Vec<Mode>,
    /// Automated participants pause this long before and after each move.
    pub think_time_ms: u64,
    /// Seed for automated participants; random when absent.
    pub seed: Option<u64>,
    pub automated_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            modes: Mode::ALL.to_vec(),
            think_time_ms: 500,
            seed: None,
            automated_name: "Computer".to_string(),
        }
    }
}

impl GameConfig {
    pub fn mode_set(&self) -> ModeSet {
        ModeSet::new(self.modes.clone())
    }

    pub fn think_time(&self) -> Duration {
        Duration::from_millis(self.think_time_ms)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.modes.is_empty() {
            return Err(ConfigError::Validation(
                "game.modes must not be empty".into(),
            ));
        }
        for (i, mode) in self.modes.iter().enumerate() {
            if self.modes[..i].contains(mode) {
                return Err(ConfigError::Validation(format!(
                    "game.modes lists {:?} more than once",
                    mode
                )));
            }
        }
        if self.automated_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.automated_name must not be blank".into(),
            ));
        }

        Ok(())
    }
}

/// Console presentation options.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    pub clear_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            color: true,
            clear_screen: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
