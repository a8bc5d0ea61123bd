use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{MAX_SIZE, MIN_SIZE};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the board
    pub size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { size: 10 }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// File receiving log output
    pub file: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: PathBuf::from("reversi.log"),
            filter: "info".to_string(),
        }
    }
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
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.game.size;
        if size < MIN_SIZE || size > MAX_SIZE {
            return Err(ConfigError::Validation(format!(
                "game.size must be in [{MIN_SIZE}, {MAX_SIZE}], got {size}"
            )));
        }
        if size % 2 != 0 {
            return Err(ConfigError::Validation(format!(
                "game.size must be even, got {size}"
            )));
        }
        if self.log.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation("log.file must not be empty".into()));
        }
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Validation("log.filter must not be empty".into()));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
