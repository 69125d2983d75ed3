use std::path::Path;

use crate::board::{Stone, DEFAULT_BOARD_SIZE};
use crate::error::ConfigError;

/// Default config file looked up by both binaries
pub const DEFAULT_CONFIG_PATH: &str = "hex.toml";

/// Largest board either front end will set up
pub const MAX_BOARD_SIZE: usize = 64;

/// Who plays the side the human does not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// Random legal moves
    #[default]
    Random,
    /// Hotseat: both sides are played by people
    Human,
}

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    /// Color played by the human against the computer
    pub human: Stone,
    pub opponent: Opponent,
    /// Seed for the random opponent; entropy when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            human: Stone::Blue,
            opponent: Opponent::Random,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Validation(
                "board_size must be > 0".to_string(),
            ));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be at most {}, got {}",
                MAX_BOARD_SIZE, self.board_size
            )));
        }
        if self.human == Stone::Empty {
            return Err(ConfigError::Validation(
                "human must be \"blue\" or \"red\"".to_string(),
            ));
        }
        Ok(())
    }

    /// Color the computer plays, if any
    pub fn computer(&self) -> Option<Stone> {
        match self.opponent {
            Opponent::Random => Some(self.human.opponent()),
            Opponent::Human => None,
        }
    }
}
