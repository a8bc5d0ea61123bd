use std::path::PathBuf;

/// Errors that can occur when creating a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size must be an even number from 4 to 26, got {0}")]
    InvalidSize(usize),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidSize(7);
        assert_eq!(
            err.to_string(),
            "board size must be an even number from 4 to 26, got 7"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.size must be even".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.size must be even"
        );
    }
}
