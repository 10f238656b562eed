use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("placement grid has {slots} slots but a full board needs {needed}")]
    GridTooSmall { slots: usize, needed: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Short text for the notice shown to the player.
    pub fn user_message(&self) -> &'static str {
        match self {
            GameError::GridTooSmall { .. } => "The screen is too small to play this game.",
            GameError::InvalidConfig(_) => "Invalid game settings. Check your configuration.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_too_small_message() {
        let err = GameError::GridTooSmall { slots: 4, needed: 23 };
        assert_eq!(
            err.to_string(),
            "placement grid has 4 slots but a full board needs 23"
        );
        assert_eq!(err.user_message(), "The screen is too small to play this game.");
    }

    #[test]
    fn test_invalid_config_message() {
        let err = GameError::InvalidConfig("bad".into());
        assert_eq!(err.to_string(), "invalid configuration: bad");
        assert!(!err.user_message().is_empty());
    }
}
