use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::game_entities::{Glyph, DEFAULT_SHAPES};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self { width: 390, height: 844 }
    }
}

/// Pixel metrics for the play grid, the results screen and the restart button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub tile_size: u32,
    pub grid_pitch: u32,
    pub grid_margin_x: u32,
    pub grid_margin_y: u32,
    pub grid_origin_x: u32,
    pub grid_origin_y: u32,
    pub results_pitch: u32,
    pub results_margin_x: u32,
    pub results_origin_x: u32,
    pub results_origin_y: u32,
    pub button_width: u32,
    pub button_gap: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tile_size: 40,
            grid_pitch: 45,
            grid_margin_x: 90,
            grid_margin_y: 220,
            grid_origin_x: 45,
            grid_origin_y: 140,
            results_pitch: 42,
            results_margin_x: 80,
            results_origin_x: 20,
            results_origin_y: 100,
            button_width: 100,
            button_gap: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenSize,
    pub layout: LayoutConfig,
    pub decoys_per_round: usize,
    // None means the shape list never made it into the config file
    #[serde(default)]
    pub shapes: Option<Vec<Glyph>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen: ScreenSize::default(),
            layout: LayoutConfig::default(),
            decoys_per_round: 3,
            shapes: Some(DEFAULT_SHAPES.iter().map(|s| s.to_string()).collect()),
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.decoys_per_round == 0 {
            return Err(GameError::InvalidConfig(
                "decoys_per_round must be at least 1".to_string(),
            ));
        }
        if self.layout.tile_size == 0 || self.layout.grid_pitch == 0 || self.layout.results_pitch == 0 {
            return Err(GameError::InvalidConfig(
                "tile size and pitches must be positive".to_string(),
            ));
        }
        if self.layout.tile_size > self.layout.grid_pitch {
            return Err(GameError::InvalidConfig(format!(
                "tile size {} does not fit grid pitch {}",
                self.layout.tile_size, self.layout.grid_pitch
            )));
        }
        if let Some(shapes) = &self.shapes {
            let mut sorted: Vec<&Glyph> = shapes.iter().collect();
            sorted.sort();
            sorted.dedup();
            if sorted.len() != shapes.len() {
                return Err(GameError::InvalidConfig("shapes must be unique".to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.decoys_per_round, 3);
        assert_eq!(config.shapes.as_ref().map(|s| s.len()), Some(23));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml(
            r#"
            decoys_per_round = 2

            [screen]
            width = 320
            height = 568
            "#,
        )
        .unwrap();
        assert_eq!(config.decoys_per_round, 2);
        assert_eq!(config.screen, ScreenSize { width: 320, height: 568 });
        assert_eq!(config.layout, LayoutConfig::default());
        assert!(config.shapes.is_none());
    }

    #[test]
    fn test_toml_shapes_override() {
        let config = GameConfig::from_toml(r#"shapes = ["A", "B", "C"]"#).unwrap();
        assert_eq!(
            config.shapes,
            Some(vec!["A".to_string(), "B".to_string(), "C".to_string()])
        );
    }

    #[test]
    fn test_zero_decoys_rejected() {
        let err = GameConfig::from_toml("decoys_per_round = 0").unwrap_err();
        assert!(err.to_string().contains("decoys_per_round"));
    }

    #[test]
    fn test_duplicate_shapes_rejected() {
        let config = GameConfig {
            shapes: Some(vec!["A".to_string(), "A".to_string()]),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = GameConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
