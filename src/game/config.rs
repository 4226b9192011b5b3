use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::ConfigError;

/// Colour and shape of a sprite, as names the renderer understands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteAttributes {
    pub color: String,
    pub shape: String,
}

impl SpriteAttributes {
    pub fn new(color: &str, shape: &str) -> Self {
        Self {
            color: color.to_string(),
            shape: shape.to_string(),
        }
    }
}

/// Sprite appearance and size
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    pub head: SpriteAttributes,
    pub segment: SpriteAttributes,
    /// Every other segment is drawn in this colour
    pub segment_alternate_color: String,
    /// Edge length of the head sprite in board units
    pub sprite_size: u32,
    /// Food variants, one is picked at random on each placement
    pub food: Vec<SpriteAttributes>,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            head: SpriteAttributes::new("limegreen", "square"),
            segment: SpriteAttributes::new("limegreen", "circle"),
            segment_alternate_color: "green".to_string(),
            sprite_size: 20,
            food: vec![
                SpriteAttributes::new("limegreen", "lime"),
                SpriteAttributes::new("red", "cherry"),
                SpriteAttributes::new("yellow", "banana"),
            ],
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Milliseconds between ticks
    pub update_delay_ms: u64,
    /// Distance the head travels per tick
    pub step_distance: f64,

    /// Height of the score strip along the top of the board
    pub scoreboard_height: u32,

    // Display
    pub display_width: u32,
    pub display_height: u32,
    /// Margin around the board, cosmetic only
    pub border: u32,
    pub background_color: String,
    pub board_color: String,

    pub sprites: SpriteConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            update_delay_ms: 50,
            step_distance: 10.0,
            scoreboard_height: 50,
            display_width: 600,
            display_height: 600,
            border: 25,
            background_color: "black".to_string(),
            board_color: "navyblue".to_string(),
            sprites: SpriteConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom display size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            display_width: width,
            display_height: height,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Half the display width, rounded down
    pub fn half_width(&self) -> i64 {
        i64::from(self.display_width / 2)
    }

    /// Half the display height, rounded down
    pub fn half_height(&self) -> i64 {
        i64::from(self.display_height / 2)
    }

    /// Half the sprite size, rounded down
    pub fn half_sprite(&self) -> i64 {
        i64::from(self.sprites.sprite_size / 2)
    }

    /// Check that the geometry is usable.
    ///
    /// The collision and placement formulas assume positive dimensions and a
    /// playable rectangle that can hold at least one sprite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("display_width", f64::from(self.display_width)),
            ("display_height", f64::from(self.display_height)),
            ("sprite_size", f64::from(self.sprites.sprite_size)),
            ("update_delay_ms", self.update_delay_ms as f64),
        ];
        for (field, value) in positives {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if !(self.step_distance.is_finite() && self.step_distance > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "step_distance",
                value: self.step_distance,
            });
        }

        if self.sprites.sprite_size < 2 {
            return Err(ConfigError::SpriteTooSmall(self.sprites.sprite_size));
        }

        if self.sprites.food.is_empty() {
            return Err(ConfigError::EmptyFoodPalette);
        }

        let sprite = i64::from(self.sprites.sprite_size);
        let scoreboard = i64::from(self.scoreboard_height);
        let x_room = self.half_width() - sprite;
        let y_room = (self.half_height() - scoreboard - sprite) - (sprite - self.half_height());
        if x_room < 0 || y_room < 0 {
            return Err(ConfigError::BoardTooSmall {
                width: self.display_width,
                height: self.display_height,
                scoreboard_height: self.scoreboard_height,
                sprite_size: self.sprites.sprite_size,
            });
        }

        // Top edge of the head's range must not drop below the reset point
        if self.half_height() - scoreboard - self.half_sprite() < 0 {
            return Err(ConfigError::OriginOutsideBoard {
                height: self.display_height,
                scoreboard_height: self.scoreboard_height,
            });
        }

        Ok(())
    }
}
