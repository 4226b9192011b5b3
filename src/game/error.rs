//! Configuration errors

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a configuration is rejected at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A dimension, distance or delay that must be strictly positive
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// The playable rectangle cannot hold a single sprite
    #[error(
        "board {width}x{height} with scoreboard {scoreboard_height} is too small for sprite size {sprite_size}"
    )]
    BoardTooSmall {
        width: u32,
        height: u32,
        scoreboard_height: u32,
        sprite_size: u32,
    },

    /// Half the sprite rounds down to zero, so nothing can ever overlap
    #[error("sprite_size must be at least 2, got {0}")]
    SpriteTooSmall(u32),

    /// The centre, where every run starts, is already outside the edge bounds
    #[error(
        "scoreboard {scoreboard_height} leaves no room for the snake to start at the centre of a board {height} tall"
    )]
    OriginOutsideBoard { height: u32, scoreboard_height: u32 },

    /// No food variants to choose from
    #[error("food palette must contain at least one variant")]
    EmptyFoodPalette,

    /// The config file could not be read
    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for a game config
    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
