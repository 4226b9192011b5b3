//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end only reads state from here and feeds directions back in.

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod sprite;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use collision::{CollisionDetector, CollisionType, EdgeBounds};
pub use config::{GameConfig, SpriteAttributes, SpriteConfig};
pub use engine::{GameState, TickOutcome};
pub use error::ConfigError;
pub use food::{Food, FoodArea, RandomSource};
pub use sprite::{Drawable, Sprite, SpriteKind};
pub use state::{Position, Score, Snake};
