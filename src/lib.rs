//! Snake Arcade - continuous-movement Snake for the terminal
//!
//! This library provides:
//! - Core game logic: movement, growth, food placement and collisions (game module)
//! - TUI rendering of the board and scoreboard (render module)
//! - Keyboard input mapping (input module)
//! - Session counters (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
