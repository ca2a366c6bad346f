//! Grid snake in the terminal
//!
//! This library provides:
//! - Core game logic: grid, snake, food, tick clock (game module)
//! - Input adapters and the per-tick direction arbiter (input module)
//! - TUI rendering (render module)
//! - High-score persistence and session stats (score module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod score;
