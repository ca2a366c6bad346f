//! Core game logic
//!
//! Everything in this module is free of I/O and rendering concerns: the
//! grid, the snake and its update algorithm, food placement, and the tick
//! clock. The `modes` module wires these to a terminal.

pub mod clock;
pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use clock::GameClock;
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickResult};
pub use grid::Grid;
pub use state::{Cell, CollisionType, GameState, RunState, Snake};
