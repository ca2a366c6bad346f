use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Smallest playable board: the starting snake must fit between the board
/// center and the left edge, with free cells left over for food.
pub const MIN_TILE_COUNT: usize = 6;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of cells per board side (the board is square)
    pub tile_count: usize,
    /// Initial length of the snake
    pub start_length: usize,
    /// Tick interval at the start of a run, in milliseconds
    pub start_interval_ms: u64,
    /// Lower bound for the tick interval, in milliseconds
    pub min_interval_ms: u64,
    /// How much the interval shrinks per food eaten, in milliseconds
    pub ramp_step_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: 20,
            start_length: 4,
            start_interval_ms: 140,
            min_interval_ms: 60,
            ramp_step_ms: 3,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size.
    ///
    /// Sizes below [`MIN_TILE_COUNT`] are raised to it; the CLI rejects
    /// them outright, this is the backstop for programmatic use.
    pub fn new(tile_count: usize) -> Self {
        Self {
            tile_count: tile_count.max(MIN_TILE_COUNT),
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    pub fn start_interval(&self) -> Duration {
        Duration::from_millis(self.start_interval_ms)
    }

    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }

    pub fn ramp_step(&self) -> Duration {
        Duration::from_millis(self.ramp_step_ms)
    }
}
