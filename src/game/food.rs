use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::Grid;
use super::state::{Cell, Snake};

/// How many random draws to attempt before falling back to a full scan.
/// Rejection sampling is fast while the board is mostly empty, but its
/// expected cost grows without bound as the snake fills the grid.
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// Pick a food cell uniformly at random from the cells not occupied by the
/// snake.
///
/// Returns `None` only when the snake covers the entire board.
pub fn place<R: Rng>(rng: &mut R, grid: &Grid, snake: &Snake) -> Option<Cell> {
    let max = grid.tile_count as i32;

    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let cell = Cell::new(rng.gen_range(0..max), rng.gen_range(0..max));
        if !grid.is_occupied_by_snake(cell, snake) {
            return Some(cell);
        }
    }

    // Dense board: enumerate the free cells and pick one directly
    let free: Vec<Cell> = (0..max)
        .flat_map(|y| (0..max).map(move |x| Cell::new(x, y)))
        .filter(|cell| !grid.is_occupied_by_snake(*cell, snake))
        .collect();

    free.choose(rng).copied()
}
