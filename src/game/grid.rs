use super::state::{Cell, Snake};

/// The square board: `tile_count` x `tile_count` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub tile_count: usize,
}

impl Grid {
    pub fn new(tile_count: usize) -> Self {
        Self { tile_count }
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.tile_count * self.tile_count
    }

    /// Check if a cell lies outside the board bounds
    pub fn is_outside(&self, cell: Cell) -> bool {
        let max = self.tile_count as i32;
        cell.x < 0 || cell.x >= max || cell.y < 0 || cell.y >= max
    }

    /// Check if a cell is occupied by any snake segment
    pub fn is_occupied_by_snake(&self, cell: Cell, snake: &Snake) -> bool {
        snake.body.contains(&cell)
    }
}
