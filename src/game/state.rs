use std::time::Duration;

use super::direction::Direction;
use super::grid::Grid;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake: ordered body segments, head at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: Vec<Cell>,
}

impl Snake {
    /// Create a straight snake of the given length, extending backwards
    /// from the head against the direction of travel
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body }
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail cell (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Advance one step in `direction`, keeping the tail when growing
    pub fn advance(&mut self, direction: Direction, grow: bool) {
        let new_head = self.head().moved_in_direction(direction);
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Whether the current run is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Ended,
}

/// Type of collision that ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit its own body
    SelfCollision,
}

/// Complete game state for one run
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Direction applied on the most recent tick
    pub velocity: Direction,
    pub food: Cell,
    pub grid: Grid,
    pub score: u32,
    /// Current tick interval; shrinks as food is eaten
    pub interval: Duration,
    pub run_state: RunState,
}

impl GameState {
    pub fn new(
        snake: Snake,
        velocity: Direction,
        food: Cell,
        grid: Grid,
        interval: Duration,
    ) -> Self {
        Self {
            snake,
            velocity,
            food,
            grid,
            score: 0,
            interval,
            run_state: RunState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.moved_by(1, 0), Cell::new(6, 5));
        assert_eq!(cell.moved_by(-1, 0), Cell::new(4, 5));
        assert_eq!(cell.moved_in_direction(Direction::Down), Cell::new(5, 6));
        assert_eq!(cell.moved_in_direction(Direction::Up), Cell::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(5, 5));
        assert_eq!(snake.body[1], Cell::new(4, 5));
        assert_eq!(snake.body[2], Cell::new(3, 5));
        assert_eq!(snake.tail(), Cell::new(3, 5));
    }

    #[test]
    fn test_advance_without_growth() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);

        snake.advance(Direction::Right, false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.tail(), Cell::new(4, 5));
    }

    #[test]
    fn test_advance_with_growth() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);

        snake.advance(Direction::Right, true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.tail(), Cell::new(3, 5));
    }

    #[test]
    fn test_no_duplicate_cells_after_advance() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 4);
        snake.advance(Direction::Down, false);

        let mut cells = snake.body.clone();
        cells.sort_by_key(|c| (c.x, c.y));
        cells.dedup();
        assert_eq!(cells.len(), snake.len());
    }
}
