use rand::rngs::ThreadRng;

use super::{
    config::GameConfig,
    direction::Direction,
    food,
    grid::Grid,
    state::{Cell, CollisionType, GameState, RunState, Snake},
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Set when the tick ended the run
    pub collision: Option<CollisionType>,
}

/// The game engine: advances a [`GameState`] one tick at a time
pub struct GameEngine {
    config: GameConfig,
    rng: ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a fresh run: straight snake at the board center heading right,
    /// score 0, interval back to its starting value, fresh food
    pub fn reset(&mut self) -> GameState {
        let grid = Grid::new(self.config.tile_count);
        let center = (self.config.tile_count / 2) as i32;

        let snake = Snake::new(
            Cell::new(center, center),
            Direction::Right,
            self.config.start_length,
        );

        // GameConfig::new clamps the board size, so the starting snake
        // always leaves free cells
        let food = food::place(&mut self.rng, &grid, &snake)
            .expect("starting snake is smaller than the board");

        GameState::new(
            snake,
            Direction::Right,
            food,
            grid,
            self.config.start_interval(),
        )
    }

    /// Advance the game by one tick.
    ///
    /// `queued` is the direction the input arbiter accepted since the last
    /// tick, if any; it becomes the applied velocity before the snake moves.
    /// A collision transitions the run to [`RunState::Ended`] and leaves the
    /// snake untouched. Does nothing once the run has ended.
    pub fn tick(&mut self, state: &mut GameState, queued: Option<Direction>) -> TickResult {
        if !state.is_running() {
            return TickResult::default();
        }

        if let Some(direction) = queued {
            state.velocity = direction;
        }

        let next_head = state.snake.head().moved_in_direction(state.velocity);

        // Collision is judged against the pre-move body: the cell holding
        // the tail counts as occupied even though the tail is about to move
        if let Some(collision) = self.check_collision(state, next_head) {
            state.run_state = RunState::Ended;
            return TickResult {
                ate_food: false,
                collision: Some(collision),
            };
        }

        let ate_food = next_head == state.food;
        state.snake.advance(state.velocity, ate_food);

        if ate_food {
            state.score += 1;
            state.interval = state
                .interval
                .saturating_sub(self.config.ramp_step())
                .max(self.config.min_interval());

            if let Some(food) = food::place(&mut self.rng, &state.grid, &state.snake) {
                state.food = food;
            }
        }

        TickResult {
            ate_food,
            collision: None,
        }
    }

    fn check_collision(&self, state: &GameState, cell: Cell) -> Option<CollisionType> {
        if state.grid.is_outside(cell) {
            return Some(CollisionType::Wall);
        }

        if state.grid.is_occupied_by_snake(cell, &state.snake) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }
}
