use crate::game::{Direction, GameState};

/// Buffers direction requests between ticks.
///
/// Holds at most one pending direction: asynchronous input sources may fire
/// any number of requests between two ticks, and the last accepted one wins.
/// A request is dropped when the run has ended or when it would reverse the
/// currently applied velocity (the queued-but-unapplied direction plays no
/// part in the check).
#[derive(Debug, Default)]
pub struct InputArbiter {
    queued: Option<Direction>,
}

impl InputArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_direction(&mut self, requested: Direction, state: &GameState) {
        if !state.is_running() {
            return;
        }
        if requested.is_opposite(state.velocity) {
            return;
        }
        self.queued = Some(requested);
    }

    /// Consume the pending direction at the start of a tick
    pub fn take(&mut self) -> Option<Direction> {
        self.queued.take()
    }

    /// Drop any pending direction (used on reset)
    pub fn clear(&mut self) {
        self.queued = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameConfig, GameEngine, RunState};

    fn running_state() -> GameState {
        // Snake heading right at the board center
        GameEngine::new(GameConfig::default()).reset()
    }

    #[test]
    fn test_accepts_perpendicular_request() {
        let state = running_state();
        let mut arbiter = InputArbiter::new();

        arbiter.request_direction(Direction::Up, &state);

        assert_eq!(arbiter.take(), Some(Direction::Up));
    }

    #[test]
    fn test_rejects_reversal_of_applied_velocity() {
        let state = running_state();
        let mut arbiter = InputArbiter::new();

        // Velocity is Right; Left must be ignored
        arbiter.request_direction(Direction::Left, &state);

        assert_eq!(arbiter.take(), None);
    }

    #[test]
    fn test_reversal_does_not_clobber_queued_direction() {
        let state = running_state();
        let mut arbiter = InputArbiter::new();

        arbiter.request_direction(Direction::Up, &state);
        arbiter.request_direction(Direction::Left, &state);

        // The rejected reversal leaves the earlier request in place
        assert_eq!(arbiter.take(), Some(Direction::Up));
    }

    #[test]
    fn test_last_request_wins() {
        let state = running_state();
        let mut arbiter = InputArbiter::new();

        arbiter.request_direction(Direction::Up, &state);
        arbiter.request_direction(Direction::Down, &state);

        // Down is checked against the applied velocity (Right), not against
        // the queued Up, so it overwrites it
        assert_eq!(arbiter.take(), Some(Direction::Down));
    }

    #[test]
    fn test_rejects_when_run_ended() {
        let mut state = running_state();
        state.run_state = RunState::Ended;
        let mut arbiter = InputArbiter::new();

        arbiter.request_direction(Direction::Up, &state);

        assert_eq!(arbiter.take(), None);
    }

    #[test]
    fn test_take_consumes() {
        let state = running_state();
        let mut arbiter = InputArbiter::new();

        arbiter.request_direction(Direction::Up, &state);
        assert_eq!(arbiter.take(), Some(Direction::Up));
        assert_eq!(arbiter.take(), None);
    }

    #[test]
    fn test_clear() {
        let state = running_state();
        let mut arbiter = InputArbiter::new();

        arbiter.request_direction(Direction::Up, &state);
        arbiter.clear();

        assert_eq!(arbiter.take(), None);
    }

    #[test]
    fn test_reversal_check_uses_velocity_not_food() {
        // Regression guard: the check must consult state.velocity even when
        // the snake has just turned
        let mut state = running_state();
        state.velocity = Direction::Up;
        state.food = Cell::new(0, 0);
        let mut arbiter = InputArbiter::new();

        arbiter.request_direction(Direction::Down, &state);
        assert_eq!(arbiter.take(), None);

        arbiter.request_direction(Direction::Right, &state);
        assert_eq!(arbiter.take(), Some(Direction::Right));
    }
}
