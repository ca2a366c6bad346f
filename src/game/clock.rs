use std::time::{Duration, Instant};

/// Frame-gated tick scheduler.
///
/// The clock is polled once per frame; it decides whether enough real time
/// has passed since the last applied tick to run another game update. The
/// first poll only establishes the baseline timestamp. When a frame arrives
/// late enough to span several intervals, they collapse into a single tick
/// rather than a catch-up burst.
#[derive(Debug, Default)]
pub struct GameClock {
    last_tick: Option<Instant>,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when a tick should run at `now`, and records `now` as
    /// the new reference if so.
    pub fn tick_due(&mut self, now: Instant, interval: Duration) -> bool {
        match self.last_tick {
            None => {
                self.last_tick = Some(now);
                false
            }
            Some(last) => {
                if now.duration_since(last) >= interval {
                    self.last_tick = Some(now);
                    true
                } else {
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(140);

    #[test]
    fn test_first_poll_establishes_baseline() {
        let mut clock = GameClock::new();
        let start = Instant::now();

        assert!(!clock.tick_due(start, INTERVAL));
    }

    #[test]
    fn test_tick_after_interval_elapsed() {
        let mut clock = GameClock::new();
        let start = Instant::now();

        clock.tick_due(start, INTERVAL);
        assert!(!clock.tick_due(start + Duration::from_millis(139), INTERVAL));
        assert!(clock.tick_due(start + Duration::from_millis(140), INTERVAL));
    }

    #[test]
    fn test_reference_resets_on_tick() {
        let mut clock = GameClock::new();
        let start = Instant::now();

        clock.tick_due(start, INTERVAL);
        assert!(clock.tick_due(start + Duration::from_millis(150), INTERVAL));
        // The reference moved to t=150, so t=200 is only 50ms later
        assert!(!clock.tick_due(start + Duration::from_millis(200), INTERVAL));
        assert!(clock.tick_due(start + Duration::from_millis(290), INTERVAL));
    }

    #[test]
    fn test_long_stall_collapses_to_one_tick() {
        let mut clock = GameClock::new();
        let start = Instant::now();

        clock.tick_due(start, INTERVAL);
        // Five intervals pass in one frame; only one tick fires
        assert!(clock.tick_due(start + Duration::from_millis(700), INTERVAL));
        assert!(!clock.tick_due(start + Duration::from_millis(701), INTERVAL));
    }

    #[test]
    fn test_interval_change_takes_effect() {
        let mut clock = GameClock::new();
        let start = Instant::now();

        clock.tick_due(start, INTERVAL);
        let faster = Duration::from_millis(60);
        assert!(clock.tick_due(start + Duration::from_millis(60), faster));
    }
}
