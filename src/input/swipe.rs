use crate::game::Direction;

/// A drag registers as a swipe only when its dominant-axis displacement
/// exceeds this; anything at or below it is treated as accidental.
const SWIPE_THRESHOLD: i32 = 10;

/// Turns press/release coordinate pairs into swipe directions.
///
/// The dominant axis of the displacement picks the direction. Releases
/// without a recorded press, and drags within the threshold, are ignored.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<(i32, i32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, x: i32, y: i32) {
        self.start = Some((x, y));
    }

    pub fn release(&mut self, x: i32, y: i32) -> Option<Direction> {
        let (start_x, start_y) = self.start.take()?;
        let dx = x - start_x;
        let dy = y - start_y;

        if dx.abs().max(dy.abs()) <= SWIPE_THRESHOLD {
            return None;
        }

        Direction::from_dominant_axis(dx, dy)
    }
}
