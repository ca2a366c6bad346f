//! Input adapters
//!
//! Keyboard and pointer events are translated into the two calls the game
//! core understands: a direction request or a restart. The arbiter sits
//! between the adapters and the tick loop, buffering one direction per tick.

pub mod arbiter;
pub mod handler;
pub mod swipe;

pub use arbiter::InputArbiter;
pub use handler::{InputHandler, KeyAction};
pub use swipe::SwipeTracker;
