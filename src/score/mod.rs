pub mod session;
pub mod store;

pub use session::SessionStats;
pub use store::{HighScoreStore, DEFAULT_STORE_FILE};
