//! High-score persistence
//!
//! The high score lives in a single small file holding the integer in JSON
//! form. A missing or unreadable file is the same as a score of zero; only
//! saving can fail loudly.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_STORE_FILE: &str = "snake-high-score";

pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored high score; absent or malformed data counts as 0
    pub fn load(&self) -> u32 {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_json::from_str(contents.trim()).ok())
            .unwrap_or(0)
    }

    /// Persist a new high score, creating parent directories if needed
    pub fn save(&self, high_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        let contents = serde_json::to_string(&high_score).context("Failed to encode high score")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write high score to {:?}", self.path))?;

        Ok(())
    }
}
