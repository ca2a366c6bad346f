use std::time::{Duration, Instant};

/// Per-session play statistics: elapsed time, games played, and the best
/// score seen so far (seeded from the persistent store at startup)
pub struct SessionStats {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new(high_score: u32) -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.games_played += 1;
    }

    /// Record the current score; returns true when it sets a new high
    /// score, meaning the caller should persist it
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new(0);
        stats.elapsed_time = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.elapsed_time = Duration::from_secs(0);
        assert_eq!(stats.format_time(), "00:00");

        stats.elapsed_time = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_is_monotonic() {
        let mut stats = SessionStats::new(0);

        assert!(stats.record_score(10));
        assert_eq!(stats.high_score, 10);

        assert!(!stats.record_score(5));
        assert_eq!(stats.high_score, 10);

        assert!(stats.record_score(15));
        assert_eq!(stats.high_score, 15);
    }

    #[test]
    fn test_high_score_seeded_from_store() {
        let mut stats = SessionStats::new(20);

        // Matching the stored high score is not a new record
        assert!(!stats.record_score(20));
        assert!(stats.record_score(21));
    }

    #[test]
    fn test_game_start_resets_time_and_counts() {
        let mut stats = SessionStats::new(0);
        std::thread::sleep(Duration::from_millis(50));
        stats.update();

        assert!(stats.elapsed_time.as_millis() >= 50);

        stats.on_game_start();
        stats.update();
        assert!(stats.elapsed_time.as_millis() < 50);
        assert_eq!(stats.games_played, 1);
    }
}
