use crate::difficulty::Difficulty;
use crate::passage::Passage;
use crate::scoring::{score, score_live, LiveScore};
use chrono::{DateTime, Local};

/// A practice session in progress. The caller owns the clock: the start
/// time and every elapsed duration are passed in, never read here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub passage: Passage,
    pub started_at: DateTime<Local>,
}

/// Outcome of one completed session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionResult {
    pub timestamp: DateTime<Local>,
    pub wpm: f64,
    pub accuracy: u8,
    pub errors: usize,
    pub difficulty: Difficulty,
}

impl Session {
    pub fn start(passage: Passage, started_at: DateTime<Local>) -> Self {
        Self {
            passage,
            started_at,
        }
    }

    pub fn reference(&self) -> &'static str {
        self.passage.text
    }

    /// Seconds between the start and `now`, zero if `now` is earlier.
    pub fn elapsed_secs(&self, now: DateTime<Local>) -> f64 {
        let elapsed = now.signed_duration_since(self.started_at);
        (elapsed.num_microseconds().unwrap_or(i64::MAX) as f64 / 1_000_000.0).max(0.0)
    }

    pub fn live(&self, typed: &str, elapsed_secs: f64) -> LiveScore {
        score_live(self.passage.text, typed, elapsed_secs)
    }

    pub fn finish(
        &self,
        typed: &str,
        elapsed_secs: f64,
        finished_at: DateTime<Local>,
    ) -> SessionResult {
        let s = score(self.passage.text, typed, elapsed_secs);
        SessionResult {
            timestamp: finished_at,
            wpm: s.wpm,
            accuracy: s.accuracy,
            errors: s.errors,
            difficulty: self.passage.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn passage() -> Passage {
        Passage {
            text: "Practice makes perfect",
            difficulty: Difficulty::Beginner,
        }
    }

    fn at(secs: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 10, 0, secs).unwrap()
    }

    #[test]
    fn finish_carries_difficulty_and_timestamp() {
        let session = Session::start(passage(), at(0));
        let result = session.finish("Practice makes perfect", 12.0, at(12));

        assert_eq!(result.difficulty, Difficulty::Beginner);
        assert_eq!(result.timestamp, at(12));
        assert_eq!(result.accuracy, 100);
        assert_eq!(result.errors, 0);
        assert_eq!(result.wpm, 15.0);
    }

    #[test]
    fn elapsed_is_measured_from_start() {
        let session = Session::start(passage(), at(0));
        assert_eq!(session.elapsed_secs(at(30)), 30.0);
        assert_eq!(
            session.elapsed_secs(at(1) + Duration::milliseconds(500)),
            1.5
        );
    }

    #[test]
    fn elapsed_before_start_is_zero() {
        let session = Session::start(passage(), at(10));
        assert_eq!(session.elapsed_secs(at(0)), 0.0);
    }

    #[test]
    fn live_score_tracks_partial_input() {
        let session = Session::start(passage(), at(0));
        let live = session.live("Practice", 6.0);
        assert_eq!(live.wpm, 10);
        assert_eq!(live.errors, "Practice makes perfect".len() - 8);
    }

    #[test]
    fn session_is_reusable_value() {
        let session = Session::start(passage(), at(0));
        let first = session.finish("Practice", 5.0, at(5));
        let second = session.finish("Practice", 5.0, at(5));
        assert_eq!(first, second);
        assert_eq!(session.reference(), "Practice makes perfect");
    }
}
