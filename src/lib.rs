// Library surface for the CLI, integration tests and any other front-end.
// Nothing in here reads the clock or draws anything.
pub mod app_dirs;
pub mod config;
pub mod difficulty;
pub mod history;
pub mod passage;
pub mod scoring;
pub mod session;
pub mod tips;
pub mod trend;

pub use difficulty::{Difficulty, UnknownDifficulty};
pub use history::{CsvHistoryStore, HistoryError, HistoryRecord, HistoryStore};
pub use passage::{select_passage, select_passage_with, Passage};
pub use scoring::{score, score_live, LiveScore, Score};
pub use session::{Session, SessionResult};
pub use tips::{advise, random_tip, TipLevel};
