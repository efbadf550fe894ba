//! KidCode progression engine.
//!
//! Tracks one learner's advancement through the KidCode curriculum: lessons,
//! quizzes and the multi-level coding games. Raw performance (stars per
//! attempt, quiz scores) flows in from the game screens; the engine converts
//! it into persistent stars, XP and a player level, and answers which games
//! and badges that level has unlocked.
//!
//! Everything is synchronous and single-writer. State lives in one JSON blob
//! behind the [`store::PersistentStore`] trait; the UI shells plug in their
//! own storage (the desktop build uses [`store::FileStore`]).

mod content;
mod error;
pub mod progress;
pub mod store;

pub use content::{GAME_MAX_LEVELS, GAME_UNLOCK_LEVELS, LESSONS};
pub use error::{ProgressError, Result};
pub use progress::{
    BadgeStatus, GameLevelOutcome, GameLevelProgress, LevelUpdate, ProgressEngine, ProgressRecord,
    UpcomingUnlock, XpProgress, MAX_PLAYER_LEVEL, XP_PER_LEVEL,
};
pub use store::{FileStore, MemoryStore, PersistentStore};
