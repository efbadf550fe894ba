//! The progression engine: tracks a learner's advancement across lessons,
//! quizzes and the multi-game curriculum, converts star awards into XP and
//! player levels, and gates which games are available.

pub mod badges;
pub mod games;
pub mod quiz;
pub mod record;
pub mod repository;
pub mod stars;
pub mod unlocks;
pub mod xp;

pub use badges::BadgeStatus;
pub use games::GameLevelOutcome;
pub use record::{GameLevelProgress, ProgressPatch, ProgressRecord};
pub use repository::{ProgressRepository, STORAGE_KEY};
pub use stars::LevelUpdate;
pub use unlocks::UpcomingUnlock;
pub use xp::{XpProgress, MAX_PLAYER_LEVEL, XP_PER_LEVEL};

use crate::store::PersistentStore;

/// Facade over the whole progression subsystem.
///
/// Constructed once at application start with the store to persist into, and
/// passed to every call site; all game/lesson/quiz screens report outcomes
/// through it. Every mutating operation is a complete load-modify-save cycle
/// against the single persisted record. There is exactly one writer — the
/// learner's UI thread — so no locking or versioning is needed.
pub struct ProgressEngine<S: PersistentStore> {
    repo: ProgressRepository<S>,
}

impl<S: PersistentStore> ProgressEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: ProgressRepository::new(store),
        }
    }

    /// The full current record, defaults if nothing is stored yet.
    pub fn get_progress(&self) -> ProgressRecord {
        self.repo.load()
    }

    /// Wipe all progress. The next read starts from the default record.
    pub fn reset_progress(&self) {
        self.repo.reset();
    }

    /// Progress toward the next player level, for the level bar.
    pub fn get_xp_progress(&self) -> XpProgress {
        let record = self.repo.load();
        xp::xp_progress(record.player_level, record.xp)
    }
}
