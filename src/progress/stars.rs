use serde::Serialize;

use crate::progress::record::ProgressPatch;
use crate::progress::{xp, ProgressEngine};
use crate::store::PersistentStore;

/// Fixed star-to-XP exchange rate.
pub const XP_PER_STAR: u32 = 5;

/// Flat award for completing a lesson for the first time.
pub const LESSON_STAR_AWARD: u32 = 3;

/// Result of an XP grant, so the UI can show a level-up celebration.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelUpdate {
    pub leveled_up: bool,
    pub level: u32,
}

impl<S: PersistentStore> ProgressEngine<S> {
    /// Grant `amount` XP and re-derive the player level.
    ///
    /// The previous level is recomputed from stored XP rather than read from
    /// the cached `playerLevel` field, so a stale cache can never suppress or
    /// fake a level-up.
    pub fn add_xp(&self, amount: u32) -> LevelUpdate {
        let current = self.repo.load();
        let previous_level = xp::level_for_xp(current.xp);
        let new_xp = current.xp.saturating_add(amount);
        let new_level = xp::level_for_xp(new_xp);

        self.repo.save(ProgressPatch {
            xp: Some(new_xp),
            player_level: Some(new_level),
            ..Default::default()
        });

        LevelUpdate {
            leveled_up: new_level > previous_level,
            level: new_level,
        }
    }

    /// Award `count` stars. `stars` and `totalStars` move in lockstep, and
    /// every star unconditionally carries [`XP_PER_STAR`] XP — this is the
    /// single path through which stars enter the record, so stars and XP
    /// cannot desynchronize.
    pub fn add_stars(&self, count: u32) {
        let current = self.repo.load();
        self.repo.save(ProgressPatch {
            stars: Some(current.stars.saturating_add(count)),
            total_stars: Some(current.total_stars.saturating_add(count)),
            ..Default::default()
        });
        self.add_xp(count.saturating_mul(XP_PER_STAR));
    }

    /// Record a finished lesson and award its stars. Replaying an already
    /// completed lesson is a no-op.
    pub fn complete_lesson(&self, lesson_id: &str) {
        let current = self.repo.load();
        if current.completed_lessons.iter().any(|id| id == lesson_id) {
            return;
        }

        let mut completed = current.completed_lessons;
        completed.push(lesson_id.to_string());
        self.repo.save(ProgressPatch {
            completed_lessons: Some(completed),
            ..Default::default()
        });
        self.add_stars(LESSON_STAR_AWARD);
    }
}
