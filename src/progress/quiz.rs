use crate::error::{ProgressError, Result};
use crate::progress::record::ProgressPatch;
use crate::progress::ProgressEngine;
use crate::store::PersistentStore;

/// Stars for the first time a quiz is scored at 100%.
pub const PERFECT_SCORE_AWARD: u32 = 5;

/// Stars for the first time a quiz crosses 80%.
pub const HIGH_SCORE_AWARD: u32 = 3;

impl<S: PersistentStore> ProgressEngine<S> {
    /// Record a quiz attempt, keeping only the best score per quiz.
    ///
    /// A score at or below the stored best is a no-op. Threshold bonuses are
    /// judged against the previous best, so each one pays out at most once
    /// per quiz: crossing into 100% awards [`PERFECT_SCORE_AWARD`], crossing
    /// into ≥80% awards [`HIGH_SCORE_AWARD`].
    pub fn save_quiz_score(&self, quiz_id: &str, score: u32) -> Result<()> {
        if score > 100 {
            return Err(ProgressError::OutOfRange {
                what: "score",
                value: score as i64,
                min: 0,
                max: 100,
            });
        }

        let current = self.repo.load();
        let previous = current.quiz_scores.get(quiz_id).copied().unwrap_or(0);
        if score <= previous {
            return Ok(());
        }

        let mut quiz_scores = current.quiz_scores;
        quiz_scores.insert(quiz_id.to_string(), score);
        self.repo.save(ProgressPatch {
            quiz_scores: Some(quiz_scores),
            ..Default::default()
        });

        if score == 100 && previous < 100 {
            self.add_stars(PERFECT_SCORE_AWARD);
        } else if score >= 80 && previous < 80 {
            self.add_stars(HIGH_SCORE_AWARD);
        }

        Ok(())
    }
}
