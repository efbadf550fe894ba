use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::content;

/// Per-game level progress. One entry per game id, created lazily the first
/// time a game is queried or played.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLevelProgress {
    pub game_id: String,
    /// Highest level the learner may currently play. Starts at 1, only
    /// increases.
    pub current_level: u32,
    pub max_level: u32,
    /// Best star result per level, index = level - 1. Sparse: levels past the
    /// end of the vector count as 0 stars.
    pub stars_earned: Vec<u32>,
}

impl GameLevelProgress {
    /// Fresh progress for a game the learner has never played.
    pub fn starting(game_id: &str) -> Self {
        Self {
            game_id: game_id.to_string(),
            current_level: 1,
            max_level: content::max_level_for(game_id),
            stars_earned: Vec::new(),
        }
    }

    /// Best star result recorded for `level` (1-based); 0 if never played.
    pub fn stars_for_level(&self, level: u32) -> u32 {
        self.stars_earned
            .get((level - 1) as usize)
            .copied()
            .unwrap_or(0)
    }
}

/// The single persisted aggregate: everything the game knows about one
/// learner's progress.
///
/// JSON field names are camelCase to stay byte-compatible with records the
/// web build already saved. The container-level `serde(default)` means fields
/// added after a blob was written fill in with defaults instead of failing
/// the whole load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressRecord {
    /// Spendable/display star count.
    pub stars: u32,
    /// Lifetime star count. Increases in lockstep with `stars` today; kept as
    /// a separate field for a future spend-stars feature.
    pub total_stars: u32,
    pub completed_lessons: Vec<String>,
    /// Ids of the form `<gameId>-complete`, added once every level of a game
    /// has been cleared with at least one star.
    pub completed_games: Vec<String>,
    pub game_levels: HashMap<String, GameLevelProgress>,
    /// Best score (0-100) per quiz id.
    pub quiz_scores: HashMap<String, u32>,
    pub badges: Vec<String>,
    /// Cached projection of `xp`; re-derived on every XP change, never
    /// authoritative on its own.
    pub player_level: u32,
    pub xp: u32,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            stars: 0,
            total_stars: 0,
            completed_lessons: Vec::new(),
            completed_games: Vec::new(),
            game_levels: HashMap::new(),
            quiz_scores: HashMap::new(),
            badges: Vec::new(),
            player_level: 1,
            xp: 0,
        }
    }
}

/// Partial update to a [`ProgressRecord`]. Only populated fields are written;
/// nested maps are replaced wholesale, so callers pass the full updated map.
#[derive(Clone, Debug, Default)]
pub struct ProgressPatch {
    pub stars: Option<u32>,
    pub total_stars: Option<u32>,
    pub completed_lessons: Option<Vec<String>>,
    pub completed_games: Option<Vec<String>>,
    pub game_levels: Option<HashMap<String, GameLevelProgress>>,
    pub quiz_scores: Option<HashMap<String, u32>>,
    pub badges: Option<Vec<String>>,
    pub player_level: Option<u32>,
    pub xp: Option<u32>,
}

impl ProgressPatch {
    /// Shallow-merge this patch over `record`, top-level fields only.
    pub fn apply(self, record: &mut ProgressRecord) {
        if let Some(stars) = self.stars {
            record.stars = stars;
        }
        if let Some(total_stars) = self.total_stars {
            record.total_stars = total_stars;
        }
        if let Some(completed_lessons) = self.completed_lessons {
            record.completed_lessons = completed_lessons;
        }
        if let Some(completed_games) = self.completed_games {
            record.completed_games = completed_games;
        }
        if let Some(game_levels) = self.game_levels {
            record.game_levels = game_levels;
        }
        if let Some(quiz_scores) = self.quiz_scores {
            record.quiz_scores = quiz_scores;
        }
        if let Some(badges) = self.badges {
            record.badges = badges;
        }
        if let Some(player_level) = self.player_level {
            record.player_level = player_level;
        }
        if let Some(xp) = self.xp {
            record.xp = xp;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = ProgressRecord::default();
        assert_eq!(record.stars, 0);
        assert_eq!(record.total_stars, 0);
        assert_eq!(record.player_level, 1);
        assert_eq!(record.xp, 0);
        assert!(record.completed_lessons.is_empty());
        assert!(record.game_levels.is_empty());
    }

    #[test]
    fn test_old_blob_fills_missing_fields_with_defaults() {
        // A blob saved before quizScores/badges existed
        let record: ProgressRecord =
            serde_json::from_str(r#"{"stars":7,"totalStars":7,"xp":35,"playerLevel":1}"#).unwrap();
        assert_eq!(record.stars, 7);
        assert_eq!(record.xp, 35);
        assert!(record.quiz_scores.is_empty());
        assert!(record.badges.is_empty());
        assert_eq!(record.player_level, 1);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let mut record = ProgressRecord {
            total_stars: 3,
            ..Default::default()
        };
        record
            .game_levels
            .insert("bug-hunter".into(), GameLevelProgress::starting("bug-hunter"));

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"totalStars\":3"));
        assert!(json.contains("\"completedLessons\""));
        assert!(json.contains("\"currentLevel\":1"));
        assert!(json.contains("\"starsEarned\":[]"));
    }

    #[test]
    fn test_patch_applies_only_populated_fields() {
        let mut record = ProgressRecord {
            stars: 5,
            total_stars: 5,
            xp: 25,
            ..Default::default()
        };

        ProgressPatch {
            xp: Some(40),
            player_level: Some(1),
            ..Default::default()
        }
        .apply(&mut record);

        assert_eq!(record.xp, 40);
        // Untouched fields survive
        assert_eq!(record.stars, 5);
        assert_eq!(record.total_stars, 5);
    }

    #[test]
    fn test_stars_for_level_treats_missing_as_zero() {
        let mut progress = GameLevelProgress::starting("pattern-match");
        progress.stars_earned = vec![2];
        assert_eq!(progress.stars_for_level(1), 2);
        assert_eq!(progress.stars_for_level(2), 0);
        assert_eq!(progress.stars_for_level(3), 0);
    }
}
