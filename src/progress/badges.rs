use serde::Serialize;

use crate::content;
use crate::progress::record::{ProgressPatch, ProgressRecord};
use crate::progress::{xp, ProgressEngine};
use crate::store::PersistentStore;

/// A named achievement and the rule that earns it.
///
/// The predicate answers "currently qualifies" from live state; the persisted
/// `badges` set in the record answers "ever earned" (ids are added via
/// [`ProgressEngine::earn_badge`] and never removed).
pub struct BadgeSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    predicate: fn(&ProgressRecord) -> bool,
}

fn all_lessons_done(record: &ProgressRecord) -> bool {
    content::LESSONS
        .iter()
        .all(|lesson| record.completed_lessons.iter().any(|id| id == lesson))
}

/// The fixed badge list shown on the progress screen.
pub const BADGES: &[BadgeSpec] = &[
    BadgeSpec {
        id: "first-lesson",
        name: "First Steps",
        icon: "🎓",
        description: "Complete your first lesson",
        predicate: |r| !r.completed_lessons.is_empty(),
    },
    BadgeSpec {
        id: "all-lessons",
        name: "Scholar",
        icon: "📚",
        description: "Complete all lessons",
        predicate: all_lessons_done,
    },
    BadgeSpec {
        id: "first-game",
        name: "Player One",
        icon: "🎮",
        description: "Clear your first game level",
        predicate: |r| {
            r.game_levels
                .values()
                .any(|g| g.stars_earned.iter().any(|&s| s > 0))
        },
    },
    BadgeSpec {
        id: "quiz-master",
        name: "Quiz Master",
        icon: "🏆",
        description: "Score 80% or higher on a quiz",
        predicate: |r| r.quiz_scores.values().any(|&score| score >= 80),
    },
    BadgeSpec {
        id: "star-collector",
        name: "Star Collector",
        icon: "⭐",
        description: "Earn 20 stars",
        predicate: |r| r.total_stars >= 20,
    },
    BadgeSpec {
        id: "level-5",
        name: "Rising Coder",
        icon: "🚀",
        description: "Reach player level 5",
        predicate: |r| r.player_level >= 5,
    },
    BadgeSpec {
        id: "max-level",
        name: "Code Legend",
        icon: "👑",
        description: "Reach the highest player level",
        predicate: |r| r.player_level >= xp::MAX_PLAYER_LEVEL,
    },
    BadgeSpec {
        id: "super-coder",
        name: "Super Coder",
        icon: "💻",
        description: "Complete everything",
        predicate: |r| all_lessons_done(r) && r.completed_games.len() >= 3,
    },
];

/// Whether `record` currently satisfies the badge's rule. Unknown ids never
/// qualify.
pub fn qualifies(record: &ProgressRecord, badge_id: &str) -> bool {
    BADGES
        .iter()
        .find(|b| b.id == badge_id)
        .is_some_and(|b| (b.predicate)(record))
}

/// Ids of every badge `record` currently qualifies for.
pub fn earned_badges(record: &ProgressRecord) -> Vec<&'static str> {
    BADGES
        .iter()
        .filter(|b| (b.predicate)(record))
        .map(|b| b.id)
        .collect()
}

/// One badge card for the progress screen.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeStatus {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

impl<S: PersistentStore> ProgressEngine<S> {
    /// Every badge with its live qualification, in display order.
    pub fn badge_statuses(&self) -> Vec<BadgeStatus> {
        let record = self.repo.load();
        BADGES
            .iter()
            .map(|b| BadgeStatus {
                id: b.id,
                name: b.name,
                icon: b.icon,
                description: b.description,
                unlocked: (b.predicate)(&record),
            })
            .collect()
    }

    /// Persist a badge as earned. Adding an id that is already present is a
    /// no-op; earned badges are never removed.
    pub fn earn_badge(&self, badge_id: &str) {
        let current = self.repo.load();
        if current.badges.iter().any(|id| id == badge_id) {
            return;
        }
        let mut badges = current.badges;
        badges.push(badge_id.to_string());
        self.repo.save(ProgressPatch {
            badges: Some(badges),
            ..Default::default()
        });
    }
}
