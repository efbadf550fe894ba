use serde::Serialize;

use crate::content;
use crate::progress::ProgressEngine;
use crate::store::PersistentStore;

/// A game the learner has not reached yet, for the "coming up" strip on the
/// play screen.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingUnlock {
    pub game_id: String,
    pub required_level: u32,
}

impl<S: PersistentStore> ProgressEngine<S> {
    /// Whether the learner's player level meets the game's unlock level.
    /// Games absent from the unlock table are open from the start.
    pub fn is_game_unlocked(&self, game_id: &str) -> bool {
        self.repo.load().player_level >= content::unlock_level_for(game_id)
    }

    /// The next `limit` locked games, ordered by required level ascending
    /// (ties keep table order).
    pub fn upcoming_unlocks(&self, limit: usize) -> Vec<UpcomingUnlock> {
        let player_level = self.repo.load().player_level;
        let mut locked: Vec<UpcomingUnlock> = content::GAME_UNLOCK_LEVELS
            .iter()
            .filter(|(_, required)| *required > player_level)
            .map(|(id, required)| UpcomingUnlock {
                game_id: id.to_string(),
                required_level: *required,
            })
            .collect();
        locked.sort_by_key(|u| u.required_level);
        locked.truncate(limit);
        locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn engine() -> ProgressEngine<MemoryStore> {
        ProgressEngine::new(MemoryStore::new())
    }

    #[test]
    fn test_starter_games_are_open() {
        let engine = engine();
        assert!(engine.is_game_unlocked("sequence-robot"));
        assert!(engine.is_game_unlocked("memory-match"));
        assert!(!engine.is_game_unlocked("loop-patterns"));
        assert!(!engine.is_game_unlocked("maze-runner"));
    }

    #[test]
    fn test_unconfigured_games_are_open() {
        let engine = engine();
        assert!(engine.is_game_unlocked("some-future-game"));
    }

    #[test]
    fn test_leveling_up_unlocks_games() {
        let engine = engine();
        engine.add_xp(50);
        assert!(engine.is_game_unlocked("loop-patterns"));
        assert!(engine.is_game_unlocked("number-sort"));
        assert!(!engine.is_game_unlocked("bug-hunter"));
    }

    #[test]
    fn test_upcoming_unlocks_sorted_and_truncated() {
        let engine = engine();
        engine.add_xp(50); // player level 2

        let upcoming = engine.upcoming_unlocks(4);
        assert_eq!(upcoming.len(), 4);
        // Level-3 games first, in table order
        assert_eq!(upcoming[0].game_id, "bug-hunter");
        assert_eq!(upcoming[0].required_level, 3);
        assert_eq!(upcoming[1].game_id, "variable-vault");
        assert_eq!(upcoming[2].game_id, "color-code");
        assert_eq!(upcoming[3].game_id, "block-builder");
        assert_eq!(upcoming[3].required_level, 4);
    }

    #[test]
    fn test_no_upcoming_unlocks_at_high_level() {
        let engine = engine();
        engine.add_xp(50 * 9);
        assert!(engine.upcoming_unlocks(10).is_empty());
    }
}
