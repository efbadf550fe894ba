use serde::Serialize;

use crate::content;
use crate::error::{ProgressError, Result};
use crate::progress::record::{GameLevelProgress, ProgressPatch};
use crate::progress::ProgressEngine;
use crate::store::PersistentStore;

/// Outcome of reporting a finished game level back to the engine.
///
/// `level_up`/`new_level` describe the game's own difficulty level, not the
/// player level. `unlocked_game` is a best-effort single-item notification:
/// if a player-level jump unlocks several games at once, only the first
/// match in table order is reported.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLevelOutcome {
    pub level_up: bool,
    pub new_level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_game: Option<String>,
}

impl<S: PersistentStore> ProgressEngine<S> {
    /// Per-game progress for `game_id`: the stored record if the game has
    /// been played, otherwise a fresh default. Read-only; the default is not
    /// persisted until the game is actually played.
    pub fn get_game_level(&self, game_id: &str) -> GameLevelProgress {
        let record = self.repo.load();
        record
            .game_levels
            .get(game_id)
            .cloned()
            .unwrap_or_else(|| GameLevelProgress::starting(game_id))
    }

    /// Record the result of a game-level attempt.
    ///
    /// - The recorded best for the level only ever increases; a worse replay
    ///   changes nothing.
    /// - The game's `currentLevel` advances only when the learner clears the
    ///   frontier level with at least one star.
    /// - Clearing every level with ≥1 star marks the whole game complete.
    /// - Only the improvement over the previous best is paid out in stars,
    ///   so replaying at the same result cannot farm XP.
    pub fn complete_game_level(
        &self,
        game_id: &str,
        level: u32,
        stars: u32,
    ) -> Result<GameLevelOutcome> {
        let max_level = content::max_level_for(game_id);
        if stars > 3 {
            return Err(ProgressError::OutOfRange {
                what: "stars",
                value: stars as i64,
                min: 0,
                max: 3,
            });
        }
        if level < 1 || level > max_level {
            return Err(ProgressError::OutOfRange {
                what: "level",
                value: level as i64,
                min: 1,
                max: max_level as i64,
            });
        }

        let current = self.repo.load();
        let mut game_progress = current
            .game_levels
            .get(game_id)
            .cloned()
            .unwrap_or_else(|| GameLevelProgress::starting(game_id));

        let previous_stars = game_progress.stars_for_level(level);
        if stars > previous_stars {
            let idx = (level - 1) as usize;
            if game_progress.stars_earned.len() <= idx {
                game_progress.stars_earned.resize(idx + 1, 0);
            }
            game_progress.stars_earned[idx] = stars;
        }

        // Advance only past the frontier level, never past the last one
        let old_current = game_progress.current_level;
        let new_current = if stars > 0 && level == old_current && level < max_level {
            level + 1
        } else {
            old_current
        };
        game_progress.current_level = old_current.max(new_current);

        // Whole game complete once every level holds at least one star
        let complete_id = format!("{game_id}-complete");
        let all_levels_done = game_progress.stars_earned.len() == max_level as usize
            && game_progress.stars_earned.iter().all(|&s| s >= 1);
        let mut completed_games = current.completed_games.clone();
        if all_levels_done && !completed_games.iter().any(|id| *id == complete_id) {
            completed_games.push(complete_id);
        }

        let mut game_levels = current.game_levels;
        game_levels.insert(game_id.to_string(), game_progress);
        self.repo.save(ProgressPatch {
            game_levels: Some(game_levels),
            completed_games: Some(completed_games),
            ..Default::default()
        });

        // Pay out the improvement over the previous best
        let stars_to_add = stars.saturating_sub(previous_stars);
        if stars_to_add > 0 {
            self.add_stars(stars_to_add);
        }

        // Did the player level land exactly on another game's unlock level?
        let player_level = self.repo.load().player_level;
        let unlocked_game = content::GAME_UNLOCK_LEVELS
            .iter()
            .find(|(id, required)| *required == player_level && *id != game_id)
            .map(|(id, _)| id.to_string());

        Ok(GameLevelOutcome {
            level_up: new_current > old_current,
            new_level: new_current,
            unlocked_game,
        })
    }

    /// Single-level games from the first release report through here; they
    /// are treated as level 1 of a multi-level game.
    pub fn complete_game(&self, game_id: &str, stars: u32) -> Result<GameLevelOutcome> {
        self.complete_game_level(game_id, 1, stars)
    }
}
