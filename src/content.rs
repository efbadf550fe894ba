//! Static curriculum tables: which games exist, the player level that
//! unlocks each of them, and how many difficulty levels each game has.
//!
//! These are content constants known at build time, not runtime state. The
//! table order matters for unlock notifications: when several games share a
//! required level, the earlier entry wins.

/// Player level required to unlock each game.
pub const GAME_UNLOCK_LEVELS: &[(&str, u32)] = &[
    ("sequence-robot", 1),
    ("pattern-match", 1),
    ("memory-match", 1),
    ("loop-patterns", 2),
    ("if-else-path", 2),
    ("number-sort", 2),
    ("bug-hunter", 3),
    ("variable-vault", 3),
    ("color-code", 3),
    ("block-builder", 4),
    ("array-adventure", 4),
    ("function-factory", 4),
    ("maze-runner", 5),
    ("binary-basics", 5),
];

/// Difficulty levels per game.
pub const GAME_MAX_LEVELS: &[(&str, u32)] = &[
    ("sequence-robot", 3),
    ("pattern-match", 3),
    ("memory-match", 3),
    ("loop-patterns", 3),
    ("if-else-path", 3),
    ("number-sort", 3),
    ("bug-hunter", 3),
    ("variable-vault", 3),
    ("color-code", 3),
    ("block-builder", 3),
    ("array-adventure", 3),
    ("function-factory", 3),
    ("maze-runner", 3),
    ("binary-basics", 3),
];

/// Lesson ids taught on the Learn screen, in curriculum order.
pub const LESSONS: &[&str] = &["program", "sequence", "loops", "conditions", "variables"];

/// Unconfigured games are playable from the start.
pub const DEFAULT_UNLOCK_LEVEL: u32 = 1;

/// Unconfigured games get the standard three difficulty levels.
pub const DEFAULT_MAX_LEVEL: u32 = 3;

/// Player level required to play `game_id`.
pub fn unlock_level_for(game_id: &str) -> u32 {
    GAME_UNLOCK_LEVELS
        .iter()
        .find(|(id, _)| *id == game_id)
        .map(|(_, level)| *level)
        .unwrap_or(DEFAULT_UNLOCK_LEVEL)
}

/// Number of difficulty levels in `game_id`.
pub fn max_level_for(game_id: &str) -> u32 {
    GAME_MAX_LEVELS
        .iter()
        .find(|(id, _)| *id == game_id)
        .map(|(_, max)| *max)
        .unwrap_or(DEFAULT_MAX_LEVEL)
}
