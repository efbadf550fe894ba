use serde::Serialize;

/// Flat XP cost per player level; level thresholds are not scaled.
pub const XP_PER_LEVEL: u32 = 50;

/// Highest reachable player level. XP keeps accumulating past the cap but no
/// longer changes the level.
pub const MAX_PLAYER_LEVEL: u32 = 10;

/// Player level for a cumulative XP total. Level 1 at 0 XP, one level per
/// [`XP_PER_LEVEL`], clamped at [`MAX_PLAYER_LEVEL`].
pub fn level_for_xp(xp: u32) -> u32 {
    (xp / XP_PER_LEVEL + 1).min(MAX_PLAYER_LEVEL)
}

/// Progress toward the next player level, for the level bar on the home
/// screen.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XpProgress {
    /// XP earned within the current level.
    pub current: u32,
    /// XP needed to finish a level (always [`XP_PER_LEVEL`]).
    pub needed: u32,
    /// 0-100. Clamped: at max level the accumulated XP can overshoot.
    pub percent: u32,
}

/// Compute the display fraction for `xp` at `player_level`.
pub fn xp_progress(player_level: u32, xp: u32) -> XpProgress {
    let level_floor = player_level.saturating_sub(1) * XP_PER_LEVEL;
    let current = xp.saturating_sub(level_floor);
    XpProgress {
        current,
        needed: XP_PER_LEVEL,
        percent: (current.saturating_mul(100) / XP_PER_LEVEL).min(100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(XP_PER_LEVEL - 1), 1);
        assert_eq!(level_for_xp(XP_PER_LEVEL), 2);
        assert_eq!(level_for_xp(XP_PER_LEVEL * (MAX_PLAYER_LEVEL - 1)), MAX_PLAYER_LEVEL);
    }

    #[test]
    fn test_level_clamps_at_max() {
        assert_eq!(level_for_xp(XP_PER_LEVEL * MAX_PLAYER_LEVEL), MAX_PLAYER_LEVEL);
        assert_eq!(level_for_xp(u32::MAX / 2), MAX_PLAYER_LEVEL);
    }

    #[test]
    fn test_level_is_monotonic() {
        let mut last = 0;
        for xp in (0..XP_PER_LEVEL * (MAX_PLAYER_LEVEL + 2)).step_by(7) {
            let level = level_for_xp(xp);
            assert!(level >= last, "level decreased at xp={xp}");
            last = level;
        }
    }

    #[test]
    fn test_progress_within_a_level() {
        let p = xp_progress(2, 65);
        assert_eq!(p.current, 15);
        assert_eq!(p.needed, XP_PER_LEVEL);
        assert_eq!(p.percent, 30);
    }

    #[test]
    fn test_progress_percent_clamps_at_max_level() {
        // At max level xp overshoots the level floor indefinitely
        let p = xp_progress(MAX_PLAYER_LEVEL, XP_PER_LEVEL * MAX_PLAYER_LEVEL + 123);
        assert_eq!(p.percent, 100);
    }
}
