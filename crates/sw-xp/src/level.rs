//! Level arithmetic.

/// XP required per level.
pub const XP_PER_LEVEL: i64 = 100;

/// Level reached with `xp` points: `floor(xp / per_level) + 1`.
///
/// Division rounds toward negative infinity, so negative XP yields
/// levels below 1.
pub fn level_for_xp(xp: i64, per_level: i64) -> i64 {
    xp.div_euclid(per_level).saturating_add(1)
}

/// XP still needed to reach the next level boundary.
///
/// Exactly on a boundary this is a full `per_level`, never 0. The remainder
/// truncates toward zero, so negative XP reports more than a level's worth
/// (-30 XP gives 130).
pub fn xp_to_next_level(xp: i64, per_level: i64) -> i64 {
    per_level - xp % per_level
}
