//! Scoring module - points per clear pass and level progression
//!
//! Points depend only on how many rows one pass removed; there is no level
//! multiplier. Levels advance every `level_cost` burned lines up to the last
//! entry of the fall table.

use crate::types::LINE_SCORES;

/// Points for one clear pass removing `lines` rows.
///
/// Counts outside `1..=4` score 0.
pub fn score_for_lines(lines: u32) -> u32 {
    LINE_SCORES.get(lines as usize).copied().unwrap_or(0)
}

/// Level after burning `lines` in total, starting from `level`.
///
/// Advances one level at a time while `lines / level_cost >= level`, capped at
/// `max_level`. A level is never lowered.
pub fn level_after(level: u32, lines: u32, level_cost: u32, max_level: u32) -> u32 {
    if level_cost == 0 {
        return level;
    }
    let mut level = level;
    while level < max_level && lines / level_cost >= level {
        level += 1;
    }
    level
}

/// Gravity interval for a 1-based `level`, clamped to the table.
pub fn fall_interval_ms(table: &[u32], level: u32) -> u32 {
    let idx = (level.max(1) as usize - 1).min(table.len().saturating_sub(1));
    table.get(idx).copied().unwrap_or(0)
}
