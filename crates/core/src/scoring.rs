//! Scoring and level progression
//!
//! Score is awarded per simultaneous line clear; level and gravity period
//! are a monotonic step function of cumulative score, inclusive at each
//! threshold.

use quadris_types::{BASE_TICK_MS, LINE_SCORES, SPEED_CURVE};

/// Level and gravity period derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedStep {
    pub level: u32,
    pub interval_ms: u64,
}

/// Points for clearing `lines` rows in one pass.
///
/// More than 4 cannot occur with a 4x4 piece and awards nothing.
pub fn score_for_lines(lines: usize) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines]
}

/// Resolve the level and gravity period for a cumulative score.
pub fn speed_for_score(score: u32) -> SpeedStep {
    for &(threshold, level, interval_ms) in SPEED_CURVE.iter() {
        if score >= threshold {
            return SpeedStep { level, interval_ms };
        }
    }
    SpeedStep {
        level: 1,
        interval_ms: BASE_TICK_MS,
    }
}
