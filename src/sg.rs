use crate::baseline::BaselineTable;
use crate::round::{Lie, Shot};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Fairway and rough starts at or inside this range count as short game.
pub const SHORT_GAME_RANGE_M: f64 = 30.0;

/// The four performance buckets every shot lands in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ShotCategory {
    Ott,
    App,
    Arg,
    Putt,
}

/// Category is decided by where the shot started, never by how it ended.
/// Fringe starts are short game even though their strokes lookup reads
/// the fairway curve; the two behaviors are intentionally different.
pub fn categorize(start_lie: Lie, start_distance_m: f64) -> ShotCategory {
    match start_lie {
        Lie::Tee => ShotCategory::Ott,
        Lie::Green => ShotCategory::Putt,
        Lie::Fringe | Lie::Bunker | Lie::Recovery => ShotCategory::Arg,
        Lie::Fairway | Lie::Rough => {
            if start_distance_m <= SHORT_GAME_RANGE_M {
                ShotCategory::Arg
            } else {
                ShotCategory::App
            }
        }
    }
}

/// Per-shot verdict. `sg` is None when the baseline has no coverage for
/// the start or end position; such a shot is unratable and must be
/// skipped by aggregation, never treated as zero. The category is still
/// filled in for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SgResult {
    pub sg: Option<f64>,
    pub category: ShotCategory,
    pub is_valid: bool,
}

/// Strokes gained for a single shot: expected strokes before, minus
/// expected strokes after, minus strokes actually spent. Pure function;
/// bad shot content produces an invalid result rather than an error so
/// batch scoring never aborts.
///
/// A holed shot ends the hole, so its end expectation is zero no matter
/// what the green curve would say about zero distance.
pub fn strokes_gained(table: &BaselineTable, shot: &Shot) -> SgResult {
    let category = categorize(shot.start_lie, shot.start_distance);

    let expected_start = table.expected_strokes(shot.start_lie, shot.start_distance);
    let expected_end = if shot.is_holed() {
        Some(0.0)
    } else {
        table.expected_strokes(shot.end_lie, shot.end_distance)
    };

    match (expected_start, expected_end) {
        (Some(start), Some(end)) => {
            let raw = start - end - f64::from(shot.strokes_used());
            SgResult {
                sg: Some(round3(raw)),
                category,
                is_valid: true,
            }
        }
        _ => SgResult {
            sg: None,
            category,
            is_valid: false,
        },
    }
}

/// Round to three decimals, halves away from zero, so reported values
/// carry no floating-point noise.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
