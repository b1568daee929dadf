use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Surface the ball rests on. Decides which baseline curve applies and
/// whether the distance converts to feet (green) or yards (everything else).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Lie {
    Tee,
    Fairway,
    Rough,
    Bunker,
    Recovery,
    Fringe,
    Green,
}

/// One stroke within a hole, or a hole-ending putt sequence when `putts`
/// is present. Distances are always supplied in meters regardless of lie;
/// unit conversion happens inside the estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    pub hole_number: u32,
    pub shot_number: u32,
    pub start_lie: Lie,
    pub start_distance: f64,
    pub end_lie: Lie,
    pub end_distance: f64,
    #[serde(default)]
    pub penalty_strokes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub putts: Option<u32>,
}

impl Shot {
    /// The ball finished in the cup: distance zero on the green, or a
    /// recorded putt sequence (which by definition ends the hole).
    pub fn is_holed(&self) -> bool {
        (self.end_lie == Lie::Green && self.end_distance == 0.0)
            || (self.start_lie == Lie::Green && self.putts.is_some())
    }

    /// Strokes actually spent on this record: a putt sequence counts its
    /// recorded putts, anything else is exactly one swing, plus penalties.
    pub fn strokes_used(&self) -> u32 {
        if self.start_lie == Lie::Green {
            if let Some(putts) = self.putts {
                return putts + self.penalty_strokes;
            }
        }
        1 + self.penalty_strokes
    }
}

/// An ordered sequence of shots plus capture metadata. The scoring core
/// only ever reads the shots; appending and editing belong to the
/// capture workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    pub course: String,
    pub created: DateTime<Utc>,
    pub holes: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended: Option<DateTime<Utc>>,
    pub shots: Vec<Shot>,
}

impl Round {
    /// Short display label for report rows.
    pub fn label(&self) -> String {
        format!("{} {}", self.course, self.created.format("%Y-%m-%d"))
    }

    /// Advisory capture-boundary checks. Findings never block scoring;
    /// callers log them so data-entry slips stay visible.
    pub fn validate(&self) -> Vec<String> {
        let mut findings = Vec::new();

        if self.holes != 9 && self.holes != 18 {
            findings.push(format!("round targets {} holes (expected 9 or 18)", self.holes));
        }

        for shot in &self.shots {
            let tag = format!("hole {} shot {}", shot.hole_number, shot.shot_number);

            if shot.hole_number == 0 || shot.shot_number == 0 {
                findings.push(format!("{}: numbering is 1-based", tag));
            }
            if u32::from(self.holes) < shot.hole_number {
                findings.push(format!("{}: beyond the round's {} holes", tag, self.holes));
            }
            if shot.putts.is_some() && shot.start_lie != Lie::Green {
                findings.push(format!("{}: putt count recorded off the green", tag));
            }
            if shot.putts == Some(0) {
                findings.push(format!("{}: putt sequence with zero putts", tag));
            }
            if shot.start_distance < 0.0 || shot.end_distance < 0.0 {
                findings.push(format!("{}: negative distance", tag));
            }
        }

        findings
    }
}
