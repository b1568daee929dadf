use crate::baseline::BaselineTable;
use crate::round::{Lie, Shot};
use crate::sg::{strokes_gained, ShotCategory};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use strum_macros::Display;

/// Valid strokes-gained totals for one round, split by category.
/// Unratable shots are left out of every sum and flagged instead of
/// being counted as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub ott: f64,
    pub app: f64,
    pub arg: f64,
    pub putt: f64,
    pub total: f64,
    pub has_unratable: bool,
}

impl RoundSummary {
    /// Single pass over a round's shots.
    pub fn for_shots(table: &BaselineTable, shots: &[Shot]) -> Self {
        let mut summary = Self::default();
        for shot in shots {
            let result = strokes_gained(table, shot);
            let Some(sg) = result.sg else {
                summary.has_unratable = true;
                continue;
            };
            match result.category {
                ShotCategory::Ott => summary.ott += sg,
                ShotCategory::App => summary.app += sg,
                ShotCategory::Arg => summary.arg += sg,
                ShotCategory::Putt => summary.putt += sg,
            }
            summary.total += sg;
        }
        summary
    }
}

/// Per-category means over a set of rounds (divided by round count, not
/// shot count), plus the best and worst round by total. An empty set is
/// a defined degenerate case: all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SgAverages {
    pub rounds: usize,
    pub ott: f64,
    pub app: f64,
    pub arg: f64,
    pub putt: f64,
    pub total: f64,
    pub best: f64,
    pub worst: f64,
}

impl SgAverages {
    pub fn across(summaries: &[RoundSummary]) -> Self {
        if summaries.is_empty() {
            return Self::default();
        }

        let mut acc = Self {
            rounds: summaries.len(),
            best: f64::NEG_INFINITY,
            worst: f64::INFINITY,
            ..Self::default()
        };
        for s in summaries {
            acc.ott += s.ott;
            acc.app += s.app;
            acc.arg += s.arg;
            acc.putt += s.putt;
            acc.total += s.total;
            acc.best = acc.best.max(s.total);
            acc.worst = acc.worst.min(s.total);
        }

        let n = summaries.len() as f64;
        acc.ott /= n;
        acc.app /= n;
        acc.arg /= n;
        acc.putt /= n;
        acc.total /= n;
        acc
    }
}

/// One row of the cross-round trend: a round's total and the cumulative
/// mean of totals up to and including it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub total: f64,
    pub running_avg: f64,
}

/// Running average of round totals, oldest round first.
pub fn trend(summaries: &[RoundSummary]) -> Vec<TrendPoint> {
    let mut points = Vec::with_capacity(summaries.len());
    let mut cumulative = 0.0;
    for (i, s) in summaries.iter().enumerate() {
        cumulative += s.total;
        points.push(TrendPoint {
            total: s.total,
            running_avg: cumulative / (i + 1) as f64,
        });
    }
    points
}

/// Per-hole stroke, penalty and strokes-gained sums.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleBreakdown {
    pub hole: u32,
    pub strokes: u32,
    pub penalties: u32,
    pub sg: f64,
}

/// Group shots by hole number, ascending. Stroke and penalty counts
/// include unratable shots; the SG column sums only valid ones.
pub fn hole_breakdown(table: &BaselineTable, shots: &[Shot]) -> Vec<HoleBreakdown> {
    let mut holes: BTreeMap<u32, HoleBreakdown> = BTreeMap::new();
    for shot in shots {
        let entry = holes.entry(shot.hole_number).or_insert(HoleBreakdown {
            hole: shot.hole_number,
            strokes: 0,
            penalties: 0,
            sg: 0.0,
        });
        entry.strokes += shot.strokes_used();
        entry.penalties += shot.penalty_strokes;
        if let Some(sg) = strokes_gained(table, shot).sg {
            entry.sg += sg;
        }
    }
    holes.into_values().collect()
}

/// Starting-distance bands used for the weakest-area insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DistanceBucket {
    /// Non-green starts under 100 m.
    Short,
    /// 100 m up to 200 m.
    Mid,
    /// 200 m and beyond.
    Long,
    /// Any shot that starts on the green.
    Putting,
}

pub fn bucket_for(start_lie: Lie, start_distance_m: f64) -> DistanceBucket {
    if start_lie == Lie::Green {
        DistanceBucket::Putting
    } else if start_distance_m < 100.0 {
        DistanceBucket::Short
    } else if start_distance_m < 200.0 {
        DistanceBucket::Mid
    } else {
        DistanceBucket::Long
    }
}

/// A bucket's summed valid SG and how many shots fed it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketInsight {
    pub bucket: DistanceBucket,
    pub sg: f64,
    pub shots: usize,
}

/// The single worst-performing distance bucket across the given shots,
/// by summed valid SG. None when nothing was ratable.
pub fn worst_bucket(table: &BaselineTable, shots: &[Shot]) -> Option<BucketInsight> {
    let mut buckets: HashMap<DistanceBucket, (f64, usize)> = HashMap::new();
    for shot in shots {
        if let Some(sg) = strokes_gained(table, shot).sg {
            let slot = buckets
                .entry(bucket_for(shot.start_lie, shot.start_distance))
                .or_default();
            slot.0 += sg;
            slot.1 += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(bucket, (sg, shots))| BucketInsight { bucket, sg, shots })
        .min_by(|a, b| a.sg.partial_cmp(&b.sg).unwrap())
}
