pub mod data;
pub mod loader;

use crate::error::{GbResult, GreenbookError};
use crate::round::Lie;
use strum::IntoEnumIterator;

/// Meters to feet, used for green reads.
pub const FEET_PER_METER: f64 = 3.28084;
/// Meters per yard, used for every other lie.
pub const METERS_PER_YARD: f64 = 0.9144;

/// Professional expected-strokes reference, one curve per lie.
///
/// Curves hold (distance, strokes) control points in the curve's native
/// unit: feet for the green, yards elsewhere. Fringe never gets a curve
/// of its own; fringe reads resolve against the fairway curve. The table
/// is built once at startup and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct BaselineTable {
    tee: Vec<(f64, f64)>,
    fairway: Vec<(f64, f64)>,
    rough: Vec<(f64, f64)>,
    bunker: Vec<(f64, f64)>,
    recovery: Vec<(f64, f64)>,
    green: Vec<(f64, f64)>,
}

impl BaselineTable {
    /// A table with no curves. Every estimate is unavailable until
    /// curves are installed via `set_curve`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The embedded tour-average table.
    pub fn tour() -> Self {
        let mut table = Self::empty();
        for &(lie, points) in data::CURVES {
            table
                .set_curve(lie, points.to_vec())
                .expect("embedded curve data is well-formed");
        }
        table
    }

    /// Install the curve for a lie. Points are sorted by distance;
    /// non-finite entries and duplicate distances are rejected so
    /// interpolation always sees a strictly increasing domain.
    pub fn set_curve(&mut self, lie: Lie, mut points: Vec<(f64, f64)>) -> GbResult<()> {
        if lie == Lie::Fringe {
            return Err(GreenbookError::Validation(
                "FRINGE has no baseline curve of its own (reads FAIRWAY)".to_string(),
            ));
        }
        if points
            .iter()
            .any(|&(d, s)| !d.is_finite() || d < 0.0 || !s.is_finite() || s <= 0.0)
        {
            return Err(GreenbookError::Validation(format!(
                "non-finite or non-positive control point in {} curve",
                lie
            )));
        }

        points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        if points.windows(2).any(|w| w[0].0 == w[1].0) {
            return Err(GreenbookError::Validation(format!(
                "duplicate distance in {} curve",
                lie
            )));
        }

        match lie {
            Lie::Tee => self.tee = points,
            Lie::Fairway => self.fairway = points,
            Lie::Rough => self.rough = points,
            Lie::Bunker => self.bunker = points,
            Lie::Recovery => self.recovery = points,
            Lie::Green => self.green = points,
            Lie::Fringe => unreachable!(),
        }
        Ok(())
    }

    /// Raw control points for a lie. None for fringe, which owns no curve.
    pub fn curve(&self, lie: Lie) -> Option<&[(f64, f64)]> {
        match lie {
            Lie::Tee => Some(&self.tee),
            Lie::Fairway => Some(&self.fairway),
            Lie::Rough => Some(&self.rough),
            Lie::Bunker => Some(&self.bunker),
            Lie::Recovery => Some(&self.recovery),
            Lie::Green => Some(&self.green),
            Lie::Fringe => None,
        }
    }

    /// Static health check: all six required curves populated. Advisory
    /// only; estimates still run against whatever curves exist.
    pub fn is_complete(&self) -> bool {
        Lie::iter()
            .filter(|&lie| lie != Lie::Fringe)
            .all(|lie| self.curve(lie).is_some_and(|c| !c.is_empty()))
    }

    /// Expected strokes for a professional to hole out from this lie and
    /// distance. Callers always pass meters; green reads convert to feet,
    /// everything else to yards. None means the resolved curve has no
    /// data and the shot cannot be rated.
    ///
    /// A non-finite or non-positive distance means the ball is already at
    /// (or past) the hole, so zero strokes remain. That is a documented
    /// edge case, not an error, and it wins over curve availability.
    pub fn expected_strokes(&self, lie: Lie, distance_meters: f64) -> Option<f64> {
        if !distance_meters.is_finite() || distance_meters <= 0.0 {
            return Some(0.0);
        }

        let (resolved, native) = match lie {
            Lie::Green => (Lie::Green, distance_meters * FEET_PER_METER),
            Lie::Fringe => (Lie::Fairway, distance_meters / METERS_PER_YARD),
            other => (other, distance_meters / METERS_PER_YARD),
        };

        let curve = self.curve(resolved)?;
        if curve.is_empty() {
            return None;
        }
        Some(interpolate(curve, native))
    }
}

/// Piecewise-linear lookup over strictly increasing control points.
/// Distances outside the curve clamp to the endpoint values; a boundary
/// hit resolves to the first bracketing pair.
fn interpolate(points: &[(f64, f64)], distance: f64) -> f64 {
    let (first_d, first_s) = points[0];
    if distance <= first_d {
        return first_s;
    }
    let (last_d, last_s) = points[points.len() - 1];
    if distance >= last_d {
        return last_s;
    }

    for pair in points.windows(2) {
        let (d0, s0) = pair[0];
        let (d1, s1) = pair[1];
        if d0 <= distance && distance <= d1 {
            return s0 + (distance - d0) / (d1 - d0) * (s1 - s0);
        }
    }
    last_s
}
