#![allow(dead_code)] // shared helpers; not every test binary uses all of them

use greenbook::baseline::{BaselineTable, FEET_PER_METER, METERS_PER_YARD};
use greenbook::round::{Lie, Shot};

/// Meters that resolve to this many yards inside the estimator.
pub fn yards(y: f64) -> f64 {
    y * METERS_PER_YARD
}

/// Meters that resolve to this many feet on the green.
pub fn feet(f: f64) -> f64 {
    f / FEET_PER_METER
}

pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Builder for Shot to clean up tests
pub struct ShotBuilder {
    shot: Shot,
}

impl ShotBuilder {
    pub fn new(start_lie: Lie, start_m: f64) -> Self {
        Self {
            shot: Shot {
                hole_number: 1,
                shot_number: 1,
                start_lie,
                start_distance: start_m,
                end_lie: Lie::Green,
                end_distance: 0.0,
                penalty_strokes: 0,
                putts: None,
            },
        }
    }

    pub fn hole(mut self, hole: u32, number: u32) -> Self {
        self.shot.hole_number = hole;
        self.shot.shot_number = number;
        self
    }

    pub fn end(mut self, lie: Lie, m: f64) -> Self {
        self.shot.end_lie = lie;
        self.shot.end_distance = m;
        self
    }

    pub fn penalties(mut self, n: u32) -> Self {
        self.shot.penalty_strokes = n;
        self
    }

    pub fn putts(mut self, n: u32) -> Self {
        self.shot.putts = Some(n);
        self
    }

    pub fn build(self) -> Shot {
        self.shot
    }
}

/// Small hand-built table with round numbers, so expectations in tests
/// can be computed on paper.
///
/// Yards: TEE (100,3.0)-(200,4.0); FAIRWAY (10,2.0)-(100,3.0)-(200,4.0);
/// ROUGH (10,2.5)-(100,3.3)-(200,4.3); BUNKER (10,2.8)-(100,3.5)-(200,4.5);
/// RECOVERY (50,3.5)-(200,5.0). Feet: GREEN (3,1.0)-(10,1.6)-(30,2.0)-(60,2.2).
pub fn mock_table() -> BaselineTable {
    let mut table = BaselineTable::empty();
    table
        .set_curve(Lie::Tee, vec![(100.0, 3.0), (200.0, 4.0)])
        .unwrap();
    table
        .set_curve(Lie::Fairway, vec![(10.0, 2.0), (100.0, 3.0), (200.0, 4.0)])
        .unwrap();
    table
        .set_curve(Lie::Rough, vec![(10.0, 2.5), (100.0, 3.3), (200.0, 4.3)])
        .unwrap();
    table
        .set_curve(Lie::Bunker, vec![(10.0, 2.8), (100.0, 3.5), (200.0, 4.5)])
        .unwrap();
    table
        .set_curve(Lie::Recovery, vec![(50.0, 3.5), (200.0, 5.0)])
        .unwrap();
    table
        .set_curve(
            Lie::Green,
            vec![(3.0, 1.0), (10.0, 1.6), (30.0, 2.0), (60.0, 2.2)],
        )
        .unwrap();
    table
}

/// Same table minus the rough curve, for unratable-shot scenarios.
pub fn table_missing_rough() -> BaselineTable {
    let mut table = mock_table();
    table.set_curve(Lie::Rough, vec![]).unwrap();
    table
}
