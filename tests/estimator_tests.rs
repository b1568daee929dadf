use greenbook::baseline::BaselineTable;
use greenbook::error::GreenbookError;
use greenbook::round::Lie;

mod common;
use common::{assert_close, feet, mock_table, yards};

const TOL: f64 = 1e-6;

// --- CLAMPING ---

#[test]
fn clamps_below_first_control_point() {
    let table = mock_table();
    let v = table.expected_strokes(Lie::Tee, yards(50.0)).unwrap();
    assert_close(v, 3.0, TOL);
}

#[test]
fn clamps_above_last_control_point() {
    let table = mock_table();
    let v = table.expected_strokes(Lie::Tee, yards(300.0)).unwrap();
    assert_close(v, 4.0, TOL);
}

// --- INTERPOLATION ---

#[test]
fn interpolates_between_bracketing_points() {
    let table = mock_table();
    // 150 yd sits halfway along the 100->3.0, 200->4.0 tee segment
    let v = table.expected_strokes(Lie::Tee, yards(150.0)).unwrap();
    assert_close(v, 3.5, TOL);
}

#[test]
fn interior_control_point_returns_its_value() {
    let table = mock_table();
    let v = table.expected_strokes(Lie::Fairway, yards(100.0)).unwrap();
    assert_close(v, 3.0, TOL);
}

#[test]
fn interpolates_within_each_segment() {
    let table = mock_table();
    // 55 yd: 45/90 of the way from 2.0 to 3.0
    let v = table.expected_strokes(Lie::Fairway, yards(55.0)).unwrap();
    assert_close(v, 2.5, TOL);
    // 150 yd: halfway from 3.0 to 4.0
    let v = table.expected_strokes(Lie::Fairway, yards(150.0)).unwrap();
    assert_close(v, 3.5, TOL);
}

// --- UNITS ---

#[test]
fn green_reads_convert_to_feet() {
    let table = mock_table();
    let v = table.expected_strokes(Lie::Green, feet(10.0)).unwrap();
    assert_close(v, 1.6, TOL);
    // 20 ft: halfway from 1.6 to 2.0
    let v = table.expected_strokes(Lie::Green, feet(20.0)).unwrap();
    assert_close(v, 1.8, TOL);
}

// --- FRINGE ALIAS ---

#[test]
fn fringe_reads_the_fairway_curve() {
    let table = mock_table();
    for d in [yards(5.0), yards(55.0), yards(150.0), yards(400.0)] {
        assert_eq!(
            table.expected_strokes(Lie::Fringe, d),
            table.expected_strokes(Lie::Fairway, d),
            "fringe should alias fairway at {}m",
            d
        );
    }
}

#[test]
fn fringe_owns_no_curve() {
    assert!(mock_table().curve(Lie::Fringe).is_none());
    assert!(BaselineTable::tour().curve(Lie::Fringe).is_none());
}

// --- DEGENERATE DISTANCES ---

#[test]
fn zero_and_negative_distances_mean_holed() {
    let table = mock_table();
    assert_eq!(table.expected_strokes(Lie::Green, 0.0), Some(0.0));
    assert_eq!(table.expected_strokes(Lie::Fairway, -5.0), Some(0.0));
}

#[test]
fn non_finite_distances_mean_holed() {
    let table = mock_table();
    assert_eq!(table.expected_strokes(Lie::Tee, f64::NAN), Some(0.0));
    assert_eq!(table.expected_strokes(Lie::Tee, f64::INFINITY), Some(0.0));
    assert_eq!(table.expected_strokes(Lie::Tee, f64::NEG_INFINITY), Some(0.0));
}

#[test]
fn degenerate_distance_wins_over_missing_curve() {
    let table = BaselineTable::empty();
    assert_eq!(table.expected_strokes(Lie::Tee, 0.0), Some(0.0));
}

// --- AVAILABILITY ---

#[test]
fn missing_curve_is_unavailable() {
    let table = BaselineTable::empty();
    assert_eq!(table.expected_strokes(Lie::Tee, 150.0), None);
    assert_eq!(table.expected_strokes(Lie::Fringe, 20.0), None);
}

// --- COMPLETENESS ---

#[test]
fn tour_table_is_complete() {
    assert!(BaselineTable::tour().is_complete());
}

#[test]
fn empty_and_partial_tables_are_incomplete() {
    let mut table = BaselineTable::empty();
    assert!(!table.is_complete());

    table
        .set_curve(Lie::Tee, vec![(100.0, 3.0), (200.0, 4.0)])
        .unwrap();
    assert!(!table.is_complete());
}

// --- CONSTRUCTION ---

#[test]
fn set_curve_rejects_fringe() {
    let mut table = BaselineTable::empty();
    let err = table.set_curve(Lie::Fringe, vec![(10.0, 2.0)]).unwrap_err();
    assert!(matches!(err, GreenbookError::Validation(_)));
}

#[test]
fn set_curve_rejects_duplicate_distances() {
    let mut table = BaselineTable::empty();
    let err = table
        .set_curve(Lie::Tee, vec![(100.0, 3.0), (100.0, 3.1)])
        .unwrap_err();
    assert!(matches!(err, GreenbookError::Validation(_)));
}

#[test]
fn set_curve_rejects_non_finite_points() {
    let mut table = BaselineTable::empty();
    assert!(table.set_curve(Lie::Tee, vec![(f64::NAN, 3.0)]).is_err());
    assert!(table.set_curve(Lie::Tee, vec![(100.0, f64::INFINITY)]).is_err());
    assert!(table.set_curve(Lie::Tee, vec![(100.0, 0.0)]).is_err());
}

#[test]
fn set_curve_sorts_points() {
    let mut table = BaselineTable::empty();
    table
        .set_curve(Lie::Tee, vec![(200.0, 4.0), (100.0, 3.0)])
        .unwrap();
    let v = table.expected_strokes(Lie::Tee, yards(150.0)).unwrap();
    assert_close(v, 3.5, TOL);
}
