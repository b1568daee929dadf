use greenbook::baseline::loader;
use greenbook::error::GreenbookError;
use greenbook::round::Lie;
use std::io::Cursor;

// --- IN-MEMORY LOADING ---

#[test]
fn loads_curves_from_csv() {
    let data = "lie,distance,expected_strokes\n\
                TEE,100,3.0\n\
                TEE,200,4.0\n\
                GREEN,10,1.6\n";

    let table = loader::from_csv_reader(Cursor::new(data)).expect("csv load failed");
    assert_eq!(table.curve(Lie::Tee).unwrap().len(), 2);
    assert_eq!(table.curve(Lie::Green).unwrap().len(), 1);
    assert!(!table.is_complete());

    // distances are native units: 150 yd is 137.16 m
    let v = table.expected_strokes(Lie::Tee, 137.16).unwrap();
    assert!((v - 3.5).abs() < 1e-6);
}

#[test]
fn skips_malformed_rows() {
    let data = "lie,distance,expected_strokes\n\
                TEE,100,3.0\n\
                TEE,200\n\
                WATER,50,3.0\n\
                TEE,abc,3.0\n\
                TEE,NaN,3.0\n\
                TEE,300,-1.0\n\
                TEE,400,4.0\n";

    let table = loader::from_csv_reader(Cursor::new(data)).expect("csv load failed");
    assert_eq!(table.curve(Lie::Tee).unwrap().len(), 2);
}

#[test]
fn rejects_fringe_rows() {
    let data = "lie,distance,expected_strokes\nFRINGE,100,2.8\n";
    let err = loader::from_csv_reader(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, GreenbookError::Validation(_)));
}

#[test]
fn rejects_duplicate_distances() {
    let data = "lie,distance,expected_strokes\nTEE,100,3.0\nTEE,100,3.1\n";
    let err = loader::from_csv_reader(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, GreenbookError::Validation(_)));
}

#[test]
fn sorts_unordered_rows() {
    let data = "lie,distance,expected_strokes\nTEE,200,4.0\nTEE,100,3.0\n";
    let table = loader::from_csv_reader(Cursor::new(data)).expect("csv load failed");
    let curve = table.curve(Lie::Tee).unwrap();
    assert_eq!(curve[0], (100.0, 3.0));
    assert_eq!(curve[1], (200.0, 4.0));
}

// --- FILE LOADING ---

#[test]
fn loads_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline.csv");
    std::fs::write(
        &path,
        "lie,distance,expected_strokes\nFAIRWAY,100,2.8\nFAIRWAY,200,3.19\n",
    )
    .unwrap();

    let table = loader::from_csv_path(&path).expect("path load failed");
    assert_eq!(table.curve(Lie::Fairway).unwrap().len(), 2);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = loader::from_csv_path("definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, GreenbookError::Io(_)));
}
