use super::BaselineTable;
use crate::error::GbResult;
use crate::round::Lie;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Parse a baseline override from `lie,distance,expected_strokes` CSV.
/// Distances are given in the curve's native unit (feet for GREEN, yards
/// elsewhere). Malformed rows and unknown lies are skipped; rows that
/// would break a curve's strictly-increasing invariant are an error.
pub fn from_csv_reader<R: Read>(reader: R) -> GbResult<BaselineTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut curves: HashMap<Lie, Vec<(f64, f64)>> = HashMap::new();
    let mut skipped = 0usize;

    for record in rdr.records().flatten() {
        if record.len() < 3 {
            skipped += 1;
            continue;
        }
        let lie = match Lie::from_str(record[0].trim()) {
            Ok(lie) => lie,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        let distance: f64 = match record[1].trim().parse() {
            Ok(d) => d,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        let strokes: f64 = match record[2].trim().parse() {
            Ok(s) => s,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if !distance.is_finite() || distance < 0.0 || !strokes.is_finite() || strokes <= 0.0 {
            skipped += 1;
            continue;
        }
        curves.entry(lie).or_default().push((distance, strokes));
    }

    if skipped > 0 {
        debug!("Skipped {} malformed baseline rows", skipped);
    }

    let mut table = BaselineTable::empty();
    for (lie, points) in curves {
        table.set_curve(lie, points)?;
    }
    Ok(table)
}

pub fn from_csv_path<P: AsRef<Path>>(path: P) -> GbResult<BaselineTable> {
    let file = File::open(&path)?;
    let table = from_csv_reader(file)?;
    info!("📈 Baseline override loaded from {}", path.as_ref().display());
    Ok(table)
}
