use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use greenbook::aggregate::{HoleBreakdown, RoundSummary, SgAverages, TrendPoint};
use greenbook::baseline::BaselineTable;
use greenbook::round::{Lie, Shot};
use greenbook::sg::SgResult;
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

// Unratable shots render as a dash, never as zero.
fn sg_cell(sg: Option<f64>) -> Cell {
    match sg {
        Some(v) if v < 0.0 => Cell::new(format!("{:+.3}", v)).fg(Color::Red),
        Some(v) => Cell::new(format!("{:+.3}", v)).fg(Color::Green),
        None => Cell::new("—").fg(Color::DarkGrey),
    }
}

pub fn shot_table(results: &[(Shot, SgResult)]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Hole").add_attribute(Attribute::Bold),
        Cell::new("Shot"),
        Cell::new("Cat").fg(Color::Cyan),
        Cell::new("Start"),
        Cell::new("Dist m"),
        Cell::new("End"),
        Cell::new("Dist m"),
        Cell::new("Pen"),
        Cell::new("SG").add_attribute(Attribute::Bold),
    ]);
    align_right(&mut table, 3..=8);

    for (shot, result) in results {
        table.add_row(vec![
            Cell::new(shot.hole_number),
            Cell::new(shot.shot_number),
            Cell::new(result.category).fg(Color::Cyan),
            Cell::new(shot.start_lie),
            Cell::new(format!("{:.1}", shot.start_distance)),
            Cell::new(shot.end_lie),
            Cell::new(format!("{:.1}", shot.end_distance)),
            Cell::new(shot.penalty_strokes),
            sg_cell(result.sg),
        ]);
    }
    println!("\n{}", table);
}

pub fn summary_table(rows: &[(String, RoundSummary)]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Round").add_attribute(Attribute::Bold),
        Cell::new("OTT"),
        Cell::new("APP"),
        Cell::new("ARG"),
        Cell::new("PUTT"),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Note"),
    ]);
    align_right(&mut table, 1..=5);

    for (label, s) in rows {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(format!("{:+.2}", s.ott)),
            Cell::new(format!("{:+.2}", s.app)),
            Cell::new(format!("{:+.2}", s.arg)),
            Cell::new(format!("{:+.2}", s.putt)),
            Cell::new(format!("{:+.2}", s.total)).fg(Color::Cyan),
            if s.has_unratable {
                Cell::new("baseline incomplete").fg(Color::Yellow)
            } else {
                Cell::new("")
            },
        ]);
    }
    println!("\n{}", table);
}

pub fn averages_table(avg: &SgAverages) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Rounds").add_attribute(Attribute::Bold),
        Cell::new("OTT"),
        Cell::new("APP"),
        Cell::new("ARG"),
        Cell::new("PUTT"),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Best").fg(Color::Green),
        Cell::new("Worst").fg(Color::Red),
    ]);
    align_right(&mut table, 1..=7);

    table.add_row(vec![
        Cell::new(avg.rounds),
        Cell::new(format!("{:+.2}", avg.ott)),
        Cell::new(format!("{:+.2}", avg.app)),
        Cell::new(format!("{:+.2}", avg.arg)),
        Cell::new(format!("{:+.2}", avg.putt)),
        Cell::new(format!("{:+.2}", avg.total)).fg(Color::Cyan),
        Cell::new(format!("{:+.2}", avg.best)).fg(Color::Green),
        Cell::new(format!("{:+.2}", avg.worst)).fg(Color::Red),
    ]);
    println!("\n{}", table);
}

pub fn trend_table(rows: &[(String, RoundSummary)], points: &[TrendPoint]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Round").add_attribute(Attribute::Bold),
        Cell::new("Total"),
        Cell::new("Running Avg").fg(Color::Cyan),
    ]);
    align_right(&mut table, 1..=2);

    for ((label, _), point) in rows.iter().zip(points) {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{:+.2}", point.total)),
            Cell::new(format!("{:+.2}", point.running_avg)).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);
}

pub fn hole_table(holes: &[HoleBreakdown]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Hole").add_attribute(Attribute::Bold),
        Cell::new("Strokes"),
        Cell::new("Pen"),
        Cell::new("SG").add_attribute(Attribute::Bold),
    ]);
    align_right(&mut table, 1..=3);

    for h in holes {
        table.add_row(vec![
            Cell::new(h.hole),
            Cell::new(h.strokes),
            Cell::new(h.penalties),
            sg_cell(Some(h.sg)),
        ]);
    }
    println!("\n{}", table);
}

fn native_unit(lie: Lie) -> &'static str {
    if lie == Lie::Green {
        "ft"
    } else {
        "yd"
    }
}

pub fn baseline_table(baseline: &BaselineTable, full: bool) {
    if full {
        let mut table = new_table();
        table.add_row(vec![
            Cell::new("Lie").add_attribute(Attribute::Bold),
            Cell::new("Distance"),
            Cell::new("Expected"),
        ]);
        align_right(&mut table, 1..=2);

        for lie in Lie::iter() {
            let Some(curve) = baseline.curve(lie) else {
                continue;
            };
            for &(d, s) in curve {
                table.add_row(vec![
                    Cell::new(lie),
                    Cell::new(format!("{:.0} {}", d, native_unit(lie))),
                    Cell::new(format!("{:.3}", s)),
                ]);
            }
        }
        println!("\n{}", table);
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Lie").add_attribute(Attribute::Bold),
        Cell::new("Unit"),
        Cell::new("Points"),
        Cell::new("Range"),
        Cell::new("Expected"),
    ]);
    align_right(&mut table, 2..=4);

    for lie in Lie::iter() {
        let Some(curve) = baseline.curve(lie) else {
            continue;
        };
        if curve.is_empty() {
            table.add_row(vec![
                Cell::new(lie),
                Cell::new(native_unit(lie)),
                Cell::new(0),
                Cell::new("—").fg(Color::Yellow),
                Cell::new("—").fg(Color::Yellow),
            ]);
            continue;
        }
        let (first_d, first_s) = curve[0];
        let (last_d, last_s) = curve[curve.len() - 1];
        table.add_row(vec![
            Cell::new(lie),
            Cell::new(native_unit(lie)),
            Cell::new(curve.len()),
            Cell::new(format!("{:.0}-{:.0}", first_d, last_d)),
            Cell::new(format!("{:.3}-{:.3}", first_s, last_s)),
        ]);
    }
    println!("\n{}", table);
}
