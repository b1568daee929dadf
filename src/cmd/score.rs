use crate::reports;
use clap::Args;
use greenbook::aggregate::{hole_breakdown, RoundSummary};
use greenbook::baseline::BaselineTable;
use greenbook::error::GbResult;
use greenbook::round::Round;
use greenbook::sg::strokes_gained;
use std::fs::File;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Round JSON file captured by the logging front end.
    pub round: String,

    /// Include the per-hole breakdown table.
    #[arg(long, default_value_t = false)]
    pub holes: bool,
}

pub fn run(args: ScoreArgs, table: &BaselineTable) -> GbResult<()> {
    let round = load_round(&args.round)?;
    info!(
        "⛳ Scoring round '{}' at {} ({} shots)",
        round.id,
        round.course,
        round.shots.len()
    );

    for finding in round.validate() {
        warn!("⚠️  {}", finding);
    }

    let results: Vec<_> = round
        .shots
        .iter()
        .map(|shot| (shot.clone(), strokes_gained(table, shot)))
        .collect();
    reports::shot_table(&results);

    let summary = RoundSummary::for_shots(table, &round.shots);
    if summary.has_unratable {
        warn!("⚠️  Baseline incomplete: unratable shots are excluded from totals.");
    }
    reports::summary_table(&[(round.label(), summary)]);

    if args.holes {
        reports::hole_table(&hole_breakdown(table, &round.shots));
    }

    Ok(())
}

pub fn load_round(path: &str) -> GbResult<Round> {
    let file = File::open(path)?;
    let round = serde_json::from_reader(file)?;
    Ok(round)
}
