use crate::reports;
use clap::Args;
use greenbook::aggregate::{trend, worst_bucket, RoundSummary, SgAverages};
use greenbook::baseline::BaselineTable;
use greenbook::error::GbResult;
use greenbook::round::Shot;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct TrendArgs {
    /// Round JSON files, oldest first.
    #[arg(required = true)]
    pub rounds: Vec<String>,
}

pub fn run(args: TrendArgs, table: &BaselineTable) -> GbResult<()> {
    let mut labeled: Vec<(String, RoundSummary)> = Vec::new();
    let mut all_shots: Vec<Shot> = Vec::new();

    for path in &args.rounds {
        let round = super::score::load_round(path)?;
        let summary = RoundSummary::for_shots(table, &round.shots);
        if summary.has_unratable {
            warn!("⚠️  Round '{}' contains unratable shots.", round.id);
        }
        all_shots.extend(round.shots.iter().cloned());
        labeled.push((round.label(), summary));
    }

    reports::summary_table(&labeled);

    let summaries: Vec<RoundSummary> = labeled.iter().map(|(_, s)| *s).collect();
    reports::averages_table(&SgAverages::across(&summaries));
    reports::trend_table(&labeled, &trend(&summaries));

    if let Some(insight) = worst_bucket(table, &all_shots) {
        info!(
            "🎯 Weakest area: {} ({:+.2} SG over {} shots)",
            insight.bucket, insight.sg, insight.shots
        );
    }

    Ok(())
}
