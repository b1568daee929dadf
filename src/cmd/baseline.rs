use crate::reports;
use clap::Args;
use greenbook::baseline::BaselineTable;
use greenbook::error::GbResult;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BaselineArgs {
    /// Print every control point instead of the per-curve summary.
    #[arg(long, default_value_t = false)]
    pub full: bool,
}

pub fn run(args: BaselineArgs, table: &BaselineTable) -> GbResult<()> {
    reports::baseline_table(table, args.full);

    if table.is_complete() {
        info!("✅ Baseline complete: all six curves populated.");
    } else {
        warn!("⚠️  Baseline incomplete: shots from missing lies will be unratable.");
    }

    Ok(())
}
