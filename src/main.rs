use clap::{Parser, Subcommand};
use greenbook::baseline::{loader, BaselineTable};
use std::path::Path;
use std::process;
use tracing::{error, info, warn};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Baseline override CSV (lie,distance,expected_strokes; native units).
    #[arg(global = true, short, long)]
    baseline: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Trend(cmd::trend::TrendArgs),
    Baseline(cmd::baseline::BaselineArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let table = match &cli.baseline {
        Some(path) if Path::new(path).exists() => {
            info!("📈 Loading Baseline: {}", path);
            loader::from_csv_path(path).unwrap_or_else(|e| {
                error!("❌ Failed to load baseline: {}", e);
                process::exit(1);
            })
        }
        Some(path) => {
            error!("❌ Baseline file not found: {}", path);
            process::exit(1);
        }
        None => {
            warn!("⚠️  No baseline override given. Using embedded tour table.");
            BaselineTable::tour()
        }
    };

    if !table.is_complete() {
        warn!("⚠️  Baseline is missing curves; some shots may be unratable.");
    }

    let result = match cli.command {
        Commands::Score(args) => cmd::score::run(args, &table),
        Commands::Trend(args) => cmd::trend::run(args, &table),
        Commands::Baseline(args) => cmd::baseline::run(args, &table),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
