use std::{
    fs::File,
    io::{self, BufWriter},
    process
};

use chrono::Local;
use clap::Parser;
use tourney_processor::{
    args::Args,
    config::ProcessorConfig,
    error::Result,
    snapshot::{process_snapshot, Snapshot}
};
use tracing::{error, info};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_tracing(&args.log_level);

    if let Err(e) = run(args) {
        error!("Processing failed: {}", e);
        process::exit(1);
    }
}

fn init_tracing(level: &str) {
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = ProcessorConfig::from_env()?;
    let from = args.from.unwrap_or_else(|| Local::now().date_naive());

    let snapshot = Snapshot::from_path(&args.input)?;
    info!(
        tournaments = snapshot.tournaments.len(),
        from = %from,
        lookahead_days = config.lookahead_days,
        "Loaded snapshot"
    );

    let report = process_snapshot(snapshot, from, &config)?;

    match &args.output {
        Some(path) => {
            report.write_to(BufWriter::new(File::create(path)?))?;
            info!(path = %path.display(), "Report written");
        }
        None => report.write_to(io::stdout().lock())?
    }

    Ok(())
}
