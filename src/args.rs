use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

#[derive(Parser, Clone)]
#[command(
    display_name = "Tourney Processor",
    long_about = "Generates round-robin fixtures, auto-schedules matches and ranks standings for tournament snapshots"
)]
pub struct Args {
    /// JSON snapshot shaped like `{ "tournaments": [...] }`
    #[arg(short, long, env = "TOURNEY_INPUT", help = "Tournament snapshot to process")]
    pub input: PathBuf,

    /// Report destination. Written to stdout when omitted
    #[arg(short, long, env = "TOURNEY_OUTPUT")]
    pub output: Option<PathBuf>,

    /// First calendar day considered when searching for overlaps (YYYY-MM-DD).
    /// Defaults to today in local time
    #[arg(short, long)]
    pub from: Option<NaiveDate>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
