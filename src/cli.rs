use crate::model::DEFAULT_CYCLE_DAYS;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gcycles")]
#[command(about = "Group git commit history into fixed-length development cycles")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Only consider commits on or after this date (YYYY-MM-DD)")]
    pub cutoff: Option<String>,

    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    // Capped so the window sweep cannot step past chrono's representable dates.
    #[arg(
        long,
        help = "Cycle window length in days",
        default_value_t = DEFAULT_CYCLE_DAYS,
        value_parser = clap::value_parser!(u32).range(1..=36500)
    )]
    pub cycle_days: u32,

    #[arg(long, help = "Output as NDJSON (one cycle per line)")]
    pub ndjson: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::cycles::exec(self)
    }
}
