use crate::cli::Cli;
use anyhow::Context;
use super::{build_cycles, extract, output_json, output_ndjson, parse_cutoff, GitLog};

pub fn exec(cli: Cli) -> anyhow::Result<()> {
    // A malformed cutoff fails before any subprocess work, so nothing reaches
    // stdout on that path.
    let cutoff = cli
        .cutoff
        .as_deref()
        .map(parse_cutoff)
        .transpose()
        .context("Failed to parse cutoff date")?;

    let source = GitLog::new(cli.repo);
    let records = extract(&source, cutoff).context("Failed to read git history")?;
    let cycles = build_cycles(records, cli.cycle_days);

    if cli.ndjson {
        output_ndjson(&cycles)?;
    } else {
        output_json(&cycles)?;
    }

    Ok(())
}
