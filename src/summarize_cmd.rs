//! Summarize command: latest value, YoY and YTD per series.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use seasonkit_io::{ReaderConfig, read_series};
use seasonkit_seasonal::{SeasonalSummary, summarize};

use crate::cli::SummarizeArgs;

/// Print the summary of every series in the input file.
pub fn run(args: SummarizeArgs) -> Result<()> {
    let _cmd = info_span!("summarize").entered();

    let reader_cfg = ReaderConfig::default()
        .with_date_column(args.date_column)
        .with_value_columns(args.value_columns);

    info!(path = %args.input.display(), "reading input");
    let series = read_series(&args.input, &reader_cfg)
        .with_context(|| format!("failed to read input: {}", args.input.display()))?;

    let summaries: BTreeMap<String, SeasonalSummary> = series
        .iter()
        .map(|(name, s)| (name.clone(), summarize(s)))
        .collect();

    if args.json {
        let json =
            serde_json::to_string_pretty(&summaries).context("failed to serialise summaries")?;
        println!("{json}");
    } else {
        for (name, summary) in &summaries {
            println!("{name}: {summary}");
        }
    }
    Ok(())
}
