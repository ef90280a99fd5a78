//! Anchors command: print the anchor-date table.

use anyhow::Result;
use chrono::Datelike;

use seasonkit_calendar::AnchorTable;

use crate::cli::AnchorsArgs;
use crate::config::{self, SeasonalToml};
use crate::convert;

/// Print one `year  date  weekday` line per anchor.
pub fn run(args: AnchorsArgs) -> Result<()> {
    let seasonal = match &args.config {
        Some(path) => config::load(path)?.seasonal,
        None => SeasonalToml::default(),
    };
    let table = convert::build_anchor_table(&seasonal)?;
    for line in render(&table) {
        println!("{line}");
    }
    Ok(())
}

fn render(table: &AnchorTable) -> Vec<String> {
    table
        .iter()
        .map(|(year, date)| format!("{year}  {date}  {}", date.weekday()))
        .collect()
}
