use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Seasonal views of daily series aligned by calendar year or lunar new year.
#[derive(Parser)]
#[command(
    name = "seasonkit",
    version,
    about = "Calendar-aligned seasonal views and YoY/YTD annotations"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build seasonal views and summaries for every series in the input.
    Align(AlignArgs),
    /// Print latest value, YoY and YTD for every series in a file.
    Summarize(SummarizeArgs),
    /// Write a random-walk demo dataset.
    Demo(DemoArgs),
    /// Print the anchor-date table.
    Anchors(AnchorsArgs),
}

/// Arguments for the `align` subcommand.
#[derive(clap::Args)]
pub struct AlignArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "seasonkit.toml")]
    pub config: PathBuf,

    /// Override input path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output Parquet path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override calendar mode from config (`gregorian` or `lunar`).
    #[arg(long)]
    pub calendar: Option<String>,

    /// Override the number of most recent years kept.
    #[arg(long)]
    pub years: Option<usize>,

    /// Also write the month x year pivot to this Parquet path.
    #[arg(long)]
    pub pivot: Option<PathBuf>,
}

/// Arguments for the `summarize` subcommand.
#[derive(clap::Args)]
pub struct SummarizeArgs {
    /// Path to a Parquet or CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Name of the date column.
    #[arg(long, default_value = "date")]
    pub date_column: String,

    /// Value column to summarise (repeatable); all non-date columns if omitted.
    #[arg(long = "value-column")]
    pub value_columns: Vec<String>,

    /// Print JSON instead of annotation lines.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `demo` subcommand.
#[derive(clap::Args)]
pub struct DemoArgs {
    /// Path for the demo Parquet file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// First date (YYYY-MM-DD).
    #[arg(long, default_value = "2019-01-01")]
    pub start: String,

    /// Last date (YYYY-MM-DD), inclusive.
    #[arg(long, default_value = "2024-12-31")]
    pub end: String,

    /// RNG seed; random if omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of series to generate.
    #[arg(long, default_value_t = 1)]
    pub columns: usize,
}

/// Arguments for the `anchors` subcommand.
#[derive(clap::Args)]
pub struct AnchorsArgs {
    /// Optional TOML configuration whose `[[seasonal.anchors]]` extend the
    /// built-in table.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
