use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level seasonkit configuration (`seasonkit.toml`).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonkitConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Seasonal view settings.
    #[serde(default)]
    pub seasonal: SeasonalToml,
}

/// Reads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<SeasonkitConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub pivot_output: Option<PathBuf>,
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default)]
    pub value_columns: Vec<String>,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            pivot_output: None,
            date_column: default_date_column(),
            value_columns: Vec::new(),
            compression: default_compression(),
            row_group_size: default_row_group_size(),
        }
    }
}

fn default_date_column() -> String {
    "date".to_string()
}
fn default_compression() -> String {
    "snappy".to_string()
}
fn default_row_group_size() -> usize {
    1_000_000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonalToml {
    #[serde(default = "default_calendar")]
    pub calendar: String,
    /// Inclusive `[lo, hi]` day offsets around each anchor.
    #[serde(default = "default_window")]
    pub window: [i64; 2],
    #[serde(default = "default_years")]
    pub years: usize,
    #[serde(default = "default_unmapped_years")]
    pub unmapped_years: String,
    /// Extra or overriding anchor dates.
    #[serde(default)]
    pub anchors: Vec<AnchorToml>,
}

impl Default for SeasonalToml {
    fn default() -> Self {
        Self {
            calendar: default_calendar(),
            window: default_window(),
            years: default_years(),
            unmapped_years: default_unmapped_years(),
            anchors: Vec::new(),
        }
    }
}

fn default_calendar() -> String {
    "gregorian".to_string()
}
fn default_window() -> [i64; 2] {
    [-70, 70]
}
fn default_years() -> usize {
    5
}
fn default_unmapped_years() -> String {
    "drop".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnchorToml {
    pub year: i32,
    /// `YYYY-MM-DD`.
    pub date: String,
}
