//! Align command: seasonal views, summaries and pivots for every series.

use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span};

use seasonkit_calendar::{AnchorTable, CalendarMode};
use seasonkit_io::{
    read_series, write_aligned_parquet, write_gregorian_parquet, write_pivot_parquet,
};
use seasonkit_seasonal::{
    AlignedTable, GregorianTable, MonthlyPivot, SeasonalConfig, SeasonalSummary, SeasonalView,
    Series, monthly_pivot, prepare, summarize,
};

use crate::cli::AlignArgs;
use crate::config;
use crate::convert;

/// Run the align pipeline.
pub fn run(args: AlignArgs) -> Result<()> {
    let _cmd = info_span!("align").entered();

    // 1. Load project TOML, CLI flags override file values
    let mut config = config::load(&args.config)?;
    if let Some(p) = args.input {
        config.io.input = Some(p);
    }
    if let Some(p) = args.output {
        config.io.output = Some(p);
    }
    if let Some(p) = args.pivot {
        config.io.pivot_output = Some(p);
    }
    if let Some(c) = args.calendar {
        config.seasonal.calendar = c;
    }
    if let Some(n) = args.years {
        config.seasonal.years = n;
    }

    let input = config.io.input.as_ref().ok_or_else(|| {
        anyhow!("no input path: set [io].input in config or use --input")
    })?;
    let output = config.io.output.as_ref().ok_or_else(|| {
        anyhow!("no output path: set [io].output in config or use --output")
    })?;

    // 2. Build crate configs
    let reader_cfg = convert::build_reader_config(&config.io);
    let writer_cfg = convert::build_writer_config(&config.io)?;
    let seasonal_cfg = convert::build_seasonal_config(&config.seasonal)?;
    let anchors = convert::build_anchor_table(&config.seasonal)?;

    // 3. Read input
    info!(path = %input.display(), "reading input");
    let series = read_series(input, &reader_cfg)
        .with_context(|| format!("failed to read input: {}", input.display()))?;
    if series.is_empty() {
        bail!("no value columns found in {}", input.display());
    }
    info!(n_series = series.len(), "input loaded");

    // 4. Per-series views and summaries
    let PreparedViews {
        lunar,
        gregorian,
        summaries,
    } = prepare_all(&series, &seasonal_cfg, &anchors)?;

    // 5. Write views
    let written = match seasonal_cfg.calendar() {
        CalendarMode::Lunar => write_aligned_parquet(output, &lunar, &writer_cfg),
        CalendarMode::Gregorian => write_gregorian_parquet(output, &gregorian, &writer_cfg),
    };
    written.with_context(|| format!("failed to write Parquet: {}", output.display()))?;

    // 6. Write summaries
    let summary_path = output.with_extension("summary.json");
    let json = serde_json::to_string_pretty(&summaries).context("failed to serialise summaries")?;
    std::fs::write(&summary_path, json)
        .with_context(|| format!("failed to write summaries: {}", summary_path.display()))?;
    info!(path = %summary_path.display(), "summaries written");

    // 7. Optional pivot
    if let Some(pivot_path) = &config.io.pivot_output {
        let pivots: BTreeMap<String, MonthlyPivot> = series
            .iter()
            .map(|(name, s)| (name.clone(), monthly_pivot(s)))
            .collect();
        write_pivot_parquet(pivot_path, &pivots, &writer_cfg)
            .with_context(|| format!("failed to write pivot: {}", pivot_path.display()))?;
    }

    info!(
        mode = %seasonal_cfg.calendar(),
        path = %output.display(),
        "align complete"
    );
    Ok(())
}

/// Views and summaries of every input series, keyed by column name.
#[derive(Debug, Default)]
struct PreparedViews {
    lunar: BTreeMap<String, AlignedTable>,
    gregorian: BTreeMap<String, GregorianTable>,
    summaries: BTreeMap<String, SeasonalSummary>,
}

/// Prepares the configured view and the summary of each series.
///
/// Years without an anchor are reported by `prepare` according to the
/// configured unmapped-year policy.
fn prepare_all(
    series: &BTreeMap<String, Series>,
    config: &SeasonalConfig,
    anchors: &AnchorTable,
) -> Result<PreparedViews> {
    let mut out = PreparedViews::default();
    for (name, s) in series {
        let view = prepare(s, config, anchors)
            .with_context(|| format!("failed to prepare series '{name}'"))?;
        let summary = summarize(s);
        info!(
            series = %name,
            years = ?view.years(),
            n_rows = view.len(),
            annotation = %summary,
            "series prepared"
        );

        match view {
            SeasonalView::Lunar(table) => {
                out.lunar.insert(name.clone(), table);
            }
            SeasonalView::Gregorian(table) => {
                out.gregorian.insert(name.clone(), table);
            }
        }
        out.summaries.insert(name.clone(), summary);
    }
    Ok(out)
}
