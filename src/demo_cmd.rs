//! Demo command: seeded random-walk series for trying out the pipeline.

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use tracing::{info, info_span};

use seasonkit_calendar::date_sequence;
use seasonkit_io::{WriterConfig, write_series_parquet};
use seasonkit_seasonal::Series;

use crate::cli::DemoArgs;
use crate::convert;

/// Starting level of every walk.
const START_LEVEL: f64 = 100.0;

/// Write `args.columns` daily random walks to a Parquet file.
pub fn run(args: DemoArgs) -> Result<()> {
    let _cmd = info_span!("demo").entered();

    let start = convert::parse_date(&args.start).context("invalid --start")?;
    let end = convert::parse_date(&args.end).context("invalid --end")?;
    if end < start {
        bail!("--end ({end}) is before --start ({start})");
    }
    if args.columns == 0 {
        bail!("--columns must be at least 1");
    }

    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let n_days = (end - start).num_days() as usize + 1;
    let dates = date_sequence(start, n_days)?;

    let mut series = BTreeMap::new();
    for i in 1..=args.columns {
        let values = random_walk(&mut rng, dates.len())?;
        series.insert(format!("series_{i}"), Series::from_columns(&dates, &values)?);
    }

    write_series_parquet(&args.output, &series, &WriterConfig::default())
        .with_context(|| format!("failed to write Parquet: {}", args.output.display()))?;
    info!(
        path = %args.output.display(),
        n_series = series.len(),
        n_days,
        first = %dates.first().copied().unwrap_or(start),
        last = %dates.last().copied().unwrap_or(end),
        "demo data written"
    );
    Ok(())
}

/// Gaussian random walk from [`START_LEVEL`] with unit daily steps.
fn random_walk(rng: &mut StdRng, n: usize) -> Result<Vec<Option<f64>>> {
    let step = Normal::new(0.0, 1.0)?;
    let mut level = START_LEVEL;
    Ok((0..n)
        .map(|_| {
            let value = level;
            level += step.sample(&mut *rng);
            Some(value)
        })
        .collect())
}
