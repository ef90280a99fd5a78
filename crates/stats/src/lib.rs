//! Null-aware numeric helpers for seasonkit.
//!
//! Series values are `Option<f64>`: `None` marks a missing observation and
//! is skipped by aggregations rather than poisoning them.

/// Sum of the present values. Returns 0.0 if none are present.
pub fn sum_present(data: &[Option<f64>]) -> f64 {
    data.iter().flatten().sum()
}

/// Number of present values.
pub fn count_present(data: &[Option<f64>]) -> usize {
    data.iter().flatten().count()
}

/// Arithmetic mean of the present values. Returns `None` if none are present.
pub fn mean_present(data: &[Option<f64>]) -> Option<f64> {
    let n = count_present(data);
    if n == 0 {
        return None;
    }
    Some(sum_present(data) / n as f64)
}

/// Percent change from `base` to `current`: `(current - base) / base * 100`.
///
/// Returns `None` when either side is missing or non-finite, or when `base`
/// is zero.
pub fn pct_change(current: Option<f64>, base: Option<f64>) -> Option<f64> {
    let (current, base) = (current?, base?);
    if !current.is_finite() || !base.is_finite() || base == 0.0 {
        return None;
    }
    Some((current - base) / base * 100.0)
}

/// Linearly interpolates missing values that sit between two present ones.
///
/// Positions are treated as equally spaced. Leading and trailing runs of
/// `None` are left untouched: nothing is extrapolated past the first or last
/// present value. Returns the number of slots filled.
pub fn interpolate_inside(values: &mut [Option<f64>]) -> usize {
    let mut filled = 0;
    let mut prev: Option<(usize, f64)> = None;

    for i in 0..values.len() {
        let Some(right) = values[i] else {
            continue;
        };
        if let Some((p, left)) = prev {
            let gap = i - p;
            for k in (p + 1)..i {
                let t = (k - p) as f64 / gap as f64;
                values[k] = Some(left + t * (right - left));
                filled += 1;
            }
        }
        prev = Some((i, right));
    }

    filled
}
