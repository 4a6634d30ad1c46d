//! Evenly spaced sampling of a decay curve.

use halflife_core::constants::DEFAULT_TIME_SPAN;
use halflife_core::error::ArgumentError;
use halflife_core::types::TimeSeries;
use tracing::debug;

use crate::law::decay;

/// Span actually plotted for a requested span.
///
/// Non-positive or non-finite spans are replaced by [`DEFAULT_TIME_SPAN`] so
/// the time axis is never degenerate.
pub fn effective_span(span: f64) -> f64 {
    if span > 0.0 && span.is_finite() {
        span
    } else {
        DEFAULT_TIME_SPAN
    }
}

/// `steps + 1` evenly spaced points over `[0, span]`, both ends included.
///
/// The last point is exactly `span`. Callers validate `steps > 0`.
pub fn time_grid(span: f64, steps: u32) -> impl Iterator<Item = f64> {
    let n = steps.max(1) as f64;
    (0..=steps).map(move |i| span * (i as f64 / n))
}

/// Sample `initial · exp(−λ · t)` at `steps + 1` times over `[0, t_max_years]`.
///
/// A non-positive `t_max_years` is replaced by the default span (see
/// [`effective_span`]). The engine accepts any positive step count; the
/// 10..=500 range shown to users is enforced by front ends.
///
/// # Examples
///
/// ```
/// use halflife_engine::build_series;
/// let series = build_series(1.0e20, 0.02298, 60.0, 100).unwrap();
/// assert_eq!(series.len(), 101);
/// assert_eq!(series.first(), Some((0.0, 1.0e20)));
/// ```
pub fn build_series(
    initial: f64,
    decay_constant: f64,
    t_max_years: f64,
    steps: u32,
) -> Result<TimeSeries, ArgumentError> {
    if steps == 0 {
        return Err(ArgumentError::ZeroSteps);
    }

    let span = effective_span(t_max_years);
    let series: TimeSeries = time_grid(span, steps)
        .map(|t| (t, decay(initial, decay_constant, t)))
        .collect();

    debug!(
        initial,
        decay_constant,
        span_years = span,
        points = series.len(),
        "built decay series"
    );
    Ok(series)
}
