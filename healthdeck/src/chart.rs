//! Projection of a history window into chart-ready series.

use crate::types::{Health, Severity};

/// One chart-ready point. `index` is the position in the window, not a
/// timestamp; no wall-clock alignment across connections is attempted.
#[derive(Debug, Clone, Copy)]
pub struct ChartPoint {
    pub index: usize,
    pub memory_pct: f64,
    pub memory_severity: Severity,
    pub cpu_temperature: f64,
    pub cpu_temperature_severity: Severity,
    pub cpu_usage_pct: f64,
    pub cpu_usage_severity: Severity,
}

/// Project a sample window into one point per sample, oldest first.
///
/// A zero memory total makes `memory_pct` non-finite; the point is still
/// emitted so the series length never shrinks, and the chart renders a gap
/// for it. Pure: same input, same output, safe to recompute on every draw.
pub fn project(series: &[Health]) -> Vec<ChartPoint> {
    series
        .iter()
        .enumerate()
        .map(|(index, sample)| ChartPoint {
            index,
            memory_pct: sample.memory.value.used as f64 / sample.memory.value.total as f64
                * 100.0,
            memory_severity: sample.memory.state.into(),
            cpu_temperature: f64::from(sample.cpu_temperature.value),
            cpu_temperature_severity: sample.cpu_temperature.state.into(),
            // the wire value is a [0,1] fraction
            cpu_usage_pct: f64::from(sample.cpu_usage.value) * 100.0,
            cpu_usage_severity: sample.cpu_usage.state.into(),
        })
        .collect()
}
