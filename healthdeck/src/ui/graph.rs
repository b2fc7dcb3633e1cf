//! Rolling three-series health chart for one connection.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType},
};

use crate::chart::ChartPoint;
use crate::ui::theme;

/// Draw memory %, CPU temperature, and CPU usage % over the sample window.
/// Non-finite values are skipped per series, which renders as a gap without
/// shortening the window.
pub fn draw_health_graph(f: &mut ratatui::Frame<'_>, area: Rect, points: &[ChartPoint]) {
    let memory = finite_series(points, |p| p.memory_pct);
    let cpu_temp = finite_series(points, |p| p.cpu_temperature);
    let cpu_usage = finite_series(points, |p| p.cpu_usage_pct);

    let datasets = vec![
        Dataset::default()
            .name("mem %")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::MEMORY_SERIES))
            .data(&memory),
        Dataset::default()
            .name("cpu °C")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::CPU_TEMP_SERIES))
            .data(&cpu_temp),
        Dataset::default()
            .name("cpu %")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::CPU_USAGE_SERIES))
            .data(&cpu_usage),
    ];

    let x_max = points.len().saturating_sub(1).max(1) as f64;
    let chart = Chart::new(datasets)
        .x_axis(Axis::default().bounds([0.0, x_max]))
        .y_axis(
            Axis::default()
                .bounds([0.0, 100.0])
                .labels(vec![Span::raw("0"), Span::raw("50"), Span::raw("100")]),
        );
    f.render_widget(chart, area);
}

fn finite_series(points: &[ChartPoint], value: impl Fn(&ChartPoint) -> f64) -> Vec<(f64, f64)> {
    points
        .iter()
        .filter_map(|p| {
            let v = value(p);
            v.is_finite().then_some((p.index as f64, v))
        })
        .collect()
}
