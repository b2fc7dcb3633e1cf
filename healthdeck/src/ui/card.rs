//! One card per connection: severity-colored border, status line, and the
//! rolling health chart.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::chart::project;
use crate::history;
use crate::poller::PollerHandle;
use crate::ui::{graph, theme};

pub fn draw_card(f: &mut ratatui::Frame<'_>, area: Rect, handle: &PollerHandle, selected: bool) {
    let latest = handle.latest.borrow().clone();
    let severity = latest.severity();

    let title = if handle.connection.display_name.is_empty() {
        handle.connection.server_address.clone()
    } else {
        handle.connection.display_name.clone()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
        .border_style(Style::default().fg(theme::severity_color(severity)))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 2 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let points = project(&history::snapshot(&handle.history));
    let current = points.last();
    let status = Line::from(vec![
        Span::raw(format!(
            "{}:{} ",
            handle.connection.server_address, handle.connection.health_port
        )),
        Span::styled(
            theme::severity_label(severity),
            Style::default().fg(theme::severity_color(severity)),
        ),
        Span::raw(format!(
            " | mem {} temp {} cpu {}",
            current.map_or_else(|| "--".into(), |p| fmt_pct(p.memory_pct)),
            current.map_or_else(|| "--".into(), |p| fmt_temp(p.cpu_temperature)),
            current.map_or_else(|| "--".into(), |p| fmt_pct(p.cpu_usage_pct)),
        )),
    ]);
    f.render_widget(Paragraph::new(status), rows[0]);

    graph::draw_health_graph(f, rows[1], &points);
}

fn fmt_pct(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.1}%")
    } else {
        "--".into()
    }
}

fn fmt_temp(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.1}°C")
    } else {
        "--".into()
    }
}
