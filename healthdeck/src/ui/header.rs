//! Top header with server count, clock, and key hints.

use chrono::Local;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, server_count: usize) {
    let clock = Local::now().format("%H:%M:%S");
    let title = format!(
        "healthdeck — {} server{} | {}  (press 'a' to add, 'x' to remove, 'q' to quit)",
        server_count,
        if server_count == 1 { "" } else { "s" },
        clock
    );
    f.render_widget(Block::default().title(title).borders(Borders::BOTTOM), area);
}
