//! Add-server dialog and remove confirmation overlays.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::connections::{
    Connection, DEFAULT_CACHE_SIZE, DEFAULT_HEALTH_PORT, DEFAULT_POLL_FREQUENCY_SECONDS,
};

const FIELD_COUNT: usize = 5;
const FIELD_LABELS: [&str; FIELD_COUNT] = [
    "Display name",
    "Server address",
    "Health port",
    "Poll frequency (s)",
    "Cache size",
];

/// Text-input state for the add-server form. Parsing and range validation
/// happen on submit; the dialog stays open showing the error until the input
/// is acceptable or the user cancels.
pub struct AddDialog {
    fields: [String; FIELD_COUNT],
    focus: usize,
    pub error: Option<String>,
}

impl AddDialog {
    pub fn new() -> Self {
        AddDialog {
            fields: [
                String::new(),
                String::new(),
                DEFAULT_HEALTH_PORT.to_string(),
                DEFAULT_POLL_FREQUENCY_SECONDS.to_string(),
                DEFAULT_CACHE_SIZE.to_string(),
            ],
            focus: 0,
            error: None,
        }
    }

    pub fn insert(&mut self, c: char) {
        if !c.is_control() {
            self.fields[self.focus].push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.fields[self.focus].pop();
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % FIELD_COUNT;
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    /// Parse and validate the form into a Connection.
    pub fn to_connection(&self) -> Result<Connection, String> {
        let connection = Connection {
            display_name: self.fields[0].trim().to_string(),
            server_address: self.fields[1].trim().to_string(),
            health_port: self.fields[2]
                .trim()
                .parse()
                .map_err(|_| "health port must be a number".to_string())?,
            poll_frequency_in_seconds: self.fields[3]
                .trim()
                .parse()
                .map_err(|_| "poll frequency must be a number".to_string())?,
            cache_size: self.fields[4]
                .trim()
                .parse()
                .map_err(|_| "cache size must be a number".to_string())?,
        };
        connection.validate().map_err(|e| e.to_string())?;
        Ok(connection)
    }
}

impl Default for AddDialog {
    fn default() -> Self {
        Self::new()
    }
}

pub fn draw_add_dialog(f: &mut ratatui::Frame<'_>, dialog: &AddDialog) {
    let area = centered_rect(44, (FIELD_COUNT + 4) as u16, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add server (Enter save, Esc cancel)");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = dialog
        .fields
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let marker = if i == dialog.focus { "> " } else { "  " };
            let style = if i == dialog.focus {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                format!("{marker}{:<18} {value}", FIELD_LABELS[i]),
                style,
            ))
        })
        .collect();
    if let Some(error) = &dialog.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

pub fn draw_confirm_remove(f: &mut ratatui::Frame<'_>, connection: &Connection) {
    let area = centered_rect(40, 3, f.area());
    f.render_widget(Clear, area);
    let block = Block::default().borders(Borders::ALL).title("Remove server");
    let inner = block.inner(area);
    f.render_widget(block, area);
    let name = if connection.display_name.is_empty() {
        &connection.server_address
    } else {
        &connection.display_name
    };
    f.render_widget(Paragraph::new(format!("Remove '{name}'? (y/n)")), inner);
}

fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
