//! Shared UI theme constants: severity tier colors and series colors.

use ratatui::style::Color;

use crate::types::Severity;

pub const OK: Color = Color::Green;
pub const WARNING: Color = Color::Yellow;
pub const DANGER: Color = Color::Red;
pub const UNKNOWN: Color = Color::DarkGray;

pub const MEMORY_SERIES: Color = Color::Cyan;
pub const CPU_TEMP_SERIES: Color = Color::Yellow;
pub const CPU_USAGE_SERIES: Color = Color::Magenta;

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Ok => OK,
        Severity::Warning => WARNING,
        Severity::Danger => DANGER,
        Severity::Unknown => UNKNOWN,
    }
}

pub fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Ok => "ok",
        Severity::Warning => "warning",
        Severity::Danger => "danger",
        Severity::Unknown => "unknown",
    }
}
