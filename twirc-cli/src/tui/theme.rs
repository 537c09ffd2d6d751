//! TUI Theme
//!
//! Named terminal colors only, so high-contrast and custom terminal palettes
//! apply. Anything that carries meaning is also bold or reversed and never
//! signalled by color alone. The panel text itself stays unstyled for screen
//! readers.

use ratatui::style::{Color, Modifier, Style};

/// Channel name and the focused panel border
pub const ACCENT: Color = Color::Cyan;

/// Key names in the help bar
pub const HIGHLIGHT: Color = Color::Yellow;

/// Session ended, quit key
pub const ERROR: Color = Color::LightRed;

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Terminal default colors
pub fn text() -> Style {
    Style::default()
}

pub fn key_hint() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default()
        .fg(ERROR)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

/// Border while scrolled away from the caret
pub fn border() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

pub fn footer() -> Style {
    Style::default()
}
