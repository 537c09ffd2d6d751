//! Chat UI rendering components

use super::super::theme;
use super::state::ChatState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(frame: &mut Frame, state: &mut ChatState) {
        let area = frame.area();

        // Layout: Status bar, Panel, Help bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Status bar
                Constraint::Min(3),    // Panel
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        Self::render_status_bar(frame, chunks[0], state);
        Self::render_panel(frame, chunks[1], state);
        Self::render_help_bar(frame, chunks[2]);
    }

    fn render_status_bar(frame: &mut Frame, area: Rect, state: &ChatState) {
        let session = if state.session_ended {
            Span::styled(" session ended ", theme::error())
        } else {
            Span::styled(" online ", theme::text())
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", state.channel), theme::title()),
            Span::styled("│ ", theme::footer()),
            Span::styled(state.server.clone(), theme::text()),
        ];
        if state.tls {
            spans.push(Span::styled(" (TLS)", theme::footer()));
        }
        spans.push(Span::styled(" │ ", theme::footer()));
        spans.push(Span::styled(state.nickname.clone(), theme::text()));
        spans.push(Span::styled(" │", theme::footer()));
        spans.push(session);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    /// History and pending input in one area, with the terminal cursor on the caret
    fn render_panel(frame: &mut Frame, area: Rect, state: &mut ChatState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if state.scroll.is_some() {
                theme::border()
            } else {
                theme::border_active()
            });
        let inner = block.inner(area);
        let height = usize::from(inner.height).max(1);
        let width = usize::from(inner.width).max(1);

        let region = state.panel.region();
        let (caret_line, caret_column) = region.caret_line_column();
        let follow_top = (caret_line + 1).saturating_sub(height);
        let max_top = region.line_count().saturating_sub(height);
        let top = state.scroll.map_or(follow_top, |top| top.min(max_top));
        let left = (caret_column + 1).saturating_sub(width);

        // Only the visible window is copied out of the buffer.
        let lines: Vec<Line> = (top..top + height)
            .map_while(|line| region.line(line))
            .map(|line| Line::from(line.to_string()))
            .collect();
        state.follow_top = follow_top;
        state.viewport_height = height;

        let para = Paragraph::new(lines)
            .block(block)
            .style(theme::text())
            .scroll((0, clamp_u16(left)));
        frame.render_widget(para, area);

        if (top..top + height).contains(&caret_line) {
            frame.set_cursor_position(Position::new(
                inner.x + clamp_u16(caret_column - left),
                inner.y + clamp_u16(caret_line - top),
            ));
        }
    }

    fn render_help_bar(frame: &mut Frame, area: Rect) {
        let help_text = Line::from(vec![
            Span::styled(" Enter", theme::key_hint()),
            Span::raw(": Send │ "),
            Span::styled("PageUp/Down", theme::key_hint()),
            Span::raw(": Scroll │ "),
            Span::styled("Ctrl+End", theme::key_hint()),
            Span::raw(": Input │ "),
            Span::styled("Ctrl+Q", theme::error()),
            Span::raw(": Exit "),
        ]);
        frame.render_widget(Paragraph::new(help_text).style(theme::footer()), area);
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
