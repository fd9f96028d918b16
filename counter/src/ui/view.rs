//! Render model for the counter screen.

use crate::types::CounterState;
use crate::ui::theme::{BORDER, COUNT, ERROR, HEADING, HINT, LOADING};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Heading shown at the top of the screen
pub const HEADING_TEXT: &str = "Async Thunk Counter";

/// Key hints shown at the bottom of the screen
pub const HINTS_TEXT: &str = "[+] Increment   [-] Decrement   [q] Quit";

/// Snapshot of what the counter screen shows
///
/// Built from a state snapshot; rendering it never touches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    count: i64,
    loading: bool,
    error: Option<String>,
}

impl CounterView {
    /// Build the view for a state snapshot
    #[must_use]
    pub fn new(state: &CounterState) -> Self {
        Self {
            count: state.count,
            loading: state.is_loading(),
            error: state.error.clone(),
        }
    }

    /// The lines of text on screen, top to bottom
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.styled_lines()
            .iter()
            .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
            .collect()
    }

    fn styled_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                HEADING_TEXT,
                Style::default().fg(HEADING).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Count: ", Style::default().fg(HEADING)),
                Span::styled(
                    self.count.to_string(),
                    Style::default().fg(COUNT).add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        if self.loading {
            lines.push(Line::from(Span::styled("Loading...", Style::default().fg(LOADING))));
        }

        if let Some(error) = &self.error {
            lines.push(Line::from(Span::styled(
                format!("Error: {error}"),
                Style::default().fg(ERROR),
            )));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            HINTS_TEXT,
            Style::default().fg(HINT).add_modifier(Modifier::DIM),
        )));

        lines
    }
}

impl Widget for &CounterView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.styled_lines())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER)),
            )
            .render(area, buf);
    }
}
