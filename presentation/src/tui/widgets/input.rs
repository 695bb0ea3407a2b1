//! Answer input widget

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let phase = self.state.phase;
        let border_color = if phase.accepts_submit() {
            Color::Green
        } else {
            Color::DarkGray
        };

        // Keep the end of a long answer visible
        let inner_width = area.width.saturating_sub(5) as usize;
        let answer = self.state.answer.as_str();
        let overflow = answer.chars().count().saturating_sub(inner_width);
        let start = answer
            .char_indices()
            .nth(overflow)
            .map_or(answer.len(), |(i, _)| i);

        let mut spans = vec![
            Span::styled("> ", Style::default().fg(border_color)),
            Span::raw(&answer[start..]),
        ];
        if phase.accepts_typing() {
            spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", phase))
            .style(Style::default().fg(border_color));

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
