//! AI text panel: the question, hint or verdict being typed out

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
};

pub struct AiTextWidget<'a> {
    state: &'a TuiState,
}

impl<'a> AiTextWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for AiTextWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = match self.state.last_verdict {
            Some(true) => Color::Green,
            _ => Color::White,
        };

        let mut spans = vec![Span::styled(
            self.state.ai_text.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];
        // Typing cursor while the text is still being revealed
        if !self.state.ai_text_complete && !self.state.ai_text.is_empty() {
            spans.push(Span::styled("▌", Style::default().fg(Color::DarkGray)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1))
            .style(Style::default().fg(Color::Cyan));

        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
