//! Header widget: title, question progress and phase

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use trivia_domain::GamePhase;

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn phase_color(phase: GamePhase) -> Color {
        match phase {
            GamePhase::Idle => Color::DarkGray,
            GamePhase::AwaitingInput => Color::Cyan,
            GamePhase::Grading => Color::Yellow,
            GamePhase::Advancing => Color::Green,
            GamePhase::Finished => Color::Magenta,
        }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let phase = self.state.phase;
        let progress = if self.state.total_questions > 0 {
            format!(
                "Question {}/{}",
                self.state.question_number(),
                self.state.total_questions
            )
        } else {
            "No questions".to_string()
        };

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(Self::phase_color(phase))),
            Span::styled(progress, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::styled(
                phase.to_string(),
                Style::default().fg(Self::phase_color(phase)),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Trivia ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::test_support::buffer_text;

    #[test]
    fn test_renders_progress_and_phase() {
        let mut state = TuiState::new();
        state.total_questions = 5;
        state.question_index = 1;
        state.phase = GamePhase::Grading;

        let area = Rect::new(0, 0, 50, 3);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new(&state).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Trivia"));
        assert!(text.contains("Question 2/5"));
        assert!(text.contains(&GamePhase::Grading.to_string()));
    }

    #[test]
    fn test_empty_set() {
        let state = TuiState::new();
        let area = Rect::new(0, 0, 50, 3);
        let mut buf = Buffer::empty(area);
        HeaderWidget::new(&state).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("No questions"));
    }
}
