//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Widget for rendering the help overlay
#[derive(Default)]
pub struct HelpWidget {
    speech_available: bool,
}

impl HelpWidget {
    pub fn new(speech_available: bool) -> Self {
        Self { speech_available }
    }

    fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{:<10}", key), Style::default().fg(Color::Yellow)),
            Span::raw(description),
        ])
    }

    fn build_help_text(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "How to play",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Type your answer and press Enter. The grader accepts"),
            Line::from("spelling mistakes; a wrong answer gets a hint."),
            Line::from(""),
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Self::key_line("Enter", "Submit answer"),
            Self::key_line("Backspace", "Delete character"),
            Self::key_line("F1 / ?", "Toggle this help"),
            Self::key_line("F2", "Settings (stops the game)"),
        ];
        if self.speech_available {
            lines.push(Self::key_line("F3", "Speak the latest message again"));
        }
        lines.extend([
            Self::key_line("F5", "Start over"),
            Self::key_line("Ctrl+C", "Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "Press F1 or Esc to close",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        lines
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.build_help_text();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::test_support::buffer_text;

    #[test]
    fn test_speech_key_listed_only_when_available() {
        let area = Rect::new(0, 0, 70, 24);

        let mut buf = Buffer::empty(area);
        HelpWidget::new(false).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Start over"));
        assert!(!text.contains("Speak the latest"));

        let mut buf = Buffer::empty(area);
        HelpWidget::new(true).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("Speak the latest"));
    }
}
