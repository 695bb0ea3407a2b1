//! Settings overlay widget

use crate::tui::state::{SettingsField, SettingsForm};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Characters of the token left visible at the end
const TOKEN_TAIL: usize = 4;

pub struct SettingsWidget<'a> {
    form: &'a SettingsForm,
}

impl<'a> SettingsWidget<'a> {
    pub fn new(form: &'a SettingsForm) -> Self {
        Self { form }
    }

    /// `sk-abcdef1234` → `•••••••••1234`
    pub fn mask_token(token: &str) -> String {
        let len = token.chars().count();
        let hidden = len.saturating_sub(TOKEN_TAIL).max(len.min(TOKEN_TAIL * 2) / 2);
        let tail: String = token.chars().skip(hidden).collect();
        format!("{}{}", "•".repeat(hidden), tail)
    }

    fn field_line(&self, field: SettingsField, label: &'static str, value: String) -> Line<'a> {
        let focused = self.form.focus == field;
        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:<16}", label), label_style),
            Span::styled(value, Style::default().fg(Color::White)),
        ];
        if focused && field != SettingsField::AutoSpeak {
            spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for SettingsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form = self.form;
        let current_set = match form.current_questions {
            Some(0) => "current set is empty".to_string(),
            Some(n) => format!("current set: {} questions", n),
            None => "current set is not valid JSON".to_string(),
        };

        let mut lines = vec![
            Line::from(""),
            self.field_line(
                SettingsField::ApiToken,
                "API token",
                Self::mask_token(&form.api_token),
            ),
            Line::from(""),
            self.field_line(
                SettingsField::QuestionFile,
                "Question file",
                form.question_file.clone(),
            ),
            Line::from(Span::styled(
                format!("  {:<16}{} (leave empty to keep it)", "", current_set),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            self.field_line(
                SettingsField::AutoSpeak,
                "Auto-speak",
                if form.auto_speak { "[x]" } else { "[ ]" }.to_string(),
            ),
            Line::from(""),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Tab: next field  Space: toggle  Enter: save  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Settings ")
                    .style(Style::default().fg(Color::Yellow)),
            )
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::test_support::buffer_text;

    fn render(form: &SettingsForm) -> String {
        let area = Rect::new(0, 0, 70, 16);
        let mut buf = Buffer::empty(area);
        SettingsWidget::new(form).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(SettingsWidget::mask_token(""), "");
        assert_eq!(SettingsWidget::mask_token("sk-abcdef1234"), "•••••••••1234");
        // Short tokens never show more than half
        assert_eq!(SettingsWidget::mask_token("abcd"), "••cd");
    }

    #[test]
    fn test_token_is_never_rendered_in_clear() {
        let form = SettingsForm {
            api_token: "sk-secretvalue9876".into(),
            current_questions: Some(3),
            ..Default::default()
        };
        let text = render(&form);
        assert!(!text.contains("secretvalue"));
        assert!(text.contains("9876"));
        assert!(text.contains("current set: 3 questions"));
        assert!(text.contains("[ ]"));
    }

    #[test]
    fn test_shows_error_and_checkbox() {
        let form = SettingsForm {
            auto_speak: true,
            focus: SettingsField::AutoSpeak,
            error: Some("Cannot read set.json".into()),
            ..Default::default()
        };
        let text = render(&form);
        assert!(text.contains("[x]"));
        assert!(text.contains("Cannot read set.json"));
        assert!(text.contains("current set is not valid JSON"));
    }
}
