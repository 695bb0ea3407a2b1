//! Status bar widget: key hints or flash messages

use crate::tui::state::{Overlay, TuiState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn hints(&self) -> String {
        match self.state.overlay {
            Overlay::None => {
                let mut hints = vec!["Enter:answer", "F1:help", "F2:settings"];
                if self.state.speech_available {
                    hints.push("F3:speak");
                }
                hints.extend(["F5:restart", "Ctrl+C:quit"]);
                hints.join("  ")
            }
            Overlay::Help => "Esc:close  Ctrl+C:quit".into(),
            Overlay::Settings => {
                "Tab:next field  Space:toggle  Enter:save  Esc:cancel".into()
            }
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let label = match self.state.overlay {
            Overlay::None => "GAME",
            Overlay::Help => "HELP",
            Overlay::Settings => "SETTINGS",
        };
        let label_span = Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let label_width = label.len() as u16 + 2;
        buf.set_line(area.x, area.y, &Line::from(vec![label_span]), label_width);

        let (right_text, right_style) = match &self.state.flash_message {
            Some((flash, _)) => (
                flash.clone(),
                Style::default().fg(Color::Yellow).bg(Color::DarkGray),
            ),
            None => (
                self.hints(),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
        };

        let right_width = right_text.chars().count() as u16;
        let right_x = area
            .right()
            .saturating_sub(right_width + 1)
            .max(area.x + label_width + 1);
        let available = area.right().saturating_sub(right_x);
        buf.set_line(
            right_x,
            area.y,
            &Line::from(Span::styled(right_text, right_style)),
            available,
        );
    }
}
