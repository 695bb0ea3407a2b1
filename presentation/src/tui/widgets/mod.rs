//! TUI widgets: ratatui components for the game screen
//!
//! Layout:
//! ┌── Header (3) ─────────────────────────────────────┐
//! ├── AI text (flex) ─────────────────────────────────┤
//! ├── Answer input (3) ───────────────────────────────┤
//! └── StatusBar (1) ──────────────────────────────────┘

pub mod ai_text;
pub mod header;
pub mod help;
pub mod input;
pub mod settings;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout regions computed from the terminal area
pub struct MainLayout {
    pub header: Rect,
    pub ai_text: Rect,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            ai_text: chunks[1],
            input: chunks[2],
            status_bar: chunks[3],
        }
    }

    /// Centered overlay area (percentage of the terminal)
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;

    /// Buffer contents as text, one line per row
    pub fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.ai_text.height, 24 - 3 - 3 - 1);
    }

    #[test]
    fn test_centered_overlay_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let overlay = MainLayout::centered_overlay(60, 50, area);
        assert_eq!(overlay.width, 60);
        assert!(overlay.x >= 20 && overlay.y >= 12);
    }
}
