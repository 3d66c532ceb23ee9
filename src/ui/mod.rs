pub mod chat;

use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

/// Width of the optional Send button, including its borders.
const SEND_BUTTON_WIDTH: u16 = 10;

/// Screen regions shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetLayout {
    pub transcript: Rect,
    pub input: Rect,
    pub send_button: Option<Rect>,
    pub controls: Rect,
}

/// Splits the screen into the widget's regions. Deterministic for a given
/// area, so click handling can recompute it instead of caching render state.
pub fn widget_layout(area: Rect, send_button: bool) -> WidgetLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Transcript
            Constraint::Length(3), // Input line
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let (input, button) = if send_button {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(SEND_BUTTON_WIDTH)])
            .split(rows[1]);
        (cols[0], Some(cols[1]))
    } else {
        (rows[1], None)
    };

    WidgetLayout {
        transcript: rows[0],
        input,
        send_button: button,
        controls: rows[2],
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = widget_layout(area, self.config.enable_send_button);

        chat::render_transcript(self, layout.transcript, buf);
        chat::render_input(self, layout.input, buf);
        if let Some(button) = layout.send_button {
            chat::render_send_button(button, buf);
        }
        chat::render_controls(self, layout.controls, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_without_send_button_spans_full_width() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = widget_layout(area, false);

        assert!(layout.send_button.is_none());
        assert_eq!(layout.input.width, 80);
        assert_eq!(layout.transcript.height, 24 - 6);
        assert_eq!(layout.controls.height, 3);
    }

    #[test]
    fn layout_with_send_button_reserves_button_cell() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = widget_layout(area, true);

        let button = layout.send_button.expect("send button region");
        assert_eq!(button.width, SEND_BUTTON_WIDTH);
        assert_eq!(layout.input.width + button.width, 80);
        assert_eq!(button.y, layout.input.y);
    }

    #[test]
    fn button_hit_test_matches_rendered_region() {
        use ratatui::layout::Position;

        let area = Rect::new(0, 0, 80, 24);
        let layout = widget_layout(area, true);
        let button = layout.send_button.unwrap();

        assert!(button.contains(Position::new(button.x + 1, button.y + 1)));
        assert!(!layout.input.contains(Position::new(button.x + 1, button.y + 1)));
    }
}
