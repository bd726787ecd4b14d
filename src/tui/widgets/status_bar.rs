/// StatusBar widget - displays status information at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator with connector aligned to the vertical bar
/// - Bottom line: left status message, prompt or error │ right current view
///
/// Error messages are displayed with the error color.

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;
use crate::view_mode::ViewMode;

/// Width reserved for the view label on the right ("Players")
const RIGHT_TEXT_WIDTH: u16 = 7;

/// Label shown in front of the "go to view" prompt input
pub const PROMPT_LABEL: &str = "Go to view: ";

/// Widget for displaying status information
#[derive(Debug)]
pub struct StatusBar {
    /// Current view, shown on the right
    pub view: ViewMode,
    /// Message shown on the left
    pub message: String,
    pub is_error: bool,
    /// Prompt input; replaces the message while present
    pub prompt: Option<String>,
}

impl StatusBar {
    pub fn new(view: ViewMode) -> Self {
        Self {
            view,
            message: String::new(),
            is_error: false,
            prompt: None,
        }
    }

    /// Set the status message
    pub fn with_status(mut self, message: impl Into<String>, is_error: bool) -> Self {
        self.message = message.into();
        self.is_error = is_error;
        self
    }

    /// Show the prompt with its current input
    pub fn with_prompt(mut self, prompt: Option<String>) -> Self {
        self.prompt = prompt;
        self
    }

    /// Build the left side text and its style
    fn build_left(&self, config: &DisplayConfig) -> (String, Style) {
        match &self.prompt {
            Some(input) => (
                format!("{}{}_", PROMPT_LABEL, input),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            None if self.is_error => (
                format!("ERROR: {}", self.message),
                Style::default().fg(config.error_fg),
            ),
            None => (self.message.clone(), Style::default()),
        }
    }

    /// Build the top separator line with connector
    fn build_separator_line(&self, area_width: usize, bar_position: u16, config: &DisplayConfig) -> String {
        let left_part = config.box_chars.horizontal.repeat(bar_position as usize);
        let right_part = config.box_chars.horizontal.repeat(area_width.saturating_sub(bar_position as usize + 1));
        format!("{}{}{}", left_part, config.box_chars.connector3, right_part)
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        // Layout: [space] [left content] [padding] │ [space] [7-char view] [space]
        let bar_position = area.width.saturating_sub(RIGHT_TEXT_WIDTH + 3);

        let separator_line = self.build_separator_line(area.width as usize, bar_position, config);
        buf.set_stringn(area.x, area.y, &separator_line, area.width as usize, Style::default());

        let y = area.y + 1;

        // Left side, clipped before the vertical bar
        let (left_text, left_style) = self.build_left(config);
        let left_room = bar_position.saturating_sub(1) as usize;
        if !left_text.is_empty() && left_room > 0 {
            buf.set_stringn(area.x + 1, y, &left_text, left_room, left_style);
        }

        // Right side: vertical bar + view label + margin
        let right = format!(
            "{} {:>width$} ",
            config.box_chars.vertical,
            self.view.label(),
            width = RIGHT_TEXT_WIDTH as usize
        );
        let right_x = area.x + bar_position;
        let room = (area.x + area.width).saturating_sub(right_x) as usize;
        buf.set_stringn(right_x, y, &right, room.min(right.width()), Style::default());
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_status_bar_basic_rendering() {
        let widget = StatusBar::new(ViewMode::Teams).with_status("ok", false);
        let buf = render_widget(&widget, 20, 2);

        assert_buffer(&buf, &[
            "──────────┬─────────",
            " ok       │   Teams",
        ]);
    }

    #[test]
    fn test_status_bar_error_message() {
        let config = test_config();
        let widget = StatusBar::new(ViewMode::Players).with_status("bad view", true);
        let buf = render_widget(&widget, 30, 2);

        assert_buffer(&buf, &[
            "────────────────────┬─────────",
            " ERROR: bad view    │ Players",
        ]);
        assert_eq!(buf[(1, 1)].fg, config.error_fg);
    }

    #[test]
    fn test_status_bar_prompt_replaces_message() {
        let widget = StatusBar::new(ViewMode::Venues)
            .with_status("ignored", true)
            .with_prompt(Some("ven".to_string()));
        let buf = render_widget(&widget, 30, 2);

        assert_buffer(&buf, &[
            "────────────────────┬─────────",
            " Go to view: ven_   │  Venues",
        ]);
    }

    #[test]
    fn test_status_bar_clips_long_message() {
        let widget = StatusBar::new(ViewMode::Teams)
            .with_status("a very long message that does not fit", false);
        let buf = render_widget(&widget, 20, 2);

        assert_buffer(&buf, &[
            "──────────┬─────────",
            " a very lo│   Teams",
        ]);
    }

    #[test]
    fn test_status_bar_ascii() {
        let widget = StatusBar::new(ViewMode::Teams).with_status("ok", false);
        let buf = render_widget_with_config(&widget, 20, 2, &test_config_ascii());

        assert_buffer(&buf, &[
            "--------------------",
            " ok       |   Teams",
        ]);
    }

    #[test]
    fn test_preferred_height() {
        assert_eq!(StatusBar::new(ViewMode::Teams).preferred_height(), Some(2));
    }
}
