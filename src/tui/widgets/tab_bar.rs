/// TabBar widget - displays the dashboard view tabs
///
/// Renders "Teams │ Players │ Venues" on the first line and an underline with
/// connectors beneath the separators on the second. The selected tab is drawn
/// in the selection color.

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Modifier, Style}};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;
use crate::view_mode::ViewMode;

/// Widget for displaying navigation tabs as a horizontal bar
#[derive(Debug)]
pub struct TabBar {
    /// Tabs to display, in order
    pub tabs: Vec<ViewMode>,
    /// Currently selected view
    pub current: ViewMode,
    /// Draw the selection dimmed (while the prompt has the focus)
    pub dimmed: bool,
}

impl TabBar {
    pub fn new(current: ViewMode) -> Self {
        Self {
            tabs: ViewMode::all().to_vec(),
            current,
            dimmed: false,
        }
    }

    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    /// Get the style for a tab based on selection
    fn tab_style(&self, tab: ViewMode, config: &DisplayConfig) -> Style {
        if tab != self.current {
            return Style::default();
        }
        if self.dimmed {
            Style::default().fg(config.unfocused_selection_fg())
        } else {
            Style::default()
                .fg(config.selection_fg)
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Build the tab line with separators
    fn build_tab_line(&self, config: &DisplayConfig) -> Vec<(String, Style)> {
        let separator = format!(" {} ", config.box_chars.vertical);
        let mut segments = Vec::new();

        for (i, tab) in self.tabs.iter().enumerate() {
            if i > 0 {
                segments.push((separator.clone(), Style::default()));
            }
            segments.push((tab.label().to_string(), self.tab_style(*tab, config)));
        }

        segments
    }

    /// Build the separator line with connectors under tab gaps
    fn build_separator_line(&self, area_width: usize, config: &DisplayConfig) -> String {
        let horizontal = &config.box_chars.horizontal;
        let connector = &config.box_chars.connector2;

        let mut line = String::new();
        let mut pos = 0;

        for (i, tab) in self.tabs.iter().enumerate() {
            if i > 0 {
                line.push_str(horizontal);
                line.push_str(connector);
                line.push_str(horizontal);
                pos += 3;
            }
            let tab_width = tab.label().width();
            line.push_str(&horizontal.repeat(tab_width));
            pos += tab_width;
        }

        if pos < area_width {
            line.push_str(&horizontal.repeat(area_width - pos));
        }

        line
    }
}

impl RenderableWidget for TabBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if self.tabs.is_empty() || area.width == 0 || area.height < 2 {
            return;
        }

        let mut x = area.x;
        for (text, style) in self.build_tab_line(config) {
            if x >= area.x + area.width {
                break;
            }
            buf.set_stringn(x, area.y, &text, (area.x + area.width - x) as usize, style);
            x += text.width() as u16;
        }

        let separator = self.build_separator_line(area.width as usize, config);
        buf.set_stringn(
            area.x,
            area.y + 1,
            &separator,
            area.width as usize,
            Style::default().fg(Color::DarkGray),
        );
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Tab line + separator line
    }
}
