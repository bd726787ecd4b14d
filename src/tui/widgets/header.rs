/// Header widget - the dashboard title line
use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Modifier, Style}};
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

pub const DASHBOARD_TITLE: &str = "IPL Analytics Dashboard";

#[derive(Debug)]
pub struct Header {
    pub title: String,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new(DASHBOARD_TITLE)
    }
}

impl RenderableWidget for Header {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Full-width band in the bar color
        let band = Style::default().bg(config.bar_fg).fg(Color::White);
        buf.set_style(Rect::new(area.x, area.y, area.width, 1), band);
        buf.set_stringn(
            area.x + 1,
            area.y,
            &self.title,
            area.width.saturating_sub(1) as usize,
            band.add_modifier(Modifier::BOLD),
        );
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    #[test]
    fn test_header_rendering() {
        let buf = render_widget(&Header::default(), 30, 1);
        assert_buffer(&buf, &[" IPL Analytics Dashboard"]);
    }

    #[test]
    fn test_header_band_uses_bar_color() {
        let config = test_config();
        let buf = render_widget(&Header::default(), 30, 1);
        assert_eq!(buf[(29, 0)].bg, config.bar_fg);
        assert!(buf[(1, 0)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_header_truncates() {
        let buf = render_widget(&Header::new("Dashboard"), 5, 1);
        assert_buffer(&buf, &[" Dash"]);
    }
}
