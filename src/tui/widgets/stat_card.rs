/// StatCard widget - a bordered, titled panel of stat lines
///
/// ```text
/// ╭─ Top Teams ────────────────╮
/// │ Mumbai Indians    5 titles │
/// ╰────────────────────────────╯
/// ```
///
/// Borders come from the configured box characters so the card also renders
/// in ASCII mode.

use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Modifier, Style}};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::formatting::bar_fill;
use crate::tui::widgets::RenderableWidget;

/// One row of card content
#[derive(Debug, Clone, PartialEq)]
pub enum CardLine {
    /// Left-aligned label and right-aligned value
    Pair { left: String, right: String },
    /// Secondary text under an entry
    Detail(String),
    /// Proportional bar; the value is a percentage of the inner width
    Bar(f64),
    Blank,
}

#[derive(Debug, Clone)]
pub struct StatCard {
    pub title: String,
    pub lines: Vec<CardLine>,
}

impl StatCard {
    pub fn new(title: impl Into<String>, lines: Vec<CardLine>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }

    fn render_border(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let chars = &config.box_chars;
        let border = Style::default().fg(Color::DarkGray);
        let width = area.width as usize;
        let right_x = area.x + area.width - 1;
        let bottom_y = area.y + area.height - 1;

        // Top border with the title embedded
        buf.set_stringn(area.x, area.y, &chars.top_left, 1, border);
        buf.set_stringn(area.x + 1, area.y, chars.horizontal.repeat(width - 2), width - 2, border);
        let title = format!(" {} ", self.title);
        if width > 4 {
            buf.set_stringn(
                area.x + 2,
                area.y,
                &title,
                width - 4,
                Style::default().add_modifier(Modifier::BOLD),
            );
        }
        buf.set_stringn(right_x, area.y, &chars.top_right, 1, border);

        for y in (area.y + 1)..bottom_y {
            buf.set_stringn(area.x, y, &chars.vertical, 1, border);
            buf.set_stringn(right_x, y, &chars.vertical, 1, border);
        }

        buf.set_stringn(area.x, bottom_y, &chars.bottom_left, 1, border);
        buf.set_stringn(area.x + 1, bottom_y, chars.horizontal.repeat(width - 2), width - 2, border);
        buf.set_stringn(right_x, bottom_y, &chars.bottom_right, 1, border);
    }

    fn render_line(&self, line: &CardLine, x: u16, y: u16, inner_width: usize, buf: &mut Buffer, config: &DisplayConfig) {
        match line {
            CardLine::Pair { left, right } => {
                let right_width = right.width().min(inner_width);
                let right_x = x + (inner_width - right_width) as u16;
                let left_room = inner_width.saturating_sub(right_width + 1);
                if left_room > 0 {
                    buf.set_stringn(x, y, left, left_room, Style::default().add_modifier(Modifier::BOLD));
                }
                buf.set_stringn(
                    right_x,
                    y,
                    right,
                    right_width,
                    Style::default().fg(config.bar_fg).add_modifier(Modifier::BOLD),
                );
            }
            CardLine::Detail(text) => {
                buf.set_stringn(x, y, text, inner_width, Style::default().fg(Color::Gray));
            }
            CardLine::Bar(percent) => {
                let filled = bar_fill(inner_width, *percent);
                buf.set_stringn(
                    x,
                    y,
                    config.box_chars.bar_filled.repeat(filled),
                    filled,
                    Style::default().fg(config.bar_fg),
                );
                buf.set_stringn(
                    x + filled as u16,
                    y,
                    config.box_chars.bar_empty.repeat(inner_width - filled),
                    inner_width - filled,
                    Style::default().fg(Color::DarkGray),
                );
            }
            CardLine::Blank => {}
        }
    }
}

impl RenderableWidget for StatCard {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width < 4 || area.height < 2 {
            return;
        }

        self.render_border(area, buf, config);

        // One column of padding inside each border
        let inner_x = area.x + 2;
        let inner_width = (area.width - 4) as usize;
        let rows = (area.height - 2) as usize;

        for (i, line) in self.lines.iter().take(rows).enumerate() {
            let y = area.y + 1 + i as u16;
            self.render_line(line, inner_x, y, inner_width, buf, config);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.lines.len() as u16 + 2)
    }
}
