/// Widget-based rendering infrastructure for TUI
///
/// Widgets are small, focused pieces that render themselves straight into a
/// ratatui Buffer and can be tested by rendering into a test buffer.

#[cfg(test)]
pub mod testing;

pub mod header;
pub use header::Header;

pub mod stat_card;
pub use stat_card::{CardLine, StatCard};

pub mod status_bar;
pub use status_bar::StatusBar;

pub mod tab_bar;
pub use tab_bar::TabBar;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// # Object Safety
///
/// This trait is object-safe, so widgets can be stored as `Box<dyn RenderableWidget>`
/// inside the element tree.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}
