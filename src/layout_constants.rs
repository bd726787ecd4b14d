//! Shared layout constants for the terminal dashboard.

/// Height of the title line at the top of the screen
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the tab bar (tab line + separator line)
pub const TAB_BAR_HEIGHT: u16 = 2;

/// Height of the status bar (separator line + status line)
pub const STATUS_BAR_HEIGHT: u16 = 2;

/// Terminal width from which cards are laid out side by side
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 80;

/// Cards per row in the wide layout
pub const WIDE_LAYOUT_COLUMNS: usize = 2;
