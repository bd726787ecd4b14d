pub mod commands;
pub mod config;
pub mod data;
pub mod display;
pub mod formatting;
pub mod layout_constants;
pub mod tui;
pub mod view_mode;
