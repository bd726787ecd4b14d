use crate::config::Config;
use crate::view_mode::{ViewMode, ViewState};

/// Root application state - single source of truth
///
/// All state changes happen through the reducer. The dashboard is derived
/// from `view` on every frame; nothing else here feeds the display model.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Selected dashboard tab
    pub view: ViewState,

    /// Transient UI state
    pub ui: UiState,

    /// System state
    pub system: SystemState,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            system: SystemState {
                config,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn current_view(&self) -> ViewMode {
        self.view.current()
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Text typed into the "go to view" prompt; `None` when the prompt is closed
    pub prompt: Option<String>,
}

impl UiState {
    pub fn prompt_open(&self) -> bool {
        self.prompt.is_some()
    }
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: ←→ switch view | 1-3 jump to view | / go to view | q quit";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }

    /// Message for the status bar, falling back to the key help
    pub fn status_text(&self) -> &str {
        self.status_message.as_deref().unwrap_or(DEFAULT_STATUS_MESSAGE)
    }
}
