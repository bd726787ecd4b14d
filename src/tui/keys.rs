/// Keyboard event to action mapping
///
/// Converts crossterm KeyEvents into Actions. While the "go to view" prompt is
/// open, printable keys are routed into it; otherwise keys select views.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use super::action::Action;
use super::state::AppState;
use crate::view_mode::ViewMode;

/// Handle global keys that work regardless of prompt state
fn handle_global_keys(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

/// Handle keys while the prompt is open
fn handle_prompt_keys(key_code: KeyCode, input: &str) -> Option<Action> {
    match key_code {
        KeyCode::Esc => Some(Action::CancelPrompt),
        KeyCode::Enter => Some(Action::SelectViewNamed(input.to_string())),
        KeyCode::Backspace => Some(Action::PromptBackspace),
        KeyCode::Char(c) => Some(Action::PromptInput(c)),
        _ => None,
    }
}

/// Handle direct view switching via number or letter keys
fn handle_view_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('1') | KeyCode::Char('t') => Some(Action::SelectView(ViewMode::Teams)),
        KeyCode::Char('2') | KeyCode::Char('p') => Some(Action::SelectView(ViewMode::Players)),
        KeyCode::Char('3') | KeyCode::Char('v') => Some(Action::SelectView(ViewMode::Venues)),
        _ => None,
    }
}

/// Handle tab bar navigation (Left/Right and friends)
fn handle_tab_bar_navigation(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(Action::NavigateTabLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(Action::NavigateTabRight),
        _ => None,
    }
}

/// Convert a KeyEvent into an Action based on current application state
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!(
        "KEY: {:?} (view={}, prompt_open={})",
        key.code,
        state.current_view(),
        state.ui.prompt_open()
    );

    if let Some(action) = handle_global_keys(&key) {
        return Some(action);
    }

    if let Some(input) = &state.ui.prompt {
        return handle_prompt_keys(key.code, input);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Action::Quit),
        KeyCode::Char('/') => return Some(Action::OpenPrompt),
        KeyCode::Esc => {
            debug!("KEY: ESC pressed at top level - ignoring (use 'q' to quit)");
            return None;
        }
        _ => {}
    }

    handle_view_keys(key.code).or_else(|| handle_tab_bar_navigation(key.code))
}
