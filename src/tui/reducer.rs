use tracing::{debug, trace};

use super::action::Action;
use super::state::AppState;
use crate::view_mode::ViewMode;

/// Pure state reducer - like Redux reducer
///
/// Takes the current state and an action, returns the new state. No I/O
/// happens here; the dashboard is re-derived from the returned state on the
/// next frame.
pub fn reduce(state: AppState, action: Action) -> AppState {
    trace!("ACTION: {:?}", action);
    match action {
        Action::SelectView(view) => select_view(state, view),
        Action::SelectViewNamed(name) => select_view_named(state, &name),
        Action::NavigateTabLeft => {
            let view = state.current_view().prev();
            select_view(state, view)
        }
        Action::NavigateTabRight => {
            let view = state.current_view().next();
            select_view(state, view)
        }
        Action::OpenPrompt => {
            let mut new_state = state;
            new_state.ui.prompt = Some(String::new());
            new_state
        }
        Action::PromptInput(c) => {
            let mut new_state = state;
            if let Some(prompt) = new_state.ui.prompt.as_mut() {
                prompt.push(c);
            }
            new_state
        }
        Action::PromptBackspace => {
            let mut new_state = state;
            if let Some(prompt) = new_state.ui.prompt.as_mut() {
                prompt.pop();
            }
            new_state
        }
        Action::CancelPrompt => {
            let mut new_state = state;
            new_state.ui.prompt = None;
            new_state
        }
        Action::Quit => state,
    }
}

fn select_view(state: AppState, view: ViewMode) -> AppState {
    let mut new_state = state;
    new_state.view.select(view);
    new_state.ui.prompt = None;
    new_state.system.reset_status_message();
    new_state
}

fn select_view_named(state: AppState, name: &str) -> AppState {
    let mut new_state = state;
    new_state.ui.prompt = None;
    match new_state.view.select_named(name) {
        Ok(view) => {
            debug!("PROMPT: selected {}", view);
            new_state.system.reset_status_message();
        }
        Err(e) => {
            new_state.system.set_status_error_message(e.to_string());
        }
    }
    new_state
}
