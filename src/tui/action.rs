use crate::view_mode::ViewMode;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions, which are
/// produced from key events by [`super::keys::key_to_action`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation actions
    SelectView(ViewMode),
    /// Select a view by name; unknown names are rejected
    SelectViewNamed(String),
    NavigateTabLeft,
    NavigateTabRight,

    // "Go to view" prompt
    OpenPrompt,
    PromptInput(char),
    PromptBackspace,
    CancelPrompt,

    Quit,
}
