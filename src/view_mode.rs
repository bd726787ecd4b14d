use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use thiserror::Error;
use tracing::{debug, warn};

/// The dashboard tab currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Teams,
    Players,
    Venues,
}

/// Accepted spellings for each view, keyed by lowercase name
static VIEW_NAMES: phf::Map<&'static str, ViewMode> = phf_map! {
    "teams" => ViewMode::Teams,
    "team" => ViewMode::Teams,
    "t" => ViewMode::Teams,
    "players" => ViewMode::Players,
    "player" => ViewMode::Players,
    "p" => ViewMode::Players,
    "venues" => ViewMode::Venues,
    "venue" => ViewMode::Venues,
    "v" => ViewMode::Venues,
};

/// Rejected view selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewModeError {
    #[error("unknown view '{0}' (expected one of: teams, players, venues)")]
    Unknown(String),
}

impl ViewMode {
    /// All views in tab order
    pub fn all() -> [Self; 3] {
        [Self::Teams, Self::Players, Self::Venues]
    }

    /// Position in the tab bar
    pub fn index(&self) -> usize {
        match self {
            Self::Teams => 0,
            Self::Players => 1,
            Self::Venues => 2,
        }
    }

    /// Canonical identifier, as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Teams => "teams",
            Self::Players => "players",
            Self::Venues => "venues",
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Teams => "Teams",
            Self::Players => "Players",
            Self::Venues => "Venues",
        }
    }

    /// Get the next view in the cycle (Teams → Players → Venues → Teams)
    pub fn next(&self) -> Self {
        match self {
            Self::Teams => Self::Players,
            Self::Players => Self::Venues,
            Self::Venues => Self::Teams,
        }
    }

    /// Get the previous view in the cycle (Teams → Venues → Players → Teams)
    pub fn prev(&self) -> Self {
        match self {
            Self::Teams => Self::Venues,
            Self::Players => Self::Teams,
            Self::Venues => Self::Players,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewMode {
    type Err = ViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        VIEW_NAMES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| ViewModeError::Unknown(s.to_string()))
    }
}

/// Holds the selected view for one session
///
/// Starts on [`ViewMode::Teams`]. The value only changes through
/// [`ViewState::select`] or a successful [`ViewState::select_named`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    current: ViewMode,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ViewMode {
        self.current
    }

    /// Overwrite the current view
    pub fn select(&mut self, view: ViewMode) {
        debug!("VIEW: {} -> {}", self.current, view);
        self.current = view;
    }

    /// Parse `name` and select it
    ///
    /// An unrecognised name is rejected and the current view is kept.
    pub fn select_named(&mut self, name: &str) -> Result<ViewMode, ViewModeError> {
        match name.parse::<ViewMode>() {
            Ok(view) => {
                self.select(view);
                Ok(view)
            }
            Err(e) => {
                warn!("VIEW: rejected selection: {}", e);
                Err(e)
            }
        }
    }
}
