/// Presentation mapper: view + dataset → display model
///
/// [`render`] is a pure function. It picks the dataset slice for the view and
/// shapes it into panels, keeping the dataset order. Nothing is sorted,
/// filtered or aggregated here; the only derived value is the win-rate bar
/// fraction, which is the win rate clamped to 0-100.
use crate::data::{Player, StaticDataset, Team, Venue};
use crate::view_mode::ViewMode;

pub const TOP_TEAMS_TITLE: &str = "Top Teams";
pub const WIN_RATES_TITLE: &str = "Win Rates";
pub const TOP_RUN_SCORERS_TITLE: &str = "Top Run Scorers";
pub const POPULAR_VENUES_TITLE: &str = "Popular Venues";

/// A titled card holding rows of one kind
#[derive(Debug, Clone, PartialEq)]
pub struct Panel<R> {
    pub title: &'static str,
    pub rows: Vec<R>,
}

impl<R> Panel<R> {
    fn new(title: &'static str, rows: Vec<R>) -> Self {
        Self { title, rows }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleRow {
    pub name: &'static str,
    pub titles: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WinRateRow {
    pub name: &'static str,
    pub win_rate: f64,
    /// Bar length as a percentage of the available width, always within 0-100
    pub bar_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRow {
    pub name: &'static str,
    pub runs: u32,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VenueRow {
    pub name: &'static str,
    pub matches: u32,
    pub avg_score: u32,
}

/// Renderable representation of one view
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayModel {
    Teams {
        titles: Panel<TitleRow>,
        win_rates: Panel<WinRateRow>,
    },
    Players(Panel<PlayerRow>),
    Venues(Panel<VenueRow>),
}

impl DisplayModel {
    /// The view this model was derived from
    pub fn view(&self) -> ViewMode {
        match self {
            Self::Teams { .. } => ViewMode::Teams,
            Self::Players(_) => ViewMode::Players,
            Self::Venues(_) => ViewMode::Venues,
        }
    }

    pub fn panel_count(&self) -> usize {
        match self {
            Self::Teams { .. } => 2,
            Self::Players(_) | Self::Venues(_) => 1,
        }
    }
}

/// Map a view onto its slice of the dataset
pub fn render(view: ViewMode, data: &StaticDataset) -> DisplayModel {
    match view {
        ViewMode::Teams => DisplayModel::Teams {
            titles: Panel::new(TOP_TEAMS_TITLE, data.teams.iter().map(title_row).collect()),
            win_rates: Panel::new(WIN_RATES_TITLE, data.teams.iter().map(win_rate_row).collect()),
        },
        ViewMode::Players => DisplayModel::Players(Panel::new(
            TOP_RUN_SCORERS_TITLE,
            data.players.iter().map(player_row).collect(),
        )),
        ViewMode::Venues => DisplayModel::Venues(Panel::new(
            POPULAR_VENUES_TITLE,
            data.venues.iter().map(venue_row).collect(),
        )),
    }
}

fn title_row(team: &Team) -> TitleRow {
    TitleRow {
        name: team.name,
        titles: team.titles,
    }
}

fn win_rate_row(team: &Team) -> WinRateRow {
    WinRateRow {
        name: team.name,
        win_rate: team.win_rate,
        bar_percent: clamp_percent(team.win_rate),
    }
}

fn player_row(player: &Player) -> PlayerRow {
    PlayerRow {
        name: player.name,
        runs: player.runs,
        average: player.avg,
    }
}

fn venue_row(venue: &Venue) -> VenueRow {
    VenueRow {
        name: venue.name,
        matches: venue.matches,
        avg_score: venue.avg_score,
    }
}

/// Clamp a percentage into 0-100; NaN becomes 0
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
