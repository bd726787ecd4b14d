/// Static IPL dataset bundled with the program
///
/// Every figure here is a literal constant. Nothing is fetched, validated or
/// derived at runtime; the dashboard only ever reads these slices.

/// A franchise with its title count and all-time win rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Team {
    pub name: &'static str,
    pub titles: u32,
    /// Win rate as a percentage (0-100)
    pub win_rate: f64,
}

/// A batter with career runs and batting average
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub name: &'static str,
    pub runs: u32,
    pub avg: f64,
}

/// A ground with matches hosted and average first-innings score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Venue {
    pub name: &'static str,
    pub matches: u32,
    pub avg_score: u32,
}

/// The fixed collection of teams, players and venues
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticDataset {
    pub teams: &'static [Team],
    pub players: &'static [Player],
    pub venues: &'static [Venue],
}

const TOP_TEAMS: [Team; 3] = [
    Team { name: "Mumbai Indians", titles: 5, win_rate: 57.2 },
    Team { name: "Chennai Super Kings", titles: 5, win_rate: 59.8 },
    Team { name: "Kolkata Knight Riders", titles: 2, win_rate: 51.4 },
];

const TOP_PLAYERS: [Player; 3] = [
    Player { name: "Virat Kohli", runs: 6624, avg: 36.2 },
    Player { name: "Shikhar Dhawan", runs: 6244, avg: 34.8 },
    Player { name: "Rohit Sharma", runs: 5879, avg: 30.3 },
];

const VENUES: [Venue; 3] = [
    Venue { name: "Eden Gardens", matches: 81, avg_score: 165 },
    Venue { name: "Wankhede Stadium", matches: 75, avg_score: 172 },
    Venue { name: "Chinnaswamy Stadium", matches: 70, avg_score: 180 },
];

/// The dataset shipped with the dashboard
pub const IPL: StaticDataset = StaticDataset {
    teams: &TOP_TEAMS,
    players: &TOP_PLAYERS,
    venues: &VENUES,
};

impl Default for StaticDataset {
    fn default() -> Self {
        IPL
    }
}
