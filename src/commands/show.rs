use crate::config::{Config, DisplayConfig};
use crate::data::StaticDataset;
use crate::display::{render, DisplayModel, Panel, PlayerRow, TitleRow, VenueRow, WinRateRow};
use crate::formatting::{format_bar, format_header};
use crate::view_mode::{ViewMode, ViewState};
use anyhow::{Context, Result};

// Layout Constants
/// Width of the name column in every panel
const NAME_COL_WIDTH: usize = 24;

/// Width of the win-rate bar in text output
pub const TEXT_BAR_WIDTH: usize = 20;

fn format_title_row(row: &TitleRow) -> String {
    format!("{:<width$} {:>2} titles", row.name, row.titles, width = NAME_COL_WIDTH)
}

fn format_win_rate_row(row: &WinRateRow, display: &DisplayConfig) -> String {
    format!(
        "{:<width$} {:>6}  {}",
        row.name,
        format!("{}%", row.win_rate),
        format_bar(TEXT_BAR_WIDTH, row.bar_percent, display),
        width = NAME_COL_WIDTH
    )
}

fn format_player_row(row: &PlayerRow) -> String {
    format!(
        "{:<width$} {:>6}  Average: {}",
        row.name,
        row.runs,
        row.average,
        width = NAME_COL_WIDTH
    )
}

fn format_venue_row(row: &VenueRow) -> String {
    format!(
        "{:<width$} {:>3} matches  Avg. Score: {}",
        row.name,
        row.matches,
        row.avg_score,
        width = NAME_COL_WIDTH
    )
}

fn format_panel<R>(
    panel: &Panel<R>,
    display: &DisplayConfig,
    mut format_row: impl FnMut(&R) -> String,
) -> String {
    let mut output = format_header(panel.title, true, display);
    output.push('\n');
    for row in &panel.rows {
        output.push_str(&format_row(row));
        output.push('\n');
    }
    output
}

/// Format a display model as plain text, one panel after another
pub fn format_display_model(model: &DisplayModel, display: &DisplayConfig) -> String {
    match model {
        DisplayModel::Teams { titles, win_rates } => {
            let mut output = format_panel(titles, display, format_title_row);
            output.push('\n');
            output.push_str(&format_panel(win_rates, display, |row| {
                format_win_rate_row(row, display)
            }));
            output
        }
        DisplayModel::Players(panel) => format_panel(panel, display, format_player_row),
        DisplayModel::Venues(panel) => format_panel(panel, display, format_venue_row),
    }
}

/// Views to print for a `show` invocation
///
/// `--all` wins over `--view`. A named view goes through the view state so an
/// unknown name is rejected before anything is printed.
pub fn resolve_views(view: Option<&str>, all: bool) -> Result<Vec<ViewMode>> {
    if all {
        return Ok(ViewMode::all().to_vec());
    }

    let mut state = ViewState::new();
    if let Some(name) = view {
        state
            .select_named(name)
            .context("Failed to select view")?;
    }
    Ok(vec![state.current()])
}

pub fn run(view: Option<String>, all: bool, data: &StaticDataset, config: &Config) -> Result<()> {
    let views = resolve_views(view.as_deref(), all)?;

    let sections: Vec<String> = views
        .into_iter()
        .map(|v| format_display_model(&render(v, data), &config.display))
        .collect();
    print!("{}", sections.join("\n"));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::IPL;
    use crate::formatting::BoxChars;

    fn ascii_display() -> DisplayConfig {
        DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_teams_view() {
        let model = render(ViewMode::Teams, &IPL);
        let output = format_display_model(&model, &ascii_display());

        let expected = "\
Top Teams
=========

Mumbai Indians            5 titles
Chennai Super Kings       5 titles
Kolkata Knight Riders     2 titles

Win Rates
=========

Mumbai Indians            57.2%  ###########.........
Chennai Super Kings       59.8%  ############........
Kolkata Knight Riders     51.4%  ##########..........
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_players_view() {
        let model = render(ViewMode::Players, &IPL);
        let output = format_display_model(&model, &ascii_display());

        let expected = "\
Top Run Scorers
===============

Virat Kohli                6624  Average: 36.2
Shikhar Dhawan             6244  Average: 34.8
Rohit Sharma               5879  Average: 30.3
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_venues_view() {
        let model = render(ViewMode::Venues, &IPL);
        let output = format_display_model(&model, &ascii_display());

        let expected = "\
Popular Venues
==============

Eden Gardens              81 matches  Avg. Score: 165
Wankhede Stadium          75 matches  Avg. Score: 172
Chinnaswamy Stadium       70 matches  Avg. Score: 180
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_resolve_views_defaults_to_teams() {
        assert_eq!(resolve_views(None, false).unwrap(), vec![ViewMode::Teams]);
    }

    #[test]
    fn test_resolve_views_named() {
        assert_eq!(
            resolve_views(Some("venues"), false).unwrap(),
            vec![ViewMode::Venues]
        );
    }

    #[test]
    fn test_resolve_views_all_in_tab_order() {
        assert_eq!(
            resolve_views(Some("players"), true).unwrap(),
            vec![ViewMode::Teams, ViewMode::Players, ViewMode::Venues]
        );
    }

    #[test]
    fn test_resolve_views_rejects_unknown() {
        let err = resolve_views(Some("umpires"), false).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("unknown view 'umpires'"), "got: {}", msg);
    }
}
