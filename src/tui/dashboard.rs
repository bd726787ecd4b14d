use crate::data::StaticDataset;
use crate::display::{render, DisplayModel};
use crate::layout_constants::{
    HEADER_HEIGHT, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT, WIDE_LAYOUT_COLUMNS, WIDE_LAYOUT_MIN_WIDTH,
};

use super::component::{vertical, Component, Constraint, ContainerLayout, Element};
use super::state::AppState;
use super::widgets::{CardLine, Header, RenderableWidget, StatCard, StatusBar, TabBar};

/// Root App component
///
/// Renders header, tab bar, the cards for the current view and the status
/// bar. The cards come from [`render`], so what is shown is a pure function of
/// the selected view.
pub struct App {
    pub data: StaticDataset,
    /// Terminal width, used to pick between stacked and side-by-side cards
    pub width: u16,
}

impl Component for App {
    type Props = AppState;

    fn view(&self, props: &Self::Props) -> Element {
        let view = props.current_view();
        tracing::trace!("APP: view() for {}", view);

        let model = render(view, &self.data);

        vertical(
            [
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(TAB_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ],
            vec![
                Element::widget(Header::default()),
                Element::widget(TabBar::new(view).dimmed(props.ui.prompt_open())),
                layout_cards(cards(&model), self.width),
                Element::widget(
                    StatusBar::new(view)
                        .with_status(props.system.status_text(), props.system.status_is_error)
                        .with_prompt(props.ui.prompt.clone()),
                ),
            ],
        )
    }
}

/// Turn a display model into cards, one per panel
pub fn cards(model: &DisplayModel) -> Vec<StatCard> {
    match model {
        DisplayModel::Teams { titles, win_rates } => vec![
            StatCard::new(
                titles.title,
                entries(titles.rows.iter().map(|row| {
                    vec![CardLine::Pair {
                        left: row.name.to_string(),
                        right: format!("{} titles", row.titles),
                    }]
                })),
            ),
            StatCard::new(
                win_rates.title,
                entries(win_rates.rows.iter().map(|row| {
                    vec![
                        CardLine::Pair {
                            left: row.name.to_string(),
                            right: format!("{}%", row.win_rate),
                        },
                        CardLine::Bar(row.bar_percent),
                    ]
                })),
            ),
        ],
        DisplayModel::Players(panel) => vec![StatCard::new(
            panel.title,
            entries(panel.rows.iter().map(|row| {
                vec![
                    CardLine::Pair {
                        left: row.name.to_string(),
                        right: row.runs.to_string(),
                    },
                    CardLine::Detail(format!("Average: {}", row.average)),
                ]
            })),
        )],
        DisplayModel::Venues(panel) => vec![StatCard::new(
            panel.title,
            entries(panel.rows.iter().map(|row| {
                vec![
                    CardLine::Pair {
                        left: row.name.to_string(),
                        right: format!("{} matches", row.matches),
                    },
                    CardLine::Detail(format!("Avg. Score: {}", row.avg_score)),
                ]
            })),
        )],
    }
}

/// Join per-entry lines with a blank line between entries
fn entries(groups: impl Iterator<Item = Vec<CardLine>>) -> Vec<CardLine> {
    let mut lines = Vec::new();
    for (i, group) in groups.enumerate() {
        if i > 0 {
            lines.push(CardLine::Blank);
        }
        lines.extend(group);
    }
    lines
}

/// Cards per row for a terminal of the given width
pub fn columns_for_width(width: u16) -> usize {
    if width >= WIDE_LAYOUT_MIN_WIDTH {
        WIDE_LAYOUT_COLUMNS
    } else {
        1
    }
}

/// Lay cards out in rows, filling each row left to right
fn layout_cards(cards: Vec<StatCard>, width: u16) -> Element {
    let columns = columns_for_width(width);

    let mut row_constraints = Vec::new();
    let mut rows = Vec::new();

    let mut cards = cards.into_iter().peekable();
    while cards.peek().is_some() {
        let row: Vec<StatCard> = cards.by_ref().take(columns).collect();
        let height = row
            .iter()
            .filter_map(|card| card.preferred_height())
            .max()
            .unwrap_or(0);

        let mut children: Vec<Element> = row.into_iter().map(Element::widget).collect();
        children.resize_with(columns, || Element::None);

        row_constraints.push(Constraint::Length(height));
        rows.push(Element::Container {
            children,
            layout: ContainerLayout::Horizontal(vec![Constraint::Ratio(1, columns as u32); columns]),
        });
    }

    // Absorb leftover height below the cards
    row_constraints.push(Constraint::Min(0));
    rows.push(Element::None);

    Element::Container {
        children: rows,
        layout: ContainerLayout::Vertical(row_constraints),
    }
}
