// Module declarations
pub mod widgets;

pub mod action;
pub mod component;
pub mod dashboard;
pub mod keys;
pub mod reducer;
pub mod renderer;
pub mod state;


pub use action::Action;
pub use component::{Component, Element};
pub use dashboard::App;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use renderer::Renderer;
pub use state::AppState;

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use crate::config::Config;
use crate::data::StaticDataset;

/// How long to wait for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main entry point for TUI mode
pub fn run(data: StaticDataset, config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, data, AppState::new(config));

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    data: StaticDataset,
    mut state: AppState,
) -> Result<(), io::Error> {
    let renderer = Renderer::new();

    loop {
        terminal.draw(|f| {
            let area = f.area();
            let app = App { data, width: area.width };

            // Build virtual tree from current state
            let element = app.view(&state);

            let config = &state.system.config.display;
            renderer.render(&element, area, f.buffer_mut(), config);
        })?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key_to_action(key, &state) {
            Some(Action::Quit) => {
                tracing::debug!("ACTION: Quitting application");
                break;
            }
            Some(action) => {
                tracing::debug!("ACTION: {:?}", action);
                state = reduce(state, action);
            }
            None => {}
        }
    }

    Ok(())
}
