//! Terminal UI: the presentation adapter over the game controller.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{digit_target, move_cursor, move_selection};
pub use ui::highlight_color;

use crate::config::Settings;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, style::Color};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(settings.initial_list_order());
    let res = run_app(
        &mut terminal,
        app,
        highlight_color(*settings.highlight()),
        Duration::from_millis(*settings.tick_ms()),
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    highlight: Color,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app, highlight))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases as well as presses.
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
