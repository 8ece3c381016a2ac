//! Terminal dashboard: login gate, summary cards, searchable table,
//! renewals popover and claim-history modal.

pub mod keys;
pub mod ui;

use std::time::Duration;

use benefits_state::{AppState, SessionState};
use crossterm::event::{self, Event as CEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use thiserror::Error;

pub use keys::map_key;
pub use ui::draw;

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// How long to wait for input before redrawing.
    pub tick: Duration,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick: Duration::from_millis(150) }
    }
}

pub struct TuiRunResult {
    pub session: SessionState,
}

pub fn run_dashboard(mut app: AppState, config: &TuiConfig) -> Result<TuiRunResult, TuiError> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    tracing::info!(benefits = app.benefits().len(), "dashboard started");

    // restore the terminal even when the loop fails
    let result = event_loop(&mut terminal, &mut app, config.tick);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    tracing::info!("dashboard closed");
    Ok(TuiRunResult { session: app.session().clone() })
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    tick: Duration,
) -> Result<(), TuiError> {
    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, app))?;

        if event::poll(tick)? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(ev) = map_key(app, key) {
                    app.apply(ev);
                }
            }
        }
    }
    Ok(())
}
