//! Terminal UI for playing against WOPR.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};
use wopr::{Commentator, Orchestrator, WoprConfig};

use app::{App, Control};

const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the interactive game until the player quits.
#[instrument(skip_all, fields(commentator = commentator.name()))]
pub async fn run(config: &WoprConfig, commentator: Arc<dyn Commentator>) -> Result<()> {
    info!("Starting WOPR terminal UI");

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let orchestrator = Orchestrator::new(
        commentator,
        config.opponent_delay(),
        config.commentary_timeout(),
        event_tx,
    );
    let mut app = App::new(orchestrator, event_rx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

async fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(FRAME_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code, Instant::now()) == Control::Quit
        {
            info!("User quit");
            return Ok(());
        }

        // Let commentary tasks make progress between frames.
        tokio::task::yield_now().await;
    }
}
