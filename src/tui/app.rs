//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, instrument};
use wopr::{GameEvent, GameSession, Orchestrator, Position, TurnPhase};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    orchestrator: Orchestrator,
    event_rx: mpsc::UnboundedReceiver<GameEvent>,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates the application around an orchestrator and its event stream.
    pub fn new(orchestrator: Orchestrator, event_rx: mpsc::UnboundedReceiver<GameEvent>) -> Self {
        Self {
            orchestrator,
            event_rx,
            cursor: Position::Center,
            status_message: "Your move.".to_string(),
        }
    }

    /// The current game.
    pub fn session(&self) -> &GameSession {
        self.orchestrator.session()
    }

    /// The highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a key press.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => self.orchestrator.new_game(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor, now),
            KeyCode::Char(c) => {
                if let Some(position) = digit_position(c) {
                    self.cursor = position;
                    self.play(position, now);
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
        self.drain_events();
        Control::Continue
    }

    /// Advances timers and applies commentary.
    pub fn tick(&mut self, now: Instant) {
        self.orchestrator.poll(now);
        self.drain_events();
    }

    fn play(&mut self, position: Position, now: Instant) {
        if let Err(e) = self.orchestrator.human_move(position, now) {
            debug!(error = %e, "Move refused");
            self.status_message = e.to_string();
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handles a game event from the orchestrator.
    fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::NewGame => {
                self.cursor = Position::Center;
                self.status_message = "New game. Your move.".to_string();
            }
            GameEvent::OpponentThinking => {
                self.status_message = "WOPR is thinking...".to_string();
            }
            GameEvent::MoveMade { player, position } => {
                if player == self.session().opponent()
                    && self.session().phase() == TurnPhase::AwaitingHuman
                {
                    self.status_message = format!("WOPR played {}. Your move.", position);
                }
            }
            GameEvent::GameOver(status) => {
                let verdict = match status.winner() {
                    Some(player) if player == self.session().human() => "You win!",
                    Some(_) => "WOPR wins.",
                    None => "Draw.",
                };
                self.status_message = format!("{verdict} Press 'r' to play again or 'q' to quit.");
            }
            GameEvent::Commentary(_) => {}
        }
    }
}
