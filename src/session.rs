//! Turn sequencing for a game between a human and WOPR.
//!
//! [`GameSession`] owns the board and decides whose turn it is. It also
//! carries the two pieces of per-game bookkeeping the presentation layer
//! cannot be trusted with:
//!
//! - the end-of-game latch, so the closing announcement happens once no
//!   matter how often a finished game is re-evaluated, and
//! - the commentary ticket (game number + board generation), so a line
//!   requested for an earlier board is never shown against a later one.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use wopr_tictactoe::{Board, GameStatus, Player, Position, Selection, rules, select_move};

use crate::commentary::HISTORY_WINDOW;

/// First line of every game.
pub const GREETING: &str = "Would you like to play a game?";

/// Whose move the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum TurnPhase {
    /// The human may place a mark.
    #[display("awaiting human move")]
    AwaitingHuman,
    /// WOPR is thinking.
    #[display("awaiting opponent move")]
    AwaitingOpponent,
    /// The board is won or drawn.
    #[display("game over")]
    GameOver,
}

/// Why a human move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionError {
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// WOPR is still to move.
    #[display("It's not your turn")]
    NotYourTurn,

    /// The square is taken.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for SessionError {}

/// Identifies the board state a commentary request was issued against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentaryTicket {
    game: u64,
    generation: u64,
}

/// One game between a human and WOPR, plus its console history.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    phase: TurnPhase,
    human: Player,
    last_human_move: Option<Position>,
    messages: Vec<String>,
    end_announced: bool,
    game: u64,
    generation: u64,
}

impl GameSession {
    /// Starts the first game. The human plays X and moves first.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: TurnPhase::AwaitingHuman,
            human: Player::X,
            last_human_move: None,
            messages: vec![GREETING.to_string()],
            end_announced: false,
            game: 1,
            generation: 0,
        }
    }

    /// Discards the current game and starts a new one.
    #[instrument(skip(self), fields(game = self.game))]
    pub fn reset(&mut self) {
        info!("Starting new game");
        self.board = Board::new();
        self.phase = TurnPhase::AwaitingHuman;
        self.last_human_move = None;
        self.messages = vec![GREETING.to_string()];
        self.end_announced = false;
        self.game += 1;
        self.generation = 0;
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose move it is.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The outcome of the current board.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// WOPR's mark.
    pub fn opponent(&self) -> Player {
        self.human.opponent()
    }

    /// The human's most recent move in this game.
    pub fn last_human_move(&self) -> Option<Position> {
        self.last_human_move
    }

    /// Every console line of this game, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The lines that accompany a commentary request.
    pub fn recent_messages(&self) -> &[String] {
        let start = self.messages.len().saturating_sub(HISTORY_WINDOW);
        &self.messages[start..]
    }

    /// Appends a console line.
    pub fn push_message(&mut self, line: impl Into<String>) {
        self.messages.push(line.into());
    }

    /// Places the human's mark.
    ///
    /// Returns the phase the session moved to. Refused moves leave the
    /// session untouched.
    #[instrument(skip(self), fields(game = self.game, phase = %self.phase))]
    pub fn play_human(&mut self, position: Position) -> Result<TurnPhase, SessionError> {
        match self.phase {
            TurnPhase::GameOver => return Err(SessionError::GameOver),
            TurnPhase::AwaitingOpponent => return Err(SessionError::NotYourTurn),
            TurnPhase::AwaitingHuman => {}
        }
        self.board
            .place(position, self.human)
            .map_err(|_| SessionError::SquareOccupied(position))?;
        self.last_human_move = Some(position);
        self.advance(TurnPhase::AwaitingOpponent);
        debug!(phase = %self.phase, "Human moved");
        Ok(self.phase)
    }

    /// Lets WOPR choose and place its mark.
    ///
    /// Does nothing and returns `None` unless WOPR is to move.
    #[instrument(skip(self), fields(game = self.game, phase = %self.phase))]
    pub fn play_opponent(&mut self) -> Option<Selection> {
        if self.phase != TurnPhase::AwaitingOpponent {
            debug!("Not the opponent's turn");
            return None;
        }
        let Some(selection) = select_move(&self.board, self.opponent()) else {
            warn!("Selector found no move on a live board");
            return None;
        };
        if let Err(e) = self.board.place(selection.position, self.opponent()) {
            warn!(error = %e, "Selector chose an occupied square");
            return None;
        }
        self.advance(TurnPhase::AwaitingHuman);
        info!(position = %selection.position, strategy = %selection.strategy, "Opponent moved");
        Some(selection)
    }

    /// Returns the final outcome the first time it is asked for after the
    /// game ends, and `None` on every other call.
    #[instrument(skip(self), fields(game = self.game))]
    pub fn announce_end(&mut self) -> Option<GameStatus> {
        if self.phase != TurnPhase::GameOver || self.end_announced {
            return None;
        }
        self.end_announced = true;
        let status = self.status();
        info!(%status, "Game over");
        Some(status)
    }

    /// Snapshot of the current board state for tagging commentary.
    pub fn ticket(&self) -> CommentaryTicket {
        CommentaryTicket {
            game: self.game,
            generation: self.generation,
        }
    }

    /// Checks whether a ticket still refers to the current board.
    pub fn is_current(&self, ticket: CommentaryTicket) -> bool {
        ticket == self.ticket()
    }

    /// Appends a commentary line if its ticket is still current.
    ///
    /// Returns whether the line was kept.
    #[instrument(skip(self, line), fields(game = self.game, generation = self.generation))]
    pub fn accept_commentary(&mut self, ticket: CommentaryTicket, line: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            debug!(?ticket, "Discarding stale commentary");
            return false;
        }
        self.push_message(line);
        true
    }

    fn advance(&mut self, next: TurnPhase) {
        self.generation += 1;
        self.phase = if self.status().is_over() {
            TurnPhase::GameOver
        } else {
            next
        };
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
