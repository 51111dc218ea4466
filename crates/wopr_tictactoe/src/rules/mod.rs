//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board snapshot. They are total over any
//! nine-cell board, including ones no legal game could reach.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, winner};

use crate::{Board, GameStatus};
use tracing::instrument;

/// Checks whether the game on this board has ended.
#[instrument]
pub fn is_game_over(board: &Board) -> bool {
    winner(board).is_some() || is_draw(board)
}

/// Derives the outcome of the board.
#[instrument]
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
