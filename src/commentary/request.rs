//! Context handed to a commentator.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use wopr_tictactoe::{Board, GameStatus, Player, Position};

/// How many prior lines of dialogue accompany a request.
pub const HISTORY_WINDOW: usize = 8;

/// The moment in the game being commented on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentaryPhase {
    /// WOPR just moved.
    Move {
        /// Where WOPR played.
        chosen: Position,
        /// The human's preceding move, if any.
        last_human_move: Option<Position>,
    },
    /// The game ended.
    End {
        /// Final outcome.
        status: GameStatus,
    },
}

/// A request for one line of commentary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CommentaryRequest {
    /// Board snapshot after the event.
    board: Board,
    /// The commentator's own mark.
    mover: Player,
    /// What happened.
    phase: CommentaryPhase,
    /// Prior lines, oldest first, at most [`HISTORY_WINDOW`].
    history: Vec<String>,
}

impl CommentaryRequest {
    /// Request commentary on WOPR's move.
    pub fn for_move(
        board: Board,
        mover: Player,
        chosen: Position,
        last_human_move: Option<Position>,
        history: &[String],
    ) -> Self {
        Self::new(
            board,
            mover,
            CommentaryPhase::Move {
                chosen,
                last_human_move,
            },
            history,
        )
    }

    /// Request a closing line for a finished game.
    pub fn for_end(board: Board, mover: Player, status: GameStatus, history: &[String]) -> Self {
        Self::new(board, mover, CommentaryPhase::End { status }, history)
    }

    fn new(board: Board, mover: Player, phase: CommentaryPhase, history: &[String]) -> Self {
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        Self {
            board,
            mover,
            phase,
            history: history[start..].to_vec(),
        }
    }
}
