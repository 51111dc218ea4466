//! WOPR's move selector.
//!
//! A one-ply heuristic evaluated in strict priority order:
//!
//! 1. complete one of our own lines,
//! 2. block the opponent's line,
//! 3. take the center,
//! 4. take a corner, scanning 0, 2, 6, 8,
//! 5. take a side, scanning 1, 3, 5, 7.
//!
//! The order is part of WOPR's observable play style. It is not a search and
//! it does not guarantee optimal play.

use crate::rules::LINES;
use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const CORNERS: [Position; 4] = [
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
];

const SIDES: [Position; 4] = [
    Position::Top,
    Position::Left,
    Position::Right,
    Position::Bottom,
];

/// Which selector rule produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Strategy {
    /// Completes one of the mover's lines.
    Win,
    /// Occupies the cell that would complete the opponent's line.
    Block,
    /// Takes the center.
    Center,
    /// Takes the first free corner.
    Corner,
    /// Takes the first free side.
    Side,
}

/// A selected move and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Where to play.
    pub position: Position,
    /// Why.
    pub strategy: Strategy,
}

/// Finds a cell that completes a line for `player`.
///
/// Returns the empty cell of the first line (in [`LINES`] order) holding
/// exactly two of the player's marks and one empty cell.
#[instrument]
pub fn find_winning_move(board: &Board, player: Player) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(player))
            .count();
        let mut empty = line.iter().copied().filter(|pos| board.is_empty(*pos));
        match (owned, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(pos),
            _ => None,
        }
    })
}

/// Selects the move `player` should make, with the rule that chose it.
///
/// Returns `None` only when the board is full. On a board that is already
/// won the result is some empty cell; callers guard terminal boards.
#[instrument]
pub fn select_move(board: &Board, player: Player) -> Option<Selection> {
    let pick = |position, strategy| Selection { position, strategy };

    let selection = find_winning_move(board, player)
        .map(|pos| pick(pos, Strategy::Win))
        .or_else(|| {
            find_winning_move(board, player.opponent()).map(|pos| pick(pos, Strategy::Block))
        })
        .or_else(|| {
            board
                .is_empty(Position::Center)
                .then(|| pick(Position::Center, Strategy::Center))
        })
        .or_else(|| {
            CORNERS
                .into_iter()
                .find(|pos| board.is_empty(*pos))
                .map(|pos| pick(pos, Strategy::Corner))
        })
        .or_else(|| {
            SIDES
                .into_iter()
                .find(|pos| board.is_empty(*pos))
                .map(|pos| pick(pos, Strategy::Side))
        });

    match &selection {
        Some(s) => debug!(position = %s.position, strategy = %s.strategy, "Move selected"),
        None => debug!("No move available"),
    }
    selection
}

/// Chooses the position `player` should occupy, or `None` on a full board.
pub fn choose_move(board: &Board, player: Player) -> Option<Position> {
    select_move(board, player).map(|s| s.position)
}
