//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
///
/// Scan order is the tie-break for boards with several completed lines.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::Top, Position::TopRight],
    [Position::Left, Position::Center, Position::Right],
    [Position::BottomLeft, Position::Bottom, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::Left, Position::BottomLeft],
    [Position::Top, Position::Center, Position::Bottom],
    [Position::TopRight, Position::Right, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first line (in [`LINES`] order) held entirely by
/// one player, `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Some(player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Top, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = ".O. .O. .O.".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "..O .O. O..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX ... ...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        // Malformed board: O holds the bottom row, X holds the first column.
        // Rows are scanned before columns.
        let board: Board = "X.. X.. OOO".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));

        let board: Board = "X.O X.O X.O".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }
}
