// Proptest generators for board states.
// `board()` covers every 9-cell input, legal or not; `played_board()` only
// yields boards reachable by alternating moves from an empty grid.

use proptest::prelude::*;
use wopr_tictactoe::{Board, Player, Position, Square, is_game_over};

/// Generate a random Player
pub fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

/// Generate a random Square
pub fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

/// Generate any board, including ones that cannot arise in play
pub fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square()).prop_map(Board::from_squares)
}

/// Generate a line index into `LINES`
pub fn line_index() -> impl Strategy<Value = usize> {
    0usize..8
}

/// Generate a board reached by X and O alternating from an empty grid,
/// stopping early if someone wins
pub fn played_board() -> impl Strategy<Value = Board> {
    (Just(Position::ALL.to_vec()).prop_shuffle(), 0usize..=9).prop_map(|(order, moves)| {
        let mut board = Board::new();
        let mut mover = Player::X;
        for pos in order.into_iter().take(moves) {
            if is_game_over(&board) {
                break;
            }
            board.set(pos, Square::Occupied(mover));
            mover = mover.opponent();
        }
        board
    })
}

/// The player whose turn it is on a board produced by `played_board`
pub fn to_move(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}
