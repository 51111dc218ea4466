//! Scenario tests for WOPR's move selector.

use wopr_tictactoe::{Board, Player, Position, Strategy, choose_move, select_move};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_blocks_top_row_threat() {
    // X at top-left and top; O must take top-right.
    let b = board("XX. ... ...");
    let selection = select_move(&b, Player::O).expect("move available");
    assert_eq!(selection.position, Position::TopRight);
    assert_eq!(selection.strategy, Strategy::Block);
}

#[test]
fn test_takes_win_through_center_not_side() {
    // X O X / O X O / _ _ _ : X wins at 6 or 8, never 7.
    let b = board("XOX OXO ...");
    let pos = choose_move(&b, Player::X).expect("move available");
    assert!(matches!(pos, Position::BottomLeft | Position::BottomRight));
    assert_ne!(pos, Position::Bottom);
}

#[test]
fn test_first_winning_line_in_declaration_order() {
    // Rows and columns hold no open pair for X; the main diagonal is the
    // first qualifying line.
    let b = board("XOX OXO ...");
    assert_eq!(choose_move(&b, Player::X), Some(Position::BottomRight));
}

#[test]
fn test_empty_board_center_for_both_marks() {
    assert_eq!(choose_move(&Board::new(), Player::X), Some(Position::Center));
    assert_eq!(choose_move(&Board::new(), Player::O), Some(Position::Center));
}

#[test]
fn test_full_board_returns_none() {
    let b = board("XOX XOO OXX");
    assert_eq!(choose_move(&b, Player::X), None);
    assert_eq!(choose_move(&b, Player::O), None);
}

#[test]
fn test_answers_corner_opening_with_center() {
    let b = board("X.. ... ...");
    assert_eq!(choose_move(&b, Player::O), Some(Position::Center));
}

#[test]
fn test_answers_center_opening_with_first_corner() {
    let b = board("... .X. ...");
    assert_eq!(choose_move(&b, Player::O), Some(Position::TopLeft));
}

#[test]
fn test_block_uses_first_threat_in_line_order() {
    // X threatens the top row (2) and the left column (6), but O can win
    // on the bottom row.
    let b = board("XX. X.. .OO");
    assert_eq!(
        select_move(&b, Player::O).map(|s| (s.position, s.strategy)),
        Some((Position::BottomLeft, Strategy::Win))
    );

    let b = board("XX. XO. ..O");
    // O has no open line; the top row is scanned before the left column.
    assert_eq!(
        select_move(&b, Player::O).map(|s| (s.position, s.strategy)),
        Some((Position::TopRight, Strategy::Block))
    );
}

#[test]
fn test_heuristic_never_loses_to_first_free_square_player() {
    // X always plays the first empty square; O uses the selector.
    let mut b = Board::new();
    let mut to_move = Player::X;
    while !wopr_tictactoe::is_game_over(&b) {
        let pos = match to_move {
            Player::X => b.empty_positions()[0],
            Player::O => choose_move(&b, Player::O).expect("board not full"),
        };
        b.place(pos, to_move).expect("empty square");
        to_move = to_move.opponent();
    }
    assert_ne!(wopr_tictactoe::winner(&b), Some(Player::X));
}
