//! Tests for turn sequencing and the end-of-game latch.

use wopr::{GREETING, GameSession, GameStatus, Player, Position, SessionError, TurnPhase};

/// Plays human moves, letting WOPR answer each one that leaves the game open.
fn play(session: &mut GameSession, moves: &[Position]) {
    for &pos in moves {
        if session.play_human(pos).expect("legal move") == TurnPhase::AwaitingOpponent {
            session.play_opponent().expect("opponent move");
        }
    }
}

#[test]
fn test_turns_alternate() {
    let mut session = GameSession::new();
    assert_eq!(session.play_human(Position::TopLeft), Ok(TurnPhase::AwaitingOpponent));
    assert_eq!(session.phase(), TurnPhase::AwaitingOpponent);

    let selection = session.play_opponent().expect("opponent move");
    assert_eq!(selection.position, Position::Center);
    assert_eq!(session.phase(), TurnPhase::AwaitingHuman);
    assert_eq!(session.last_human_move(), Some(Position::TopLeft));
    assert!(session.board().is_consistent());
}

#[test]
fn test_opponent_win_ends_game() {
    let mut session = GameSession::new();
    play(
        &mut session,
        &[Position::TopLeft, Position::Bottom, Position::BottomLeft, Position::Top],
    );
    assert_eq!(session.phase(), TurnPhase::GameOver);
    assert_eq!(session.status(), GameStatus::Won(Player::O));
    assert_eq!(session.play_human(Position::Left), Err(SessionError::GameOver));
    assert_eq!(session.play_opponent(), None);
}

#[test]
fn test_human_move_can_end_game_in_draw() {
    let mut session = GameSession::new();
    play(
        &mut session,
        &[
            Position::TopLeft,
            Position::Top,
            Position::BottomLeft,
            Position::Right,
            Position::Bottom,
        ],
    );
    assert_eq!(session.phase(), TurnPhase::GameOver);
    assert_eq!(session.status(), GameStatus::Draw);
}

#[test]
fn test_end_announced_exactly_once() {
    let mut session = GameSession::new();
    assert_eq!(session.announce_end(), None);

    play(
        &mut session,
        &[Position::TopLeft, Position::Bottom, Position::BottomLeft, Position::Top],
    );

    assert_eq!(session.announce_end(), Some(GameStatus::Won(Player::O)));
    for _ in 0..10 {
        assert_eq!(session.announce_end(), None);
    }
}

#[test]
fn test_reset_rearms_latch_and_clears_history() {
    let mut session = GameSession::new();
    play(
        &mut session,
        &[Position::TopLeft, Position::Bottom, Position::BottomLeft, Position::Top],
    );
    session.push_message("Victory assured.");
    assert!(session.announce_end().is_some());

    session.reset();
    assert_eq!(session.phase(), TurnPhase::AwaitingHuman);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.messages(), [GREETING.to_string()]);
    assert_eq!(session.last_human_move(), None);
    assert_eq!(session.announce_end(), None);

    play(
        &mut session,
        &[Position::TopLeft, Position::Bottom, Position::BottomLeft, Position::Top],
    );
    assert_eq!(session.announce_end(), Some(GameStatus::Won(Player::O)));
}

#[test]
fn test_stale_ticket_rejected_after_board_change() {
    let mut session = GameSession::new();
    session.play_human(Position::Center).unwrap();
    session.play_opponent().unwrap();
    let ticket = session.ticket();

    session.play_human(Position::Bottom).unwrap();
    assert!(!session.accept_commentary(ticket, "stale"));
    assert!(!session.messages().iter().any(|m| m == "stale"));
}

#[test]
fn test_stale_ticket_rejected_after_reset() {
    let mut session = GameSession::new();
    let ticket = session.ticket();
    session.reset();
    // Same generation number, different game.
    assert!(!session.accept_commentary(ticket, "from the last game"));
    assert_eq!(session.messages(), [GREETING.to_string()]);
}

#[test]
fn test_current_ticket_accepted() {
    let mut session = GameSession::new();
    session.play_human(Position::Center).unwrap();
    session.play_opponent().unwrap();
    let ticket = session.ticket();
    assert!(session.accept_commentary(ticket, "Center. Predictable."));
    assert_eq!(session.messages().last().unwrap(), "Center. Predictable.");
}
