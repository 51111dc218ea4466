//! Tests for bounded, never-failing commentary.

use async_trait::async_trait;
use std::time::Duration;
use wopr::{
    Board, CommentaryError, CommentaryRequest, Commentator, GameStatus, Player, Position,
    commentate,
};

/// Replies with a fixed result after an optional pause.
struct Scripted {
    reply: Result<String, CommentaryError>,
    pause: Duration,
}

impl Scripted {
    fn says(line: &str) -> Self {
        Self {
            reply: Ok(line.to_string()),
            pause: Duration::ZERO,
        }
    }
}

#[async_trait]
impl Commentator for Scripted {
    async fn comment(&self, _request: &CommentaryRequest) -> Result<String, CommentaryError> {
        if !self.pause.is_zero() {
            tokio::time::sleep(self.pause).await;
        }
        self.reply.clone()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn move_request() -> CommentaryRequest {
    let board: Board = "X.. .O. ...".parse().unwrap();
    CommentaryRequest::for_move(board, Player::O, Position::Center, Some(Position::TopLeft), &[])
}

fn end_request(status: GameStatus) -> CommentaryRequest {
    CommentaryRequest::for_end(Board::new(), Player::O, status, &[])
}

#[tokio::test]
async fn test_reply_is_trimmed() {
    let line = commentate(
        &Scripted::says("  The center. How predictable.\n"),
        &move_request(),
        Duration::from_secs(1),
    )
    .await;
    assert_eq!(line, "The center. How predictable.");
}

#[tokio::test]
async fn test_blank_reply_falls_back() {
    let line = commentate(&Scripted::says("   \n"), &move_request(), Duration::from_secs(1)).await;
    assert_eq!(line, "Processing... Move complete.");
}

#[tokio::test]
async fn test_error_falls_back_by_outcome() {
    let failing = Scripted {
        reply: Err(CommentaryError::Empty),
        pause: Duration::ZERO,
    };
    let timeout = Duration::from_secs(1);

    assert_eq!(
        commentate(&failing, &end_request(GameStatus::Won(Player::O)), timeout).await,
        "Victory assured. Thank you for a stimulating game."
    );
    assert_eq!(
        commentate(&failing, &end_request(GameStatus::Won(Player::X)), timeout).await,
        "Improbable outcome. You have prevailed this time."
    );
    assert_eq!(
        commentate(&failing, &end_request(GameStatus::Draw), timeout).await,
        "A strange game. The only winning move is not to play."
    );
}

#[tokio::test]
async fn test_slow_reply_times_out() {
    let slow = Scripted {
        reply: Ok("Eventually.".to_string()),
        pause: Duration::from_secs(30),
    };
    let line = commentate(&slow, &move_request(), Duration::from_millis(20)).await;
    assert_eq!(line, "Processing... Move complete.");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        CommentaryError::TimedOut(Duration::from_millis(250)).to_string(),
        "Commentary timed out after 250ms"
    );
    assert_eq!(
        CommentaryError::Empty.to_string(),
        "Commentator returned an empty line"
    );
}
