//! Canned lines used whenever generated commentary is unavailable.

use super::{CommentaryError, CommentaryPhase, CommentaryRequest, Commentator};
use wopr_tictactoe::GameStatus;

/// The fixed phrase set, keyed by outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackLine {
    /// WOPR won.
    Victory,
    /// The human won.
    Defeat,
    /// Nobody won.
    Draw,
    /// Any move.
    Move,
}

impl FallbackLine {
    /// Picks the line for a request.
    pub fn for_request(request: &CommentaryRequest) -> Self {
        match request.phase() {
            CommentaryPhase::End {
                status: GameStatus::Won(winner),
            } if *winner == *request.mover() => FallbackLine::Victory,
            CommentaryPhase::End {
                status: GameStatus::Won(_),
            } => FallbackLine::Defeat,
            CommentaryPhase::End {
                status: GameStatus::Draw,
            } => FallbackLine::Draw,
            CommentaryPhase::End {
                status: GameStatus::InProgress,
            }
            | CommentaryPhase::Move { .. } => FallbackLine::Move,
        }
    }

    /// The text of the line.
    pub fn text(self) -> &'static str {
        match self {
            FallbackLine::Victory => "Victory assured. Thank you for a stimulating game.",
            FallbackLine::Defeat => "Improbable outcome. You have prevailed this time.",
            FallbackLine::Draw => "A strange game. The only winning move is not to play.",
            FallbackLine::Move => "Processing... Move complete.",
        }
    }
}

/// Commentator that only ever speaks canned lines.
///
/// Used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedCommentator;

#[async_trait::async_trait]
impl Commentator for CannedCommentator {
    async fn comment(&self, request: &CommentaryRequest) -> Result<String, CommentaryError> {
        Ok(FallbackLine::for_request(request).text().to_string())
    }

    fn name(&self) -> &str {
        "canned"
    }
}
