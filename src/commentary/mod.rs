//! WOPR's commentary collaborator.
//!
//! A [`Commentator`] turns a [`CommentaryRequest`] into one short line of
//! flavor text. Generation may be slow or fail; [`commentate`] bounds it with
//! a timeout and substitutes a [`FallbackLine`], so callers always get
//! something to print.

mod fallback;
mod llm;
pub mod prompt;
mod request;

pub use fallback::{CannedCommentator, FallbackLine};
pub use llm::LlmCommentator;
pub use request::{CommentaryPhase, CommentaryRequest, HISTORY_WINDOW};

use crate::llm_client::LlmError;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Source of commentary lines.
#[async_trait::async_trait]
pub trait Commentator: Send + Sync {
    /// Produces one line for the request.
    async fn comment(&self, request: &CommentaryRequest) -> Result<String, CommentaryError>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Why a commentator produced nothing usable.
#[derive(Debug, Clone, derive_more::Display)]
pub enum CommentaryError {
    /// The text-generation request failed.
    #[display("{}", _0)]
    Llm(LlmError),

    /// The reply was blank.
    #[display("Commentator returned an empty line")]
    Empty,

    /// The reply did not arrive in time.
    #[display("Commentary timed out after {:?}", _0)]
    TimedOut(Duration),
}

impl std::error::Error for CommentaryError {}

impl From<LlmError> for CommentaryError {
    fn from(err: LlmError) -> Self {
        Self::Llm(err)
    }
}

/// Asks `commentator` for a line, falling back to a canned one on failure.
///
/// Never fails and never waits longer than `timeout`.
#[instrument(
    skip(commentator, request),
    fields(commentator = commentator.name(), phase = ?request.phase())
)]
pub async fn commentate(
    commentator: &dyn Commentator,
    request: &CommentaryRequest,
    timeout: Duration,
) -> String {
    let result = match tokio::time::timeout(timeout, commentator.comment(request)).await {
        Ok(Ok(line)) if line.trim().is_empty() => Err(CommentaryError::Empty),
        Ok(Ok(line)) => Ok(line.trim().to_string()),
        Ok(Err(e)) => Err(e),
        Err(_) => Err(CommentaryError::TimedOut(timeout)),
    };

    match result {
        Ok(line) => {
            debug!(line = %line, "Commentary generated");
            line
        }
        Err(e) => {
            let fallback = FallbackLine::for_request(request);
            warn!(error = %e, fallback = ?fallback, "Commentary unavailable, using canned line");
            fallback.text().to_string()
        }
    }
}
