//! WOPR - tic-tac-toe against a rule-based opponent with optional LLM commentary.
//!
//! # Architecture
//!
//! - **Game logic**: rules and move selector live in [`wopr_tictactoe`]
//! - **Session**: turn sequencing and the end-of-game latch ([`GameSession`])
//! - **Commentary**: LLM-generated flavor text with canned fallbacks
//! - **Orchestrator**: opponent timing and cancelable commentary tasks
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::{Duration, Instant};
//! use wopr::{CannedCommentator, Orchestrator, Position};
//!
//! # async fn example() {
//! let (event_tx, _event_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut orchestrator = Orchestrator::new(
//!     Arc::new(CannedCommentator),
//!     Duration::from_millis(600),
//!     Duration::from_secs(8),
//!     event_tx,
//! );
//! orchestrator.human_move(Position::Center, Instant::now()).unwrap();
//! orchestrator.wait_for_opponent().await;
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod commentary;
mod config;
mod llm_client;
mod orchestrator;
mod session;

// Crate-level exports - Commentary
pub use commentary::{
    CannedCommentator, CommentaryError, CommentaryPhase, CommentaryRequest, Commentator,
    FallbackLine, HISTORY_WINDOW, LlmCommentator, commentate, prompt,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, WoprConfig};

// Crate-level exports - LLM client
pub use llm_client::{LlmClient, LlmConfig, LlmError, LlmProvider};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, Orchestrator};

// Crate-level exports - Session
pub use session::{CommentaryTicket, GREETING, GameSession, SessionError, TurnPhase};

// Crate-level exports - Game types
pub use wopr_tictactoe::{Board, GameStatus, Player, Position, Square};
