//! Pure tic-tac-toe game logic for WOPR.
//!
//! Everything in this crate is synchronous and side-effect free:
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: [`winner`], [`is_draw`], [`is_game_over`], [`status`]
//! - **Selector**: [`choose_move`], the one-ply heuristic WOPR plays with
//!
//! # Example
//!
//! ```
//! use wopr_tictactoe::{choose_move, Board, Player, Position};
//!
//! let board: Board = "XX. ... ...".parse().unwrap();
//! assert_eq!(choose_move(&board, Player::O), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
pub mod rules;
mod selector;
mod types;

pub use error::{BoardParseError, PlaceError};
pub use position::Position;
pub use rules::{LINES, is_draw, is_full, is_game_over, status, winner};
pub use selector::{Selection, Strategy, choose_move, find_winning_move, select_move};
pub use types::{Board, GameStatus, Player, Square};
