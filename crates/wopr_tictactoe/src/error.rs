//! Error types for board manipulation.

use crate::Position;

/// Error returned when placing a mark on the board fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for PlaceError {}

/// Error returned when parsing a board from text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark nor an empty-cell marker.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),

    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}
