//! Error types for tour search and verification.

use std::fmt;

use super::Square;

/// Error type for rejected search requests and aborted runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Board size must be at least 1
    InvalidBoardSize { size: usize },
    /// `size * size` does not fit the visit index
    BoardTooLarge { size: usize },
    /// Start square lies off the board
    StartOutOfBounds { start: Square, size: usize },
    /// Time limit must be non-zero
    ZeroTimeLimit,
    /// Allocation for search bookkeeping failed
    ResourceExhausted { what: &'static str },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidBoardSize { size } => {
                write!(f, "Board size must be at least 1, found {size}")
            }
            SearchError::BoardTooLarge { size } => {
                write!(f, "Board size {size} is too large to search")
            }
            SearchError::StartOutOfBounds { start, size } => {
                write!(
                    f,
                    "Start square ({}, {}) is outside the {size}x{size} board",
                    start.row, start.col
                )
            }
            SearchError::ZeroTimeLimit => write!(f, "Time limit must be greater than zero"),
            SearchError::ResourceExhausted { what } => {
                write!(f, "Out of memory while growing the {what}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

impl SearchError {
    /// Whether the request itself was bad, as opposed to the run failing.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, SearchError::ResourceExhausted { .. })
    }
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for strategy name parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// Name matches no known strategy
    Unknown { name: String },
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyError::Unknown { name } => write!(f, "Unknown search strategy '{name}'"),
        }
    }
}

impl std::error::Error for StrategyError {}

/// Error type for tours that fail verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    /// Tour does not cover the board
    WrongLength { expected: usize, found: usize },
    /// Tour does not begin on the start square
    WrongStart { expected: Square, found: Option<Square> },
    /// Square is off the board or visited twice
    Revisited { step: usize, square: Square },
    /// Consecutive squares are not a knight move apart
    IllegalStep { step: usize, from: Square, to: Square },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourError::WrongLength { expected, found } => {
                write!(f, "Tour must have {expected} squares, found {found}")
            }
            TourError::WrongStart { expected, found } => match found {
                Some(sq) => write!(f, "Tour must start on {expected}, starts on {sq}"),
                None => write!(f, "Tour must start on {expected}, but is empty"),
            },
            TourError::Revisited { step, square } => {
                write!(f, "Step {step} lands on {square}, which is off the board or already visited")
            }
            TourError::IllegalStep { step, from, to } => {
                write!(f, "Step {step} from {from} to {to} is not a knight move")
            }
        }
    }
}

impl std::error::Error for TourError {}
