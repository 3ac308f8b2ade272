//! Board model and knight's tour search.
//!
//! A square `n x n` board, a knight that may land on each square once, and
//! a family of search strategies for finding an open tour from a fixed
//! start square.
//!
//! # Example
//! ```
//! use knights_tour::board::{run_search, SearchConfig, Strategy};
//! use std::time::Duration;
//!
//! let config = SearchConfig::new(5, Strategy::DfsWarnsdorff, Duration::from_secs(10));
//! let result = run_search(&config).unwrap();
//! assert!(result.is_solved());
//! println!("{} after {} nodes", result.outcome, result.nodes_expanded);
//! ```

mod error;
pub mod movegen;
mod search;
mod types;

#[cfg(test)]
mod tests;

pub use error::{SearchError, SquareError, StrategyError, TourError};
pub use movegen::{legal_moves, onward_degree, MoveList};
pub use types::{Occupancy, Square, UNVISITED};

pub use search::{
    run_search, run_search_with_clock, verify_tour, warnsdorff_score, Discipline, MoveOrdering,
    OrderKey, Outcome, ScoredMove, ScoredMoveList, SearchConfig, SearchResult, SearchState,
    SearchStats, Strategy, TieBreak, VisitedScope,
};

// Lower-level pieces for callers driving their own loop
pub use search::{
    Ancestors, Frontier, DEFAULT_BOARD_SIZE, DEFAULT_PROGRESS_INTERVAL, DEFAULT_TIME_LIMIT,
    MAX_BOARD_SIZE,
};
