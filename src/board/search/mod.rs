//! Knight's tour search.
//!
//! Features:
//! - Breadth-first, depth-first and best-first search over partial tours
//! - Warnsdorff and enhanced (distance tie-break) move ordering
//! - Backtracking with strict mark/unmark pairs for depth-first search
//! - Run-wide or per-path visited bookkeeping for frontier searches
//! - Time budget checked once per iteration against an injectable clock
//!
//! Every run ends in exactly one [`Outcome`]; invalid requests are rejected
//! with a [`SearchError`] before any work is done.

mod backtrack;
mod constants;
mod expand;
mod frontier;
mod move_order;
mod params;
mod report;
mod state;
mod verify;

use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Occupancy, SearchError, Square};
use crate::timer::{Clock, Deadline, SystemClock};

pub use constants::{
    DEFAULT_BOARD_SIZE, DEFAULT_PROGRESS_INTERVAL, DEFAULT_TIME_LIMIT, MAX_BOARD_SIZE,
};
pub use frontier::{Discipline, Frontier};
pub use move_order::{
    warnsdorff_score, MoveOrdering, OrderKey, ScoredMove, ScoredMoveList, TieBreak,
};
pub use params::{SearchConfig, Strategy, VisitedScope};
pub use state::{Ancestors, SearchState};
pub use verify::verify_tour;

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// A complete tour, start square first
    Solved(Vec<Square>),
    /// Every reachable state was expanded without completing a tour
    Exhausted,
    /// The time budget ran out first
    TimedOut,
}

impl Outcome {
    /// Short lowercase tag, for logs and tables.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Solved(_) => "solved",
            Outcome::Exhausted => "exhausted",
            Outcome::TimedOut => "timed out",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Solved(_) => f.write_str("A solution was found."),
            Outcome::Exhausted => f.write_str("No solution exists."),
            Outcome::TimedOut => f.write_str("Timeout."),
        }
    }
}

/// Result of one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    pub outcome: Outcome,
    /// States taken off the frontier (or entered, when backtracking)
    pub nodes_expanded: u64,
    /// Deepest state expanded
    pub max_depth: u32,
    pub elapsed: Duration,
    pub board_size: usize,
    pub strategy: Strategy,
}

impl SearchResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved(_))
    }

    #[must_use]
    pub fn tour(&self) -> Option<&[Square]> {
        match &self.outcome {
            Outcome::Solved(tour) => Some(tour),
            Outcome::Exhausted | Outcome::TimedOut => None,
        }
    }

    /// Grid view of a solved tour: each square maps to its 1-based step.
    #[must_use]
    pub fn visit_order(&self) -> Option<Occupancy> {
        self.tour()
            .map(|tour| Occupancy::from_tour(self.board_size, tour))
    }
}

/// Counters kept while a run is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub max_depth: u32,
    pub peak_frontier: usize,
}

/// State shared by both engines for the duration of one run.
pub(crate) struct Run<'a, C: Clock + ?Sized> {
    pub(crate) size: usize,
    pub(crate) goal: u32,
    pub(crate) start: Square,
    pub(crate) strategy: Strategy,
    pub(crate) ordering: MoveOrdering,
    pub(crate) deadline: Deadline<'a, C>,
    pub(crate) stats: SearchStats,
    progress_interval: u64,
}

impl<'a, C: Clock + ?Sized> Run<'a, C> {
    fn new(config: &SearchConfig, deadline: Deadline<'a, C>) -> Self {
        Run {
            size: config.board_size,
            // validate() bounds the size so that this cannot truncate.
            goal: config.goal_depth() as u32,
            start: config.start,
            strategy: config.strategy,
            ordering: config.strategy.ordering(),
            deadline,
            stats: SearchStats::default(),
            progress_interval: config.progress_interval,
        }
    }

    /// Count one expansion at `depth`, with `pending` states still queued.
    pub(crate) fn record_expansion(&mut self, depth: u32, pending: usize) {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        self.stats.peak_frontier = self.stats.peak_frontier.max(pending);
        if self.progress_interval > 0 && self.stats.nodes % self.progress_interval == 0 {
            report::progress(&report::SearchInfo {
                strategy: self.strategy,
                nodes: self.stats.nodes,
                depth,
                max_depth: self.stats.max_depth,
                pending,
                elapsed: self.deadline.elapsed(),
            });
        }
    }
}

/// Run a search against the system clock.
///
/// # Errors
/// Input errors from [`SearchConfig::validate`], or
/// [`SearchError::ResourceExhausted`] if bookkeeping could not be allocated.
pub fn run_search(config: &SearchConfig) -> Result<SearchResult, SearchError> {
    run_search_with_clock(config, &SystemClock::new())
}

/// Run a search, sampling `clock` for the time budget.
///
/// # Errors
/// See [`run_search`].
pub fn run_search_with_clock<C: Clock + ?Sized>(
    config: &SearchConfig,
    clock: &C,
) -> Result<SearchResult, SearchError> {
    config.validate()?;

    let scope = config.visited_scope();
    report::started(config, scope);

    let deadline = Deadline::start(clock, config.time_limit);
    let mut run = Run::new(config, deadline);
    let discipline = config.strategy.discipline();
    let outcome = match (discipline, scope) {
        (Discipline::Lifo, VisitedScope::Path) => backtrack::search(&mut run),
        _ => expand::search(&mut run, discipline, scope),
    };
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(err) => {
            report::failed(config, &err);
            return Err(err);
        }
    };

    let result = SearchResult {
        outcome,
        nodes_expanded: run.stats.nodes,
        max_depth: run.stats.max_depth,
        elapsed: run.deadline.elapsed(),
        board_size: config.board_size,
        strategy: config.strategy,
    };
    report::finished(&result, run.stats.peak_frontier);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages_are_distinct() {
        let messages = [
            Outcome::Solved(vec![Square::ORIGIN]).to_string(),
            Outcome::Exhausted.to_string(),
            Outcome::TimedOut.to_string(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
        assert_eq!(messages[2], "Timeout.");
    }

    #[test]
    fn test_visit_order_of_solved_result() {
        let result = SearchResult {
            outcome: Outcome::Solved(vec![Square::ORIGIN]),
            nodes_expanded: 1,
            max_depth: 1,
            elapsed: Duration::ZERO,
            board_size: 1,
            strategy: Strategy::Dfs,
        };
        let grid = result.visit_order().expect("solved");
        assert_eq!(grid.visit_index(Square::ORIGIN), Some(1));
    }

    #[test]
    fn test_unsolved_result_has_no_tour() {
        let result = SearchResult {
            outcome: Outcome::TimedOut,
            nodes_expanded: 0,
            max_depth: 0,
            elapsed: Duration::ZERO,
            board_size: 5,
            strategy: Strategy::Bfs,
        };
        assert!(!result.is_solved());
        assert!(result.tour().is_none());
        assert!(result.visit_order().is_none());
    }
}
