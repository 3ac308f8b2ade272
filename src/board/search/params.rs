//! Search configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_BOARD_SIZE, DEFAULT_PROGRESS_INTERVAL, DEFAULT_TIME_LIMIT, MAX_BOARD_SIZE,
};
use super::frontier::Discipline;
use super::move_order::{MoveOrdering, TieBreak};
use crate::board::error::{SearchError, StrategyError};
use crate::board::Square;

/// Search strategy: a frontier discipline paired with a move ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Uninformed breadth-first search
    Bfs,
    /// Uninformed depth-first search
    Dfs,
    /// Depth-first, moves ordered by Warnsdorff's rule
    DfsWarnsdorff,
    /// Depth-first, Warnsdorff with a distance tie-break
    DfsEnhanced(TieBreak),
    /// Always expand the pending state with the lowest ordering key
    BestFirst(MoveOrdering),
}

impl Strategy {
    /// The four strategies of the classic assignment, in menu order.
    pub const CLASSIC: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::DfsWarnsdorff,
        Strategy::DfsEnhanced(TieBreak::CenterDistance),
    ];

    #[must_use]
    pub fn ordering(self) -> MoveOrdering {
        match self {
            Strategy::Bfs | Strategy::Dfs => MoveOrdering::None,
            Strategy::DfsWarnsdorff => MoveOrdering::Warnsdorff,
            Strategy::DfsEnhanced(tie_break) => MoveOrdering::Enhanced(tie_break),
            Strategy::BestFirst(ordering) => ordering,
        }
    }

    #[must_use]
    pub fn discipline(self) -> Discipline {
        match self {
            Strategy::Bfs => Discipline::Fifo,
            Strategy::Dfs | Strategy::DfsWarnsdorff | Strategy::DfsEnhanced(_) => Discipline::Lifo,
            Strategy::BestFirst(_) => Discipline::BestFirst,
        }
    }

    /// Depth-first strategies backtrack over a single path; the others keep
    /// one occupancy for the whole run.
    #[must_use]
    pub fn default_visited_scope(self) -> VisitedScope {
        match self.discipline() {
            Discipline::Lifo => VisitedScope::Path,
            Discipline::Fifo | Discipline::BestFirst => VisitedScope::Run,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::DfsWarnsdorff => "dfs-h1b",
            Strategy::DfsEnhanced(TieBreak::CenterDistance) => "dfs-h2",
            Strategy::DfsEnhanced(TieBreak::CornerDistance) => "dfs-h2-corner",
            Strategy::BestFirst(MoveOrdering::None) => "best-first-none",
            Strategy::BestFirst(MoveOrdering::Warnsdorff) => "best-first-h1b",
            Strategy::BestFirst(MoveOrdering::Enhanced(TieBreak::CenterDistance)) => {
                "best-first-h2"
            }
            Strategy::BestFirst(MoveOrdering::Enhanced(TieBreak::CornerDistance)) => {
                "best-first-h2-corner"
            }
        };
        f.write_str(name)
    }
}

/// Accepts the display names plus the numeric (`1`-`4`) and letter
/// (`a`-`d`) menu choices.
impl FromStr for Strategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let strategy = match normalized.as_str() {
            "bfs" | "1" | "a" => Strategy::Bfs,
            "dfs" | "2" | "b" => Strategy::Dfs,
            "dfs-h1b" | "h1b" | "warnsdorff" | "3" | "c" => Strategy::DfsWarnsdorff,
            "dfs-h2" | "h2" | "4" | "d" => Strategy::DfsEnhanced(TieBreak::CenterDistance),
            "dfs-h2-corner" | "h2-corner" => Strategy::DfsEnhanced(TieBreak::CornerDistance),
            "best-first-none" => Strategy::BestFirst(MoveOrdering::None),
            "best-first" | "best-first-h1b" => Strategy::BestFirst(MoveOrdering::Warnsdorff),
            "best-first-h2" => {
                Strategy::BestFirst(MoveOrdering::Enhanced(TieBreak::CenterDistance))
            }
            "best-first-h2-corner" => {
                Strategy::BestFirst(MoveOrdering::Enhanced(TieBreak::CornerDistance))
            }
            _ => {
                return Err(StrategyError::Unknown {
                    name: s.to_string(),
                })
            }
        };
        Ok(strategy)
    }
}

/// Which squares count as taken when generating moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VisitedScope {
    /// A square stays taken for the rest of the run once any state reaches it
    Run,
    /// A square is taken only if it lies on the state's own tour
    Path,
}

/// Parameters of one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    pub board_size: usize,
    pub strategy: Strategy,
    pub time_limit: Duration,
    pub start: Square,
    /// `None` uses [`Strategy::default_visited_scope`]
    pub visited_scope: Option<VisitedScope>,
    /// Expanded nodes between progress log lines; `0` disables them
    pub progress_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            board_size: DEFAULT_BOARD_SIZE,
            strategy: Strategy::DfsWarnsdorff,
            time_limit: DEFAULT_TIME_LIMIT,
            start: Square::ORIGIN,
            visited_scope: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn new(board_size: usize, strategy: Strategy, time_limit: Duration) -> Self {
        SearchConfig {
            board_size,
            strategy,
            time_limit,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_start(mut self, start: Square) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub fn with_visited_scope(mut self, scope: VisitedScope) -> Self {
        self.visited_scope = Some(scope);
        self
    }

    #[must_use]
    pub fn with_progress_interval(mut self, nodes: u64) -> Self {
        self.progress_interval = nodes;
        self
    }

    #[must_use]
    pub fn visited_scope(&self) -> VisitedScope {
        self.visited_scope
            .unwrap_or_else(|| self.strategy.default_visited_scope())
    }

    /// Number of squares on a complete tour.
    #[must_use]
    pub fn goal_depth(&self) -> usize {
        self.board_size * self.board_size
    }

    /// Reject requests the engine must not start on.
    ///
    /// # Errors
    /// The first invalid field, checked in the order size, start, time limit.
    pub fn validate(&self) -> Result<(), SearchError> {
        let size = self.board_size;
        if size == 0 {
            return Err(SearchError::InvalidBoardSize { size });
        }
        if size > MAX_BOARD_SIZE {
            return Err(SearchError::BoardTooLarge { size });
        }
        if !self.start.is_in_bounds(size) {
            return Err(SearchError::StartOutOfBounds {
                start: self.start,
                size,
            });
        }
        if self.time_limit.is_zero() {
            return Err(SearchError::ZeroTimeLimit);
        }
        Ok(())
    }
}
