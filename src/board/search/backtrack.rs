//! Depth-first backtracking over a single shared board.
//!
//! The recursion is unrolled onto an explicit frame stack: one frame per
//! square of the current partial tour, holding that square's ordered
//! successors and a cursor into them. Entering a square marks it; leaving
//! it unmarks it, so the board always holds exactly the current path.

use super::move_order::ScoredMoveList;
use super::{Outcome, Run};
use crate::board::movegen::legal_moves;
use crate::board::{Occupancy, SearchError, Square};
use crate::timer::Clock;

struct Frame {
    square: Square,
    moves: ScoredMoveList,
    next: usize,
}

struct Backtracker {
    occupancy: Occupancy,
    frames: Vec<Frame>,
}

impl Backtracker {
    fn new(size: usize) -> Result<Self, SearchError> {
        let occupancy = Occupancy::try_new(size)
            .map_err(|_| SearchError::ResourceExhausted { what: "occupancy" })?;
        Ok(Backtracker {
            occupancy,
            frames: Vec::new(),
        })
    }

    /// Depth of a square about to be entered.
    #[inline]
    fn next_depth(&self) -> u32 {
        self.frames.len() as u32 + 1
    }

    fn tour_through(&self, last: Square) -> Result<Vec<Square>, SearchError> {
        let mut tour = Vec::new();
        tour.try_reserve_exact(self.frames.len() + 1)
            .map_err(|_| SearchError::ResourceExhausted { what: "tour" })?;
        tour.extend(self.frames.iter().map(|frame| frame.square));
        tour.push(last);
        Ok(tour)
    }

    /// Pick the next untried successor of the top frame, popping exhausted
    /// frames on the way. `None` once the root has no moves left.
    fn advance(&mut self) -> Option<Square> {
        while let Some(frame) = self.frames.last_mut() {
            if let Some(mv) = frame.moves.get(frame.next) {
                frame.next += 1;
                return Some(mv.to);
            }
            let square = frame.square;
            self.frames.pop();
            // The root stays marked.
            if !self.frames.is_empty() {
                self.occupancy.unmark(square);
            }
        }
        None
    }
}

/// Depth-first search that undoes every mark on the way back up.
pub(super) fn search<C: Clock + ?Sized>(run: &mut Run<'_, C>) -> Result<Outcome, SearchError> {
    let mut bt = Backtracker::new(run.size)?;
    bt.occupancy.mark(run.start, 1);

    let mut entering = Some(run.start);
    while let Some(square) = entering {
        if run.deadline.is_expired() {
            return Ok(Outcome::TimedOut);
        }

        let depth = bt.next_depth();
        run.record_expansion(depth, bt.frames.len());
        debug_assert_eq!(bt.occupancy.visited_count(), depth as usize);

        if depth == run.goal {
            return bt.tour_through(square).map(Outcome::Solved);
        }

        let moves = legal_moves(square, &bt.occupancy);
        let moves = run.ordering.order(&moves, &bt.occupancy);
        bt.frames
            .try_reserve(1)
            .map_err(|_| SearchError::ResourceExhausted { what: "search stack" })?;
        bt.frames.push(Frame {
            square,
            moves,
            next: 0,
        });

        entering = bt.advance();
        if let Some(next) = entering {
            bt.occupancy.mark(next, bt.next_depth());
        }
    }

    debug_assert_eq!(bt.occupancy.visited_count(), 1);
    Ok(Outcome::Exhausted)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::board::search::{SearchConfig, Strategy, TieBreak};
    use crate::board::verify_tour;
    use crate::timer::{Deadline, ManualClock};

    fn backtrack(size: usize, strategy: Strategy) -> (Outcome, u64) {
        let clock = ManualClock::new();
        let config = SearchConfig::new(size, strategy, Duration::from_secs(1));
        let mut run = Run::new(&config, Deadline::start(&clock, config.time_limit));
        let outcome = search(&mut run).expect("search");
        (outcome, run.stats.nodes)
    }

    #[test]
    fn test_three_by_three_walks_the_outer_cycle_both_ways() {
        let (outcome, nodes) = backtrack(3, Strategy::Dfs);
        assert_eq!(outcome, Outcome::Exhausted);
        assert_eq!(nodes, 15);
    }

    #[test]
    fn test_two_by_two_has_no_moves() {
        let (outcome, nodes) = backtrack(2, Strategy::Dfs);
        assert_eq!(outcome, Outcome::Exhausted);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn test_single_square() {
        let (outcome, nodes) = backtrack(1, Strategy::DfsWarnsdorff);
        assert_eq!(outcome, Outcome::Solved(vec![Square::ORIGIN]));
        assert_eq!(nodes, 1);
    }

    #[test]
    fn test_plain_dfs_takes_first_table_move() {
        let (outcome, _) = backtrack(5, Strategy::Dfs);
        let Outcome::Solved(tour) = outcome else {
            panic!("5x5 from a corner has a tour");
        };
        assert_eq!(tour[1], Square::new(2, 1));
        assert_eq!(verify_tour(5, Square::ORIGIN, &tour), Ok(()));
    }

    #[test]
    fn test_informed_orderings_find_valid_tours() {
        for strategy in [
            Strategy::DfsWarnsdorff,
            Strategy::DfsEnhanced(TieBreak::CenterDistance),
            Strategy::DfsEnhanced(TieBreak::CornerDistance),
        ] {
            for size in [5, 6, 8] {
                let (outcome, _) = backtrack(size, strategy);
                let Outcome::Solved(tour) = outcome else {
                    panic!("{strategy} found no tour on {size}x{size}");
                };
                assert_eq!(verify_tour(size, Square::ORIGIN, &tour), Ok(()));
            }
        }
    }

    #[test]
    fn test_board_is_restored_after_exhaustion() {
        let clock = ManualClock::new();
        let config = SearchConfig::new(4, Strategy::Dfs, Duration::from_secs(1));
        let mut run = Run::new(&config, Deadline::start(&clock, config.time_limit));
        let mut bt = Backtracker::new(4).expect("board");
        bt.occupancy.mark(Square::ORIGIN, 1);
        // Drive a shallow exploration by hand and unwind it.
        let moves = legal_moves(Square::ORIGIN, &bt.occupancy);
        bt.frames.push(Frame {
            square: Square::ORIGIN,
            moves: run.ordering.order(&moves, &bt.occupancy),
            next: 0,
        });
        while let Some(next) = bt.advance() {
            bt.occupancy.mark(next, bt.next_depth());
            assert_eq!(bt.occupancy.visited_count(), 2);
            bt.occupancy.unmark(next);
        }
        assert_eq!(bt.occupancy.visited_count(), 1);
        assert!(bt.occupancy.is_visited(Square::ORIGIN));

        let outcome = search(&mut run).expect("search");
        assert_eq!(outcome, Outcome::Exhausted);
    }

    #[test]
    fn test_times_out_on_ticking_clock() {
        let clock = ManualClock::ticking(Duration::from_millis(1));
        let config = SearchConfig::new(8, Strategy::Dfs, Duration::from_millis(50));
        let mut run = Run::new(&config, Deadline::start(&clock, config.time_limit));
        let outcome = search(&mut run).expect("search");
        assert_eq!(outcome, Outcome::TimedOut);
        assert!(run.stats.nodes < 50);
    }
}
