//! Frontier-driven search: pop a state, test it, push its successors.

use std::rc::Rc;

use super::frontier::{Discipline, Frontier};
use super::move_order::{OrderKey, ScoredMove, ScoredMoveList};
use super::state::SearchState;
use super::{Outcome, Run, VisitedScope};
use crate::board::movegen::legal_moves;
use crate::board::{Occupancy, SearchError};
use crate::timer::Clock;

/// Search with an explicit frontier.
///
/// With [`VisitedScope::Run`] a square is marked when its state is pushed
/// and never unmarked. With [`VisitedScope::Path`] each expansion marks the
/// popped state's own tour on a scratch board and clears it again before
/// the next pop.
pub(super) fn search<C: Clock + ?Sized>(
    run: &mut Run<'_, C>,
    discipline: Discipline,
    scope: VisitedScope,
) -> Result<Outcome, SearchError> {
    let mut occupancy = Occupancy::try_new(run.size)
        .map_err(|_| SearchError::ResourceExhausted { what: "occupancy" })?;
    let mut frontier = Frontier::new(discipline);

    let root = SearchState::root(run.start);
    if scope == VisitedScope::Run {
        occupancy.mark(run.start, root.depth());
    }
    frontier.push(root, OrderKey::default())?;

    while !frontier.is_empty() {
        if run.deadline.is_expired() {
            return Ok(Outcome::TimedOut);
        }

        let Some(state) = frontier.pop() else {
            break;
        };
        run.record_expansion(state.depth(), frontier.len());

        if state.depth() == run.goal {
            let tour = state
                .try_path()
                .map_err(|_| SearchError::ResourceExhausted { what: "tour" })?;
            return Ok(Outcome::Solved(tour));
        }

        let successors = match scope {
            VisitedScope::Run => successors(run, &state, &occupancy),
            VisitedScope::Path => {
                state.mark_path(&mut occupancy);
                let successors = successors(run, &state, &occupancy);
                state.unmark_path(&mut occupancy);
                debug_assert_eq!(occupancy.visited_count(), 0);
                successors
            }
        };

        push_successors(&mut frontier, &state, &successors, scope, &mut occupancy)?;
    }

    Ok(Outcome::Exhausted)
}

fn successors<C: Clock + ?Sized>(
    run: &Run<'_, C>,
    state: &SearchState,
    occupancy: &Occupancy,
) -> ScoredMoveList {
    let moves = legal_moves(state.square(), occupancy);
    run.ordering.order(&moves, occupancy)
}

/// Push children so that the best-ordered one is expanded first.
///
/// FIFO and best-first frontiers take them in try order; a LIFO frontier
/// takes them reversed, since the last push pops first.
fn push_successors(
    frontier: &mut Frontier,
    parent: &Rc<SearchState>,
    successors: &ScoredMoveList,
    scope: VisitedScope,
    occupancy: &mut Occupancy,
) -> Result<(), SearchError> {
    let reversed = frontier.discipline() == Discipline::Lifo;
    let mut push = |scored: &ScoredMove| -> Result<(), SearchError> {
        let child = parent.child(scored.to);
        if scope == VisitedScope::Run {
            occupancy.mark(scored.to, child.depth());
        }
        frontier.push(child, scored.key)
    };

    if reversed {
        successors.iter().rev().try_for_each(&mut push)
    } else {
        successors.iter().try_for_each(&mut push)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::board::search::{MoveOrdering, SearchConfig, Strategy};
    use crate::board::Square;
    use crate::timer::{Deadline, ManualClock};

    fn run_frontier(
        size: usize,
        strategy: Strategy,
        scope: VisitedScope,
    ) -> (Outcome, u64) {
        let clock = ManualClock::new();
        let config = SearchConfig::new(size, strategy, Duration::from_secs(1));
        let mut run = Run::new(&config, Deadline::start(&clock, config.time_limit));
        let outcome = search(&mut run, strategy.discipline(), scope).expect("search");
        (outcome, run.stats.nodes)
    }

    #[test]
    fn test_run_scope_bfs_expands_each_reachable_square_once() {
        let (outcome, nodes) = run_frontier(3, Strategy::Bfs, VisitedScope::Run);
        assert_eq!(outcome, Outcome::Exhausted);
        // The center of a 3x3 board is unreachable.
        assert_eq!(nodes, 8);

        let (outcome, nodes) = run_frontier(5, Strategy::Bfs, VisitedScope::Run);
        assert_eq!(outcome, Outcome::Exhausted);
        assert_eq!(nodes, 25);
    }

    #[test]
    fn test_path_scope_bfs_enumerates_every_partial_tour() {
        // The eight outer squares of a 3x3 board form one knight cycle, so
        // there are two partial tours of each length 2..=8 plus the root.
        let (outcome, nodes) = run_frontier(3, Strategy::Bfs, VisitedScope::Path);
        assert_eq!(outcome, Outcome::Exhausted);
        assert_eq!(nodes, 15);
    }

    #[test]
    fn test_path_scope_lifo_matches_backtracking_count() {
        let (outcome, nodes) = run_frontier(3, Strategy::Dfs, VisitedScope::Path);
        assert_eq!(outcome, Outcome::Exhausted);
        assert_eq!(nodes, 15);
    }

    #[test]
    fn test_single_square_board_is_solved_immediately() {
        for strategy in [Strategy::Bfs, Strategy::BestFirst(MoveOrdering::Warnsdorff)] {
            let (outcome, nodes) = run_frontier(1, strategy, VisitedScope::Run);
            assert_eq!(outcome, Outcome::Solved(vec![Square::ORIGIN]));
            assert_eq!(nodes, 1);
        }
    }

    #[test]
    fn test_path_scope_best_first_visits_same_partial_tours() {
        let (outcome, nodes) = run_frontier(
            3,
            Strategy::BestFirst(MoveOrdering::Warnsdorff),
            VisitedScope::Path,
        );
        assert_eq!(outcome, Outcome::Exhausted);
        assert_eq!(nodes, 15);
    }

    #[test]
    fn test_run_scope_never_expands_more_than_board() {
        for strategy in [
            Strategy::Dfs,
            Strategy::BestFirst(MoveOrdering::Warnsdorff),
            Strategy::BestFirst(MoveOrdering::None),
        ] {
            let (_, nodes) = run_frontier(6, strategy, VisitedScope::Run);
            assert!(nodes <= 36, "{strategy} expanded {nodes}");
        }
    }

    #[test]
    fn test_expired_deadline_stops_before_first_pop() {
        let clock = ManualClock::ticking(Duration::from_secs(1));
        let config = SearchConfig::new(5, Strategy::Bfs, Duration::from_secs(1));
        let mut run = Run::new(&config, Deadline::start(&clock, config.time_limit));
        let outcome = search(&mut run, Discipline::Fifo, VisitedScope::Run).expect("search");
        assert_eq!(outcome, Outcome::TimedOut);
        assert_eq!(run.stats.nodes, 0);
    }
}
