//! Search states: immutable partial tours linked to their predecessor.

use std::collections::TryReserveError;
use std::rc::Rc;

use super::super::{Occupancy, Square};

/// One partial tour, stored as its last square plus a shared link to the
/// tour with that square removed.
///
/// States never point at their children. Siblings share their common prefix
/// through `Rc`, and a branch is freed as soon as the frontier stops
/// referencing it.
#[derive(Debug)]
pub struct SearchState {
    square: Square,
    depth: u32,
    predecessor: Option<Rc<SearchState>>,
}

impl SearchState {
    /// The start state of a run, at depth 1.
    #[must_use]
    pub fn root(square: Square) -> Rc<Self> {
        Rc::new(SearchState {
            square,
            depth: 1,
            predecessor: None,
        })
    }

    /// Extend this tour by one square.
    #[must_use]
    pub fn child(self: &Rc<Self>, square: Square) -> Rc<Self> {
        Rc::new(SearchState {
            square,
            depth: self.depth + 1,
            predecessor: Some(Rc::clone(self)),
        })
    }

    #[inline]
    #[must_use]
    pub fn square(&self) -> Square {
        self.square
    }

    /// Number of squares on the tour, this one included.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    #[must_use]
    pub fn predecessor(&self) -> Option<&Rc<SearchState>> {
        self.predecessor.as_ref()
    }

    /// This state followed by each predecessor up to the root.
    #[must_use]
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Whether `sq` lies anywhere on this tour.
    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        self.ancestors().any(|state| state.square == sq)
    }

    /// The tour in visit order, root first.
    pub fn try_path(&self) -> Result<Vec<Square>, TryReserveError> {
        let mut path = Vec::new();
        path.try_reserve_exact(self.depth as usize)?;
        path.extend(self.ancestors().map(SearchState::square));
        path.reverse();
        Ok(path)
    }

    /// Mark every square of this tour on `occupancy` with its step.
    pub(crate) fn mark_path(&self, occupancy: &mut Occupancy) {
        for state in self.ancestors() {
            occupancy.mark(state.square, state.depth);
        }
    }

    /// Undo [`SearchState::mark_path`].
    pub(crate) fn unmark_path(&self, occupancy: &mut Occupancy) {
        for state in self.ancestors() {
            occupancy.unmark(state.square);
        }
    }
}

// Unlink the chain iteratively so that dropping a deep tour does not recurse
// once per square.
impl Drop for SearchState {
    fn drop(&mut self) {
        let mut next = self.predecessor.take();
        while let Some(rc) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut state) => next = state.predecessor.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator from a state back to the root.
pub struct Ancestors<'a> {
    next: Option<&'a SearchState>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a SearchState;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.predecessor.as_deref();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(squares: &[(i32, i32)]) -> Rc<SearchState> {
        let mut iter = squares.iter().map(|&(r, c)| Square::new(r, c));
        let mut state = SearchState::root(iter.next().expect("non-empty"));
        for sq in iter {
            state = state.child(sq);
        }
        state
    }

    #[test]
    fn test_depth_counts_ancestors() {
        let state = chain(&[(0, 0), (2, 1), (0, 2), (1, 0)]);
        assert_eq!(state.depth(), 4);
        assert_eq!(state.ancestors().count(), 4);
        assert_eq!(state.predecessor().map(|p| p.depth()), Some(3));
    }

    #[test]
    fn test_path_is_root_first() {
        let state = chain(&[(0, 0), (2, 1), (0, 2)]);
        let path = state.try_path().expect("small path");
        assert_eq!(path, vec![Square::new(0, 0), Square::new(2, 1), Square::new(0, 2)]);
    }

    #[test]
    fn test_contains() {
        let state = chain(&[(0, 0), (2, 1), (0, 2)]);
        assert!(state.contains(Square::new(2, 1)));
        assert!(state.contains(Square::ORIGIN));
        assert!(!state.contains(Square::new(1, 1)));
    }

    #[test]
    fn test_siblings_share_prefix() {
        let root = SearchState::root(Square::ORIGIN);
        let a = root.child(Square::new(2, 1));
        let b = root.child(Square::new(1, 2));
        assert_eq!(Rc::strong_count(&root), 3);
        drop(a);
        assert_eq!(Rc::strong_count(&root), 2);
        assert_eq!(b.predecessor().map(|p| p.square()), Some(Square::ORIGIN));
    }

    #[test]
    fn test_mark_and_unmark_path() {
        let state = chain(&[(0, 0), (2, 1), (0, 2)]);
        let mut occ = Occupancy::new(3);
        state.mark_path(&mut occ);
        assert_eq!(occ.visit_index(Square::new(0, 2)), Some(3));
        assert_eq!(occ.visited_count(), 3);
        state.unmark_path(&mut occ);
        assert_eq!(occ, Occupancy::new(3));
    }

    #[test]
    fn test_dropping_deep_chain_does_not_overflow() {
        let mut state = SearchState::root(Square::ORIGIN);
        for i in 0..500_000 {
            state = state.child(Square::new(i % 7, i % 5));
        }
        assert_eq!(state.depth(), 500_001);
        drop(state);
    }
}
