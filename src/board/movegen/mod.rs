//! Knight move generation and legality checks.

mod knights;

pub use knights::{candidate_moves, KNIGHT_OFFSETS};

use super::{Occupancy, Square};

/// Maximum number of knight moves from any square.
pub const MAX_MOVES: usize = KNIGHT_OFFSETS.len();

#[inline]
#[must_use]
pub fn is_in_bounds(sq: Square, size: usize) -> bool {
    sq.is_in_bounds(size)
}

/// Whether `sq` is unmarked. Squares off the board are never free.
#[inline]
#[must_use]
pub fn is_free(sq: Square, occupancy: &Occupancy) -> bool {
    sq.is_in_bounds(occupancy.size()) && !occupancy.is_visited(sq)
}

#[inline]
#[must_use]
pub fn is_legal_move(sq: Square, size: usize, occupancy: &Occupancy) -> bool {
    is_in_bounds(sq, size) && is_free(sq, occupancy)
}

/// Legal knight destinations from `from`, in offset-table order.
#[must_use]
pub fn legal_moves(from: Square, occupancy: &Occupancy) -> MoveList {
    let size = occupancy.size();
    let mut moves = MoveList::new();
    for to in candidate_moves(from) {
        if is_legal_move(to, size, occupancy) {
            moves.push(to);
        }
    }
    moves
}

/// Number of legal knight moves out of `from` under `occupancy`.
///
/// `from` itself is never a knight move away from itself, so the result is
/// the same whether or not `from` has been marked yet.
#[must_use]
pub fn onward_degree(from: Square, occupancy: &Occupancy) -> u32 {
    let size = occupancy.size();
    candidate_moves(from)
        .into_iter()
        .filter(|&to| is_legal_move(to, size, occupancy))
        .count() as u32
}

/// Fixed-capacity list of destination squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveList {
    moves: [Square; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [Square::ORIGIN; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, sq: Square) {
        self.moves[self.len] = sq;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
