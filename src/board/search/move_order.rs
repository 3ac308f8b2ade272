//! Move ordering policies for tour search.
//!
//! Orderings only rank moves that are already legal. Every ordering is a
//! stable sort over offset-table order, so equal keys keep the order in
//! which [`legal_moves`](crate::board::movegen::legal_moves) produced them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::super::movegen::{onward_degree, MoveList, MAX_MOVES};
use super::super::{Occupancy, Square};

/// Secondary key used by the enhanced ordering to break Warnsdorff ties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TieBreak {
    /// `|row - n/2| + |col - n/2|`; squares nearer the center win ties
    #[default]
    CenterDistance,
    /// Manhattan distance to the nearest corner; squares nearer a corner win
    CornerDistance,
}

impl TieBreak {
    #[inline]
    #[must_use]
    pub fn distance(self, sq: Square, size: usize) -> u32 {
        match self {
            TieBreak::CenterDistance => sq.center_distance(size),
            TieBreak::CornerDistance => sq.corner_distance(size),
        }
    }
}

/// How candidate moves are ranked before being tried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOrdering {
    /// Offset-table order
    #[default]
    None,
    /// Fewest onward moves first (Warnsdorff's rule)
    Warnsdorff,
    /// Warnsdorff, ties broken by the given distance
    Enhanced(TieBreak),
}

/// Sort key for one candidate, compared lexicographically. Lower is tried
/// first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderKey {
    pub degree: u32,
    pub tie_break: u32,
}

/// A destination square with its ordering key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub to: Square,
    pub key: OrderKey,
}

/// Warnsdorff score of moving to `to`: the number of legal moves out of it.
#[inline]
#[must_use]
pub fn warnsdorff_score(to: Square, occupancy: &Occupancy) -> u32 {
    onward_degree(to, occupancy)
}

impl MoveOrdering {
    /// Whether this ordering ranks moves at all.
    #[must_use]
    pub fn is_informed(self) -> bool {
        !matches!(self, MoveOrdering::None)
    }

    /// Key of moving to `to` under `occupancy`.
    #[must_use]
    pub fn key(self, to: Square, occupancy: &Occupancy) -> OrderKey {
        match self {
            MoveOrdering::None => OrderKey::default(),
            MoveOrdering::Warnsdorff => OrderKey {
                degree: warnsdorff_score(to, occupancy),
                tie_break: 0,
            },
            MoveOrdering::Enhanced(tie_break) => OrderKey {
                degree: warnsdorff_score(to, occupancy),
                tie_break: tie_break.distance(to, occupancy.size()),
            },
        }
    }

    /// Score and stably sort `moves` ascending by key.
    #[must_use]
    pub fn order(self, moves: &MoveList, occupancy: &Occupancy) -> ScoredMoveList {
        let mut scored = ScoredMoveList::new();
        for &to in moves {
            scored.push(ScoredMove {
                to,
                key: self.key(to, occupancy),
            });
        }
        if self.is_informed() {
            // `sort_by_key` is stable; equal keys keep offset-table order.
            scored.as_mut_slice().sort_by_key(|m| m.key);
        }
        scored
    }
}

/// Fixed-capacity list of scored moves, in the order they will be tried.
#[derive(Clone, Copy, Debug)]
pub struct ScoredMoveList {
    moves: [ScoredMove; MAX_MOVES],
    len: usize,
}

impl ScoredMoveList {
    fn new() -> Self {
        ScoredMoveList {
            moves: [ScoredMove {
                to: Square::ORIGIN,
                key: OrderKey::default(),
            }; MAX_MOVES],
            len: 0,
        }
    }

    fn push(&mut self, mv: ScoredMove) {
        self.moves[self.len] = mv;
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
    pub fn as_slice(&self) -> &[ScoredMove] {
        &self.moves[..self.len]
    }

    fn as_mut_slice(&mut self) -> &mut [ScoredMove] {
        &mut self.moves[..self.len]
    }

    /// The move at position `idx`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<ScoredMove> {
        self.as_slice().get(idx).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredMove> {
        self.as_slice().iter()
    }

    /// Destination squares in try order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.iter().map(|m| m.to)
    }
}
