//! Frontier containers for the frontier-driven engine.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::move_order::OrderKey;
use super::state::SearchState;
use crate::board::SearchError;

/// Order in which pending states are taken off the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Discipline {
    /// First in, first out (breadth-first)
    Fifo,
    /// Last in, first out (depth-first)
    Lifo,
    /// Lowest ordering key first, push order among equal keys
    BestFirst,
}

/// Pending states awaiting expansion.
#[derive(Debug)]
pub enum Frontier {
    Fifo(VecDeque<Rc<SearchState>>),
    Lifo(Vec<Rc<SearchState>>),
    BestFirst {
        heap: BinaryHeap<Prioritized>,
        pushed: u64,
    },
}

impl Frontier {
    #[must_use]
    pub fn new(discipline: Discipline) -> Self {
        match discipline {
            Discipline::Fifo => Frontier::Fifo(VecDeque::new()),
            Discipline::Lifo => Frontier::Lifo(Vec::new()),
            Discipline::BestFirst => Frontier::BestFirst {
                heap: BinaryHeap::new(),
                pushed: 0,
            },
        }
    }

    #[must_use]
    pub fn discipline(&self) -> Discipline {
        match self {
            Frontier::Fifo(_) => Discipline::Fifo,
            Frontier::Lifo(_) => Discipline::Lifo,
            Frontier::BestFirst { .. } => Discipline::BestFirst,
        }
    }

    /// Add a state. `key` is only consulted by best-first frontiers.
    ///
    /// # Errors
    /// [`SearchError::ResourceExhausted`] if the container cannot grow.
    pub fn push(&mut self, state: Rc<SearchState>, key: OrderKey) -> Result<(), SearchError> {
        let exhausted = |_| SearchError::ResourceExhausted { what: "frontier" };
        match self {
            Frontier::Fifo(queue) => {
                queue.try_reserve(1).map_err(exhausted)?;
                queue.push_back(state);
            }
            Frontier::Lifo(stack) => {
                stack.try_reserve(1).map_err(exhausted)?;
                stack.push(state);
            }
            Frontier::BestFirst { heap, pushed } => {
                heap.try_reserve(1).map_err(exhausted)?;
                heap.push(Prioritized {
                    key,
                    seq: *pushed,
                    state,
                });
                *pushed += 1;
            }
        }
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Rc<SearchState>> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
            Frontier::BestFirst { heap, .. } => heap.pop().map(|entry| entry.state),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Frontier::Fifo(queue) => queue.len(),
            Frontier::Lifo(stack) => stack.len(),
            Frontier::BestFirst { heap, .. } => heap.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Best-first frontier entry.
///
/// Ordered so that `BinaryHeap`, a max-heap, pops the lowest key first and
/// the earliest push among equal keys.
#[derive(Debug)]
pub struct Prioritized {
    key: OrderKey,
    seq: u64,
    state: Rc<SearchState>,
}

impl PartialEq for Prioritized {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Prioritized {}

impl PartialOrd for Prioritized {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prioritized {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
