//! Square type and chess-notation helpers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on an n×n board, addressed as `(row, col)`.
///
/// Coordinates are signed so that knight offsets can be applied before the
/// bounds check; a square is only meaningful for a board once
/// [`Square::is_in_bounds`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    #[inline]
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Square { row, col }
    }

    /// The fixed start square of a tour.
    pub const ORIGIN: Square = Square::new(0, 0);

    #[inline]
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Square::new(self.row + d_row, self.col + d_col)
    }

    #[inline]
    #[must_use]
    pub const fn is_in_bounds(self, size: usize) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as usize) < size && (self.col as usize) < size
    }

    /// Row-major index of this square, or `None` when it lies off the board.
    #[inline]
    #[must_use]
    pub const fn index(self, size: usize) -> Option<usize> {
        if self.is_in_bounds(size) {
            Some(self.row as usize * size + self.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Square::index`].
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize, size: usize) -> Self {
        Square::new((idx / size) as i32, (idx % size) as i32)
    }

    /// Sum of absolute offsets from the board center `(n/2, n/2)`.
    #[must_use]
    pub fn center_distance(self, size: usize) -> u32 {
        let mid = (size / 2) as i32;
        (self.row - mid).unsigned_abs() + (self.col - mid).unsigned_abs()
    }

    /// Manhattan distance to the nearest of the four corners.
    #[must_use]
    pub fn corner_distance(self, size: usize) -> u32 {
        let last = size.saturating_sub(1) as i32;
        let up = self.row.unsigned_abs();
        let down = (last - self.row).unsigned_abs();
        let left = self.col.unsigned_abs();
        let right = (last - self.col).unsigned_abs();
        up.min(down) + left.min(right)
    }

    /// Whether `other` is exactly one knight move away.
    #[must_use]
    pub fn is_knight_step(self, other: Square) -> bool {
        let dr = (self.row - other.row).unsigned_abs();
        let dc = (self.col - other.col).unsigned_abs();
        (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
    }
}

/// Chess-style notation: the column is the file letter, the row is the
/// 1-based rank (`(0, 0)` is `a1`, `(2, 1)` is `b3`).
///
/// Only columns `0..26` have a letter; larger boards fall back to `(r, c)`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.col) && self.row >= 0 {
            write!(f, "{}{}", (self.col as u8 + b'a') as char, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl From<(i32, i32)> for Square {
    fn from((row, col): (i32, i32)) -> Self {
        Square::new(row, col)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let file = match chars.next() {
            Some(c @ 'a'..='z') => c as i32 - 'a' as i32,
            _ => return Err(invalid()),
        };
        let rank: i32 = chars.as_str().parse().map_err(|_| invalid())?;
        if rank < 1 {
            return Err(invalid());
        }

        Ok(Square::new(rank - 1, file))
    }
}
