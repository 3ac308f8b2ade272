//! Per-run record of visited squares.

use std::collections::TryReserveError;
use std::fmt;

use super::Square;

/// Visit index stored for squares no path has reached.
pub const UNVISITED: u32 = 0;

/// Occupancy of an n×n board.
///
/// Each cell holds the 1-based move index that first visited it, or
/// [`UNVISITED`]. Marks are applied and removed in strict pairs by the
/// backtracking engine; the frontier engine only ever adds marks.
#[derive(Clone, PartialEq, Eq)]
pub struct Occupancy {
    size: usize,
    cells: Vec<u32>,
    visited: usize,
}

impl Occupancy {
    /// An empty board. `size` must already have been validated.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Occupancy {
            size,
            cells: vec![UNVISITED; size * size],
            visited: 0,
        }
    }

    /// Like [`Occupancy::new`], but reports allocation failure instead of
    /// aborting.
    pub fn try_new(size: usize) -> Result<Self, TryReserveError> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(size * size)?;
        cells.resize(size * size, UNVISITED);
        Ok(Occupancy {
            size,
            cells,
            visited: 0,
        })
    }

    /// Build the visit-order grid of a tour: `tour[i]` gets index `i + 1`.
    ///
    /// Squares off the board are ignored.
    #[must_use]
    pub fn from_tour(size: usize, tour: &[Square]) -> Self {
        let mut occupancy = Occupancy::new(size);
        for (step, &sq) in tour.iter().enumerate() {
            occupancy.mark(sq, step as u32 + 1);
        }
        occupancy
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of squares currently marked.
    #[inline]
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited
    }

    #[inline]
    #[must_use]
    pub fn is_visited(&self, sq: Square) -> bool {
        self.visit_index(sq).is_some()
    }

    /// The 1-based move index that visited `sq`, if any.
    #[inline]
    #[must_use]
    pub fn visit_index(&self, sq: Square) -> Option<u32> {
        let idx = sq.index(self.size)?;
        match self.cells[idx] {
            UNVISITED => None,
            step => Some(step),
        }
    }

    /// Mark `sq` as visited at `step`. Returns `false` if it was off the board
    /// or already marked, leaving the board unchanged.
    pub fn mark(&mut self, sq: Square, step: u32) -> bool {
        debug_assert_ne!(step, UNVISITED);
        match sq.index(self.size) {
            Some(idx) if self.cells[idx] == UNVISITED => {
                self.cells[idx] = step;
                self.visited += 1;
                true
            }
            _ => false,
        }
    }

    /// Undo a previous [`Occupancy::mark`]. Returns `false` if `sq` was not
    /// marked.
    pub fn unmark(&mut self, sq: Square) -> bool {
        match sq.index(self.size) {
            Some(idx) if self.cells[idx] != UNVISITED => {
                self.cells[idx] = UNVISITED;
                self.visited -= 1;
                true
            }
            _ => false,
        }
    }

    /// Raw visit indices, row-major.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(UNVISITED);
        self.visited = 0;
    }
}

/// Grid rows printed top to bottom, `.` for unvisited cells.
impl fmt::Debug for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Occupancy {}x{} ({} visited)", self.size, self.size, self.visited)?;
        for row in self.cells.chunks(self.size.max(1)) {
            for &cell in row {
                if cell == UNVISITED {
                    write!(f, "   .")?;
                } else {
                    write!(f, "{cell:4}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
