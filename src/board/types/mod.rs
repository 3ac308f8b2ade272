//! Core board types.
//!
//! - `Square` - `(row, col)` value type with chess-notation display
//! - `Occupancy` - per-run visit record (1-based move index per square)

mod occupancy;
mod square;

pub use occupancy::{Occupancy, UNVISITED};
pub use square::Square;
