use super::super::Square;

/// Knight offsets as `(row, col)` deltas.
///
/// The order is part of the search contract: plain BFS/DFS try moves in
/// exactly this order, and heuristic orderings sort stably over it.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

/// All eight knight destinations from `from`, in offset-table order.
///
/// No bounds or occupancy filtering is applied.
#[inline]
#[must_use]
pub fn candidate_moves(from: Square) -> [Square; 8] {
    KNIGHT_OFFSETS.map(|(d_row, d_col)| from.offset(d_row, d_col))
}
