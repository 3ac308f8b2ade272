use std::fmt::Write as _;

use crate::board::{MoveOrdering, Occupancy, SearchResult, Square, Strategy, TieBreak};

/// Strategies offered by `strategies`, classic menu first.
pub const LISTED_STRATEGIES: [Strategy; 8] = [
    Strategy::Bfs,
    Strategy::Dfs,
    Strategy::DfsWarnsdorff,
    Strategy::DfsEnhanced(TieBreak::CenterDistance),
    Strategy::DfsEnhanced(TieBreak::CornerDistance),
    Strategy::BestFirst(MoveOrdering::Warnsdorff),
    Strategy::BestFirst(MoveOrdering::Enhanced(TieBreak::CenterDistance)),
    Strategy::BestFirst(MoveOrdering::Enhanced(TieBreak::CornerDistance)),
];

/// Visit-order grid, one row per line, cells right-aligned to the widest
/// step number.
#[must_use]
pub fn format_grid(grid: &Occupancy) -> String {
    let size = grid.size();
    let width = (size * size).to_string().len();
    let mut out = String::new();
    for row in 0..size {
        let cells = (0..size).map(|col| {
            match grid.visit_index(Square::new(row as i32, col as i32)) {
                Some(step) => format!("{step:>width$}"),
                None => format!("{:>width$}", "."),
            }
        });
        let _ = writeln!(out, "{}", cells.collect::<Vec<_>>().join(" "));
    }
    out
}

#[must_use]
pub fn format_summary(result: &SearchResult) -> String {
    format!(
        "info strategy {} size {} nodes {} maxdepth {} time_ms {}",
        result.strategy,
        result.board_size,
        result.nodes_expanded,
        result.max_depth,
        result.elapsed.as_millis()
    )
}

pub fn print_result(result: &SearchResult) {
    println!("{}", result.outcome);
    if let Some(grid) = result.visit_order() {
        print!("{}", format_grid(&grid));
    }
    println!("{}", format_summary(result));
}

pub fn print_strategies() {
    for (i, strategy) in LISTED_STRATEGIES.iter().enumerate() {
        println!("{} {strategy}", i + 1);
    }
}

pub fn print_help() {
    println!("solve <strategy> [size N] [time SECS] [start SQ] [scope run|path]");
    println!("strategies");
    println!("quit");
}
