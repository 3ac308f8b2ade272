//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `search.rs` - Strategy outcomes, node counts and determinism
//! - `edge_cases.rs` - Degenerate boards, off-corner starts, time budgets
//! - `proptest.rs` - Property-based tests
