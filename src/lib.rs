pub mod board;
pub mod cli;
pub mod timer;

pub use board::{run_search, Outcome, SearchConfig, SearchError, SearchResult, Square, Strategy};
pub use timer::{Clock, ManualClock, SystemClock};
