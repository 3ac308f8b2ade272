//! Search constants and defaults.

use std::time::Duration;

/// Largest board whose square count fits the `u32` visit index.
pub const MAX_BOARD_SIZE: usize = u16::MAX as usize;

/// Board size used when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Time budget used when none is configured.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);

/// Expanded nodes between progress log lines.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1_000_000;
