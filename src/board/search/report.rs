//! Search progress reporting through the `log` facade.
//!
//! Compiled to no-ops without the `logging` feature.

use std::time::Duration;

use super::{SearchConfig, SearchResult, Strategy, VisitedScope};
use crate::board::SearchError;

#[cfg_attr(not(feature = "logging"), allow(dead_code))]
pub(crate) struct SearchInfo {
    pub strategy: Strategy,
    pub nodes: u64,
    pub depth: u32,
    pub max_depth: u32,
    pub pending: usize,
    pub elapsed: Duration,
}

impl SearchInfo {
    #[cfg_attr(not(feature = "logging"), allow(dead_code))]
    fn nps(&self) -> u64 {
        let micros = self.elapsed.as_micros().max(1);
        (u128::from(self.nodes) * 1_000_000 / micros) as u64
    }
}

#[cfg(feature = "logging")]
pub(crate) fn started(config: &SearchConfig, scope: VisitedScope) {
    log::debug!(
        "search start strategy {} size {} start {} scope {:?} limit {}ms",
        config.strategy,
        config.board_size,
        config.start,
        scope,
        config.time_limit.as_millis()
    );
}

#[cfg(feature = "logging")]
pub(crate) fn progress(info: &SearchInfo) {
    log::debug!(
        "search {} nodes {} depth {} maxdepth {} pending {} nps {} time {}ms",
        info.strategy,
        info.nodes,
        info.depth,
        info.max_depth,
        info.pending,
        info.nps(),
        info.elapsed.as_millis()
    );
}

#[cfg(feature = "logging")]
pub(crate) fn finished(result: &SearchResult, peak_frontier: usize) {
    log::info!(
        "search {} {} nodes {} maxdepth {} peak frontier {} time {}ms",
        result.strategy,
        result.outcome.label(),
        result.nodes_expanded,
        result.max_depth,
        peak_frontier,
        result.elapsed.as_millis()
    );
}

#[cfg(feature = "logging")]
pub(crate) fn failed(config: &SearchConfig, err: &SearchError) {
    log::warn!("search {} aborted: {err}", config.strategy);
}

#[cfg(not(feature = "logging"))]
pub(crate) fn started(_config: &SearchConfig, _scope: VisitedScope) {}

#[cfg(not(feature = "logging"))]
pub(crate) fn progress(_info: &SearchInfo) {}

#[cfg(not(feature = "logging"))]
pub(crate) fn finished(_result: &SearchResult, _peak_frontier: usize) {}

#[cfg(not(feature = "logging"))]
pub(crate) fn failed(_config: &SearchConfig, _err: &SearchError) {}
