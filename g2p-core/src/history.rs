//! `HistoryWalker`: reconstructs an n-gram history from a leaf hypothesis.
//!
//! Ported from `unwind_history`. Walks `parent` links from `leaf`,
//! collecting each node's `wid` most-recent-first, then appends
//! `start_sentinel` as the oldest element. `leaf = None` (no predecessor)
//! yields `[start_sentinel]`.

use crate::hypothesis::{HypothesisArena, NodeId};

/// Reusable scratch buffer for history reconstruction, sized `N + 1` once
/// per decode and overwritten on every oracle query (spec §3, §9).
#[derive(Debug, Default)]
pub struct HistoryBuffer {
    buf: Vec<i32>,
}

impl HistoryBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Rebuild the history for `leaf` (or `[start_sentinel]` if `leaf` is
    /// `None`) and return it as a most-recent-first slice.
    pub fn unwind(
        &mut self,
        arena: &HypothesisArena,
        leaf: Option<NodeId>,
        start_sentinel: i32,
    ) -> &[i32] {
        self.buf.clear();
        let mut current = leaf;
        while let Some(id) = current {
            let node = arena.get(id);
            self.buf.push(node.wid);
            current = node.parent;
        }
        self.buf.push(start_sentinel);
        &self.buf
    }
}
