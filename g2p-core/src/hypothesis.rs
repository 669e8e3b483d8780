//! `HypothesisNode` and its backing arena.
//!
//! The upstream C implementation (`tree_element_t`) heap-allocates one node
//! per hypothesis and relies on the observation that an evicted node is
//! always a beam leaf, never the parent of a surviving node, so it is safe
//! to free immediately. Per spec §9's stated preference, this port instead
//! uses an arena of `HypothesisNode`s addressed by small integer handles:
//! eviction only changes beam membership, node lifetime is tied to the
//! whole decode, and the "no references survive across calls" invariant
//! from §5 holds trivially because the arena itself is dropped at the end
//! of `g2p`.

/// Handle into a `HypothesisArena`. `None` parent means "no predecessor"
/// (the hypothesis is the first joint unit in the sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(u32);

/// An immutable back-pointer node: `{wid, cumulative_score, parent}`.
#[derive(Debug, Clone, Copy)]
pub struct HypothesisNode {
    pub wid: i32,
    pub score: i32,
    pub parent: Option<NodeId>,
}

/// Owns every `HypothesisNode` allocated during one `g2p` call.
#[derive(Debug, Default)]
pub struct HypothesisArena {
    nodes: Vec<HypothesisNode>,
}

impl HypothesisArena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocate a new node and return its handle. Allocation happens only
    /// once admission into a beam is certain (see `BeamDecoder`), so the
    /// hot loop never allocates a node it then discards.
    pub fn alloc(&mut self, wid: i32, score: i32, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(HypothesisNode { wid, score, parent });
        id
    }

    pub fn get(&self, id: NodeId) -> HypothesisNode {
        self.nodes[id.0 as usize]
    }
}
