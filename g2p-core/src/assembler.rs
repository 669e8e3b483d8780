//! `PhonemeAssembler`: renders the winning back-pointer chain into a single
//! phoneme string.
//!
//! Ported from `unwind_phoneme`. Walks the chain leaf-to-root (the natural
//! direction of parent links), computing the total output length in one
//! pass, then filling a buffer back-to-front in a second pass so the final
//! string reads root-to-leaf without needing to reverse a `Vec`. Units
//! whose phoneme side is the literal `_` are skipped entirely and do not
//! produce a stray separator.

use crate::hypothesis::{HypothesisArena, NodeId};
use crate::model::GraphemeModel;

/// Phoneme side of a unit's surface: the substring strictly after `}`, with
/// internal `|` separators replaced by spaces. Returns `None` for `_`
/// (emit nothing).
fn phoneme_side(surface: &str) -> Option<String> {
    let after = surface.split_once('}').map(|(_, p)| p).unwrap_or("");
    if after == "_" {
        None
    } else {
        Some(after.replace('|', " "))
    }
}

/// Assemble the phoneme string for the chain rooted at `leaf` (the true
/// last grapheme-bearing hypothesis; callers must strip the end sentinel
/// before calling this). Returns `None` for an empty chain only if `leaf`
/// exists but renders to nothing (e.g. every unit on the path is `_`), in
/// which case the result is an empty string rather than `None` — `g2p`
/// itself is responsible for the overall `Option` based on whether a
/// hypothesis was found at all.
pub fn assemble<M: GraphemeModel>(model: &M, arena: &HypothesisArena, leaf: NodeId) -> String {
    // Pass 1: collect non-`_` phoneme sides leaf-to-root, and total length.
    let mut pieces: Vec<String> = Vec::new();
    let mut current = Some(leaf);
    while let Some(id) = current {
        let node = arena.get(id);
        if let Some(p) = phoneme_side(model.surface(node.wid)) {
            pieces.push(p);
        }
        current = node.parent;
    }

    if pieces.is_empty() {
        return String::new();
    }

    let total_len: usize = pieces.iter().map(|p| p.len()).sum::<usize>() + (pieces.len() - 1);
    let mut out = String::with_capacity(total_len);

    // Pass 2: pieces is leaf-to-root; reverse to emit root-to-leaf.
    for (i, piece) in pieces.iter().rev().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(piece);
    }
    out
}
