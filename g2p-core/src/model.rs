//! The model oracle interface (spec §6) and a concrete in-memory
//! implementation used by tests, doctests, and `g2p-tools` when no external
//! model artifact is supplied.
//!
//! A token vocabulary plus n-gram log-probability tables keyed by history.
//! `JointNGramModel` specializes this to joint grapheme/phoneme units,
//! storing each unit's `wid -> surface` mapping in a flat table and
//! generalizing bigram/trigram lookups into one history-keyed table so
//! arbitrary n-gram orders are supported, matching the upstream
//! `ngram_ng_prob(model, wid, history, history_len, &mut nused)` query shape.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

/// External collaborator the core decodes against (spec §6, "Model oracle
/// (consumed)"). The core treats conditional log-probabilities as opaque
/// additive integer units (spec §9, "Score type").
pub trait GraphemeModel {
    type Error: std::error::Error + Send + Sync + 'static;

    fn vocabulary_size(&self) -> usize;
    fn surface(&self, wid: i32) -> &str;
    /// Look up a sentinel or joint-unit word id by its literal surface
    /// (e.g. `"<s>"`, `"</s>"`). `None` if not present.
    fn word_id(&self, token: &str) -> Option<i32>;
    /// Conditional log-probability of `wid` given `history`
    /// (most-recent-first, as produced by [`crate::history::HistoryBuffer`]).
    fn conditional_log_prob(&self, wid: i32, history: &[i32]) -> Result<i32, Self::Error>;
}

/// In-memory joint grapheme/phoneme n-gram model: a vocabulary of joint
/// units plus a table of log-probabilities keyed by `(wid, history-prefix)`.
///
/// History keys are matched longest-prefix-first down to the unigram
/// (empty history) entry, mirroring the "back off to a shorter context"
/// behavior of a real smoothed n-gram model, without committing this crate
/// to any particular smoothing scheme (left to whoever trains/supplies the
/// table — out of scope per spec §1).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JointNGramModel {
    surfaces: Vec<String>,
    word_ids: AHashMap<String, i32>,
    /// `(wid, history-prefix)` -> log-probability. The history prefix is
    /// stored most-recent-first, matching the buffer produced by
    /// `HistoryBuffer::unwind`.
    probs: AHashMap<(i32, Vec<i32>), i32>,
    /// Probability used when no table entry matches any prefix of the
    /// requested history, including the unigram (empty-history) case.
    unknown_log_prob: i32,
}

impl JointNGramModel {
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
            word_ids: AHashMap::new(),
            probs: AHashMap::new(),
            unknown_log_prob: -10_000,
        }
    }

    /// Register a joint unit (or sentinel) and return its assigned `wid`.
    pub fn insert_unit(&mut self, surface: impl Into<String>) -> i32 {
        let surface = surface.into();
        let wid = self.surfaces.len() as i32;
        self.word_ids.insert(surface.clone(), wid);
        self.surfaces.push(surface);
        wid
    }

    /// Set the conditional log-probability of `wid` given `history`
    /// (most-recent-first; pass `&[]` for the unigram probability).
    pub fn set_log_prob(&mut self, wid: i32, history: &[i32], log_prob: i32) {
        self.probs.insert((wid, history.to_vec()), log_prob);
    }

    pub fn set_unknown_log_prob(&mut self, log_prob: i32) {
        self.unknown_log_prob = log_prob;
    }

    /// Serialize to bincode bytes.
    pub fn to_bincode(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Deserialize from bincode bytes produced by [`Self::to_bincode`].
    pub fn from_bincode(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}

impl GraphemeModel for JointNGramModel {
    type Error = Infallible;

    fn vocabulary_size(&self) -> usize {
        self.surfaces.len()
    }

    fn surface(&self, wid: i32) -> &str {
        &self.surfaces[wid as usize]
    }

    fn word_id(&self, token: &str) -> Option<i32> {
        self.word_ids.get(token).copied()
    }

    fn conditional_log_prob(&self, wid: i32, history: &[i32]) -> Result<i32, Self::Error> {
        for prefix_len in (0..=history.len()).rev() {
            if let Some(&p) = self.probs.get(&(wid, history[..prefix_len].to_vec())) {
                return Ok(p);
            }
        }
        Ok(self.unknown_log_prob)
    }
}
