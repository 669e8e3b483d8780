//! Error types for the decoder.
//!
//! `HeapFull` and `HeapEmpty` indicate a programmer error in the decoder's
//! own bookkeeping (the decoder always checks `is_full`/`is_empty` before
//! calling the operation that could violate them) and should abort the
//! decode rather than be recovered from. `Model` wraps a failure surfaced
//! verbatim from the model oracle.
//!
//! `NoHypothesis` (no alignment found for the input grapheme) is not an
//! error at all: it is represented as `Option::None` from [`crate::g2p`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum G2pError<E: std::error::Error + Send + Sync + 'static> {
    #[error("attempted to add to a full heap")]
    HeapFull,
    #[error("attempted to read from an empty beam")]
    HeapEmpty,
    #[error("model oracle error: {0}")]
    Model(#[source] E),
}
