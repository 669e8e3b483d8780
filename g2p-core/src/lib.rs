//! g2p-core
//!
//! Converts an orthographic word (a grapheme string) into its most probable
//! pronunciation (a phoneme string) by beam search over a joint
//! grapheme/phoneme n-gram language model.
//!
//! Public API:
//! - [`g2p`] — the single entry point (`G2PEntryPoint`).
//! - [`GraphemeModel`] — the model oracle trait callers implement (or use
//!   [`JointNGramModel`] for an in-memory, hand-buildable model).
//! - [`Config`] — beam width and other call-site tunables.
//! - [`G2pError`] — the decoder's own programmer-error / model-error kinds.
//!   A missing alignment is *not* an error; it is `Ok(None)`.

pub mod assembler;
pub mod config;
pub mod decoder;
pub mod entry_point;
pub mod error;
pub mod heap;
pub mod history;
pub mod hypothesis;
pub mod matcher;
pub mod model;

pub use config::Config;
pub use entry_point::g2p;
pub use error::G2pError;
pub use model::{GraphemeModel, JointNGramModel};
