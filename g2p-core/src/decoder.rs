//! `BeamDecoder`: the left-to-right DP beam search over grapheme prefix
//! positions (spec §4.4). Ported from the upstream `g2p` function's main
//! loop; see [`crate::entry_point::g2p`] for the full orchestration
//! including the terminal extension and phoneme assembly.

use crate::error::G2pError;
use crate::heap::BoundedMinHeap;
use crate::history::HistoryBuffer;
use crate::hypothesis::{HypothesisArena, NodeId};
use crate::matcher::fit_count;
use crate::model::GraphemeModel;

/// A single position's bounded beam: the best hypotheses whose last joint
/// unit ends exactly at this grapheme position.
pub type Beam = BoundedMinHeap<NodeId>;

/// `beams[0..N-1]` have capacity `beam_width`; `beams[N]` has capacity 1
/// and holds the unique terminal hypothesis once decoding finishes.
pub struct BeamTable {
    beams: Vec<Beam>,
}

impl BeamTable {
    fn new(n: usize, beam_width: usize) -> Self {
        let mut beams = Vec::with_capacity(n + 1);
        for _ in 0..n {
            beams.push(Beam::new(beam_width));
        }
        beams.push(Beam::new(1));
        Self { beams }
    }

    pub fn get(&self, i: usize) -> &Beam {
        &self.beams[i]
    }

    fn get_mut(&mut self, i: usize) -> &mut Beam {
        &mut self.beams[i]
    }

    pub fn len(&self) -> usize {
        self.beams.len()
    }
}

/// Try to admit a single candidate hypothesis `{wid, score, parent}` into
/// `dest`. The score is computed before any allocation so a rejected
/// candidate never touches the arena (spec §4.4.1 "Observation").
fn try_admit<E: std::error::Error + Send + Sync + 'static>(
    dest: &mut Beam,
    arena: &mut HypothesisArena,
    wid: i32,
    score: i32,
    parent: Option<NodeId>,
) -> Result<(), G2pError<E>> {
    if !dest.is_full() {
        let id = arena.alloc(wid, score, parent);
        dest.add(score, id)?;
    } else if score > dest.min_key()? {
        dest.pop()?;
        let id = arena.alloc(wid, score, parent);
        dest.add(score, id)?;
    }
    Ok(())
}

/// Extend every admissible predecessor hypothesis in `previous` (or, if
/// `previous` is `None`, the implicit start-of-sentence root) by `wid`,
/// trying to place each resulting candidate into `dest`.
///
/// Mirrors `try_add_tree_elements`: the predecessor beam is walked in raw
/// slot order (`element_at`), not score order, per spec §5's determinism
/// requirement.
fn extend<M: GraphemeModel>(
    model: &M,
    wid: i32,
    previous: Option<&Beam>,
    dest: &mut Beam,
    history: &mut HistoryBuffer,
    arena: &mut HypothesisArena,
    start_wid: i32,
) -> Result<(), G2pError<M::Error>> {
    match previous {
        None => {
            let hist = history.unwind(arena, None, start_wid);
            let log_prob = model
                .conditional_log_prob(wid, hist)
                .map_err(G2pError::Model)?;
            try_admit(dest, arena, wid, log_prob, None)?;
        }
        Some(prev) => {
            for i in 0..prev.size() {
                let parent = prev.element_at(i);
                let hist = history.unwind(arena, Some(parent), start_wid);
                let log_prob = model
                    .conditional_log_prob(wid, hist)
                    .map_err(G2pError::Model)?;
                let score = arena.get(parent).score + log_prob;
                try_admit(dest, arena, wid, score, Some(parent))?;
            }
        }
    }
    Ok(())
}

/// Run the beam search over `grapheme` (already split into `chars`),
/// returning the winning pre-terminal hypothesis (the end sentinel's
/// parent), or `None` if no alignment was found.
pub fn decode<M: GraphemeModel>(
    model: &M,
    chars: &[char],
    beam_width: usize,
    arena: &mut HypothesisArena,
) -> Result<Option<NodeId>, G2pError<M::Error>> {
    let n = chars.len();
    if n == 0 {
        return Ok(None);
    }

    let start_wid = model
        .word_id("<s>")
        .expect("model must define the <s> sentence-start sentinel");
    let end_wid = model
        .word_id("</s>")
        .expect("model must define the </s> sentence-end sentinel");

    let mut table = BeamTable::new(n, beam_width);
    let mut history = HistoryBuffer::with_capacity(n + 1);
    let vocab_size = model.vocabulary_size();

    for i in 0..n {
        for wid in 0..vocab_size as i32 {
            let k = fit_count(chars, i, model.surface(wid));
            if k == 0 {
                continue;
            }
            let dest_idx = i + k - 1;
            // Work around the borrow checker: BeamTable can't hand out a
            // shared ref to `previous` and a mutable ref to `dest`
            // simultaneously when both might be the same `Vec` slot, so
            // split the table manually.
            if i == 0 {
                let dest = table.get_mut(dest_idx);
                extend(model, wid, None, dest, &mut history, arena, start_wid)?;
            } else {
                let (before, after) = table.beams.split_at_mut(i);
                let previous = &before[i - 1];
                let dest = &mut after[dest_idx - i];
                extend(
                    model,
                    wid,
                    Some(previous),
                    dest,
                    &mut history,
                    arena,
                    start_wid,
                )?;
            }
        }
        tracing::debug!(position = i, beam_size = table.get(i).size(), "advanced beam");
    }

    let (before, after) = table.beams.split_at_mut(n);
    let previous = &before[n - 1];
    let terminal = &mut after[0];
    extend(
        model,
        end_wid,
        Some(previous),
        terminal,
        &mut history,
        arena,
        start_wid,
    )?;

    if terminal.is_empty() {
        tracing::debug!("decode produced no terminal hypothesis");
        return Ok(None);
    }
    let winner = terminal.element_at(0);
    Ok(arena.get(winner).parent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JointNGramModel;

    fn toy_model() -> JointNGramModel {
        let mut m = JointNGramModel::new();
        let start = m.insert_unit("<s>");
        let end = m.insert_unit("</s>");
        let c = m.insert_unit("c}K");
        let a = m.insert_unit("a}AE");
        let t = m.insert_unit("t}T");
        for (wid, p) in [(c, -1), (a, -1), (t, -1), (end, -1)] {
            m.set_log_prob(wid, &[], p);
            m.set_log_prob(wid, &[start], p);
        }
        m
    }

    #[test]
    fn decodes_cat_to_best_chain() {
        let model = toy_model();
        let chars: Vec<char> = "cat".chars().collect();
        let mut arena = HypothesisArena::new();
        let leaf = decode(&model, &chars, 100, &mut arena).unwrap();
        assert!(leaf.is_some());
    }

    #[test]
    fn no_matching_unit_returns_none() {
        let model = toy_model();
        let chars: Vec<char> = "zzz".chars().collect();
        let mut arena = HypothesisArena::new();
        let leaf = decode(&model, &chars, 100, &mut arena).unwrap();
        assert!(leaf.is_none());
    }

    #[test]
    fn empty_input_returns_none() {
        let model = toy_model();
        let mut arena = HypothesisArena::new();
        let leaf = decode(&model, &[], 100, &mut arena).unwrap();
        assert!(leaf.is_none());
    }

    #[test]
    fn beam_width_one_never_panics() {
        let model = toy_model();
        let chars: Vec<char> = "cat".chars().collect();
        let mut arena = HypothesisArena::new();
        let result = decode(&model, &chars, 1, &mut arena);
        assert!(result.is_ok());
    }
}
