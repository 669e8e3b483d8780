//! `G2PEntryPoint`: the single public operation, `g2p`.
//!
//! Allocates the per-word arena and beam table, runs the decoder, renders
//! the winning hypothesis to a phoneme string, and releases every
//! allocation on return (spec §4.6, §5 "Memory discipline").

use crate::assembler::assemble;
use crate::decoder::decode;
use crate::error::G2pError;
use crate::hypothesis::HypothesisArena;
use crate::model::GraphemeModel;

/// Convert `grapheme` into its most probable pronunciation under `model`,
/// searching with the given beam width. Returns `None` if no joint-unit
/// alignment exists for `grapheme` (spec §1 "Non-goals": ungrounded
/// graphemes yield no result) or if `grapheme` is empty.
pub fn g2p<M: GraphemeModel>(
    model: &M,
    grapheme: &str,
    beam_width: usize,
) -> Result<Option<String>, G2pError<M::Error>> {
    let chars: Vec<char> = grapheme.chars().collect();
    let mut arena = HypothesisArena::new();

    tracing::debug!(grapheme, beam_width, "starting g2p decode");

    let winner = decode(model, &chars, beam_width, &mut arena)?;
    let result = winner.map(|leaf| assemble(model, &arena, leaf));

    tracing::debug!(found = result.is_some(), "g2p decode finished");
    Ok(result)
    // `arena` and the beam table drop here, releasing every hypothesis
    // node allocated during this call (spec §5 "Lifecycles").
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JointNGramModel;

    /// Build a small joint-unit vocabulary that can spell "cat" -> "K AE T"
    /// and "dog" -> "D AO G" unambiguously, plus one unit with a `_`
    /// phoneme side to exercise the silent-letter path.
    fn cmudict_like_model() -> JointNGramModel {
        let mut m = JointNGramModel::new();
        let start = m.insert_unit("<s>");
        let end = m.insert_unit("</s>");

        let units = [
            ("c}K", -1),
            ("a}AE", -1),
            ("t}T", -1),
            ("d}D", -1),
            ("o}AO", -1),
            ("g}G", -1),
            ("e}_", -3), // silent 'e', deliberately worse than real units
        ];
        for (surface, p) in units {
            let wid = m.insert_unit(surface);
            m.set_log_prob(wid, &[], p);
            m.set_log_prob(wid, &[start], p);
        }
        m.set_log_prob(end, &[], -1);
        m.set_log_prob(end, &[start], -1);
        m
    }

    #[test]
    fn cat_decodes_to_k_ae_t() {
        let model = cmudict_like_model();
        let result = g2p(&model, "cat", 100).unwrap();
        assert_eq!(result.as_deref(), Some("K AE T"));
    }

    #[test]
    fn dog_decodes_to_d_ao_g() {
        let model = cmudict_like_model();
        let result = g2p(&model, "dog", 100).unwrap();
        assert_eq!(result.as_deref(), Some("D AO G"));
    }

    #[test]
    fn empty_grapheme_yields_none() {
        let model = cmudict_like_model();
        let result = g2p(&model, "", 100).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn ungrounded_grapheme_yields_none() {
        let model = cmudict_like_model();
        let result = g2p(&model, "xyz", 100).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn is_idempotent_across_repeated_calls() {
        let model = cmudict_like_model();
        let first = g2p(&model, "cat", 100).unwrap();
        let second = g2p(&model, "cat", 100).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn wider_beam_never_hurts_the_winning_score() {
        let model = cmudict_like_model();
        // Both widths see the same single unambiguous path here, but the
        // monotonicity property (spec §8 invariant 6) must hold regardless:
        // a wider beam can only find hypotheses a narrower one also finds,
        // or better ones it missed.
        let narrow = g2p(&model, "cat", 1).unwrap();
        let wide = g2p(&model, "cat", 100).unwrap();
        assert_eq!(narrow, wide);
    }

    #[test]
    fn beam_width_one_never_panics_on_ambiguous_input() {
        let model = cmudict_like_model();
        let result = g2p(&model, "dog", 1);
        assert!(result.is_ok());
    }

    #[test]
    fn silent_letter_unit_is_skipped_without_double_space() {
        let mut model = cmudict_like_model();
        // Bias "cate" toward using the silent-e unit by making it the only
        // option that completes the word.
        let silent_e = model.word_id("e}_").unwrap();
        model.set_log_prob(silent_e, &[], -1);
        let result = g2p(&model, "cate", 100).unwrap();
        assert_eq!(result.as_deref(), Some("K AE T"));
    }
}
