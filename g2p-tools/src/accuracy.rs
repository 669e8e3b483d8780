//! The accuracy-measurement driver (spec.md §1/§6): feeds every dictionary
//! entry through `g2p` and reports `<correct_count> <unique_word_count>
//! <accuracy>`, matching upstream `main`'s final `printf("%d %d %f\n", ...)`.

use crate::dict::parse_line;
use anyhow::Result;
use g2p_core::GraphemeModel;
use std::path::Path;

pub struct AccuracyReport {
    pub correct_count: u64,
    pub unique_word_count: u64,
}

impl AccuracyReport {
    pub fn accuracy(&self) -> f64 {
        if self.unique_word_count == 0 {
            0.0
        } else {
            self.correct_count as f64 / self.unique_word_count as f64
        }
    }
}

pub fn run<M: GraphemeModel, P: AsRef<Path>>(
    model: &M,
    dict_path: P,
    beam_width: usize,
) -> Result<AccuracyReport> {
    let content = std::fs::read_to_string(dict_path)?;
    let mut correct_count = 0u64;
    let mut unique_word_count = 0u64;

    for line in content.lines() {
        let Some(entry) = parse_line(line) else {
            continue;
        };
        if entry.is_primary {
            unique_word_count += 1;
        }

        match g2p_core::g2p(model, &entry.grapheme, beam_width) {
            Ok(Some(predicted)) if predicted == entry.phoneme => correct_count += 1,
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(word = %entry.grapheme, error = %err, "g2p failed for entry");
            }
        }
    }

    Ok(AccuracyReport {
        correct_count,
        unique_word_count,
    })
}
