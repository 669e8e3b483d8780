//! Loader for the plain-text joint n-gram table format.
//!
//! The upstream driver reads a sphinxbase `.dmp` binary model, which is out
//! of scope here (spec.md §1 treats the n-gram model as an opaque external
//! collaborator). Instead this loads a minimal, human-editable text format
//! so the harness in this repository can be exercised without vendoring a
//! binary model reader:
//!
//! ```text
//! V <wid> <surface>
//! P <wid> <history-wids-comma-separated-or-empty> <log_prob>
//! ```
//!
//! `V` lines register a joint unit (or sentinel) surface at a given word id;
//! `P` lines set its conditional log-probability given a history (empty
//! history = unigram). History wids are most-recent-first, matching
//! [`g2p_core::history::HistoryBuffer`].

use anyhow::{bail, Context, Result};
use g2p_core::model::JointNGramModel;
use std::path::Path;

pub fn load_table<P: AsRef<Path>>(path: P) -> Result<JointNGramModel> {
    let path = path.as_ref();
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let mut model = JointNGramModel::new();
    let mut pending_probs: Vec<(i32, Vec<i32>, i32)> = Vec::new();
    let mut max_wid = -1i32;

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t');
        let tag = fields.next().with_context(|| format!("line {line_no}: empty"))?;
        match tag {
            "V" => {
                let wid: i32 = fields
                    .next()
                    .context("V line missing wid")?
                    .parse()
                    .with_context(|| format!("line {line_no}: bad wid"))?;
                let surface = fields.next().context("V line missing surface")?;
                let assigned = model.insert_unit(surface);
                if assigned != wid {
                    bail!(
                        "line {line_no}: V lines must appear in wid order (expected {assigned}, got {wid})"
                    );
                }
                max_wid = max_wid.max(wid);
            }
            "P" => {
                let wid: i32 = fields
                    .next()
                    .context("P line missing wid")?
                    .parse()
                    .with_context(|| format!("line {line_no}: bad wid"))?;
                let history_field = fields.next().context("P line missing history")?;
                let history: Vec<i32> = if history_field.is_empty() {
                    Vec::new()
                } else {
                    history_field
                        .split(',')
                        .map(|s| s.parse::<i32>())
                        .collect::<Result<_, _>>()
                        .with_context(|| format!("line {line_no}: bad history"))?
                };
                let log_prob: i32 = fields
                    .next()
                    .context("P line missing log_prob")?
                    .parse()
                    .with_context(|| format!("line {line_no}: bad log_prob"))?;
                pending_probs.push((wid, history, log_prob));
            }
            other => bail!("line {line_no}: unknown tag '{other}'"),
        }
    }

    if max_wid < 0 {
        bail!("table {} defines no joint units", path.display());
    }
    for (wid, history, log_prob) in pending_probs {
        model.set_log_prob(wid, &history, log_prob);
    }
    Ok(model)
}
