//! CMUdict-style dictionary parsing (spec.md §6, "Driver harness").
//!
//! Each line is `WORD[(variant)] SPACE PHONEME_STRING`. A `(variant)`
//! suffix (e.g. `READ(2)`) marks an alternate pronunciation of a word
//! already seen without a suffix; only the unsuffixed occurrence counts
//! toward the unique-word total, matching the upstream `main`'s
//! `different_word_count` (incremented only when the grapheme has no
//! `(` in it).

pub struct DictEntry {
    pub grapheme: String,
    pub phoneme: String,
    pub is_primary: bool,
}

pub fn parse_line(line: &str) -> Option<DictEntry> {
    let mut parts = line.splitn(2, ' ');
    let word = parts.next()?.trim();
    let phoneme = parts.next()?.trim();
    if word.is_empty() || phoneme.is_empty() {
        return None;
    }

    let is_primary = !word.contains('(');
    let grapheme = word.split('(').next().unwrap_or(word).to_string();

    Some(DictEntry {
        grapheme,
        phoneme: phoneme.to_string(),
        is_primary,
    })
}
