//! `fit_count`: matches the grapheme side of a joint unit's surface against
//! the input at a given offset.
//!
//! Ported from `graphemes_fit_count` in the upstream C source. Consumes
//! `unit_surface` left to right, skipping `|` separators, and stops at
//! end of input, end of surface, or a `<`/`}` boundary marker (the start
//! of a sentence sentinel or the grapheme/phoneme divider). Comparison is
//! on raw `char`s: case-sensitive, no Unicode normalisation.

/// Returns the number of grapheme characters consumed if every compared
/// pair matched; `0` on any mismatch, or if zero characters could be
/// consumed (e.g. `unit_surface` starts with `}` or `offset` is already at
/// the end of `grapheme`).
pub fn fit_count(grapheme: &[char], offset: usize, unit_surface: &str) -> usize {
    let mut count = 0usize;
    let mut word = grapheme[offset..].iter().copied();
    let mut unit_chars = unit_surface.chars().peekable();

    loop {
        let Some(&uc) = unit_chars.peek() else {
            break;
        };
        if uc == '<' || uc == '}' {
            break;
        }
        if uc == '|' {
            unit_chars.next();
            continue;
        }
        let Some(wc) = word.next() else {
            return 0;
        };
        if wc != uc {
            return 0;
        }
        unit_chars.next();
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn matches_simple_grapheme_prefix() {
        let g = chars("cat");
        assert_eq!(fit_count(&g, 0, "c}K"), 1);
        assert_eq!(fit_count(&g, 1, "a}AE"), 1);
    }

    #[test]
    fn matches_multi_char_grapheme_cluster_with_pipes() {
        let g = chars("phoenix");
        // grapheme cluster "ph" spelled as two pipe-separated tokens
        assert_eq!(fit_count(&g, 0, "p|h}F"), 2);
    }

    #[test]
    fn mismatch_returns_zero() {
        let g = chars("dog");
        assert_eq!(fit_count(&g, 0, "c}K"), 0);
    }

    #[test]
    fn stops_at_end_of_grapheme() {
        let g = chars("a");
        // surface wants more graphemes than are available: fails on 2nd char
        assert_eq!(fit_count(&g, 0, "a|b}X"), 0);
    }

    #[test]
    fn sentence_sentinels_never_match() {
        let g = chars("cat");
        assert_eq!(fit_count(&g, 0, "<s>"), 0);
    }

    #[test]
    fn empty_grapheme_side_consumes_nothing() {
        let g = chars("cat");
        assert_eq!(fit_count(&g, 0, "}_"), 0);
    }

    #[test]
    fn bounded_by_remaining_input_and_grapheme_side_length() {
        let g = chars("cats");
        for offset in 0..g.len() {
            let k = fit_count(&g, offset, "c|a|t|s}K|AE|T|S");
            assert!(k <= g.len() - offset);
            assert!(k <= 4);
        }
    }
}
