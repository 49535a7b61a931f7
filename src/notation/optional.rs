//! Optional-segment expansion.
//!
//! `(...)` marks a span that may be present or absent; a rule body with `n`
//! such spans denotes up to `2^n` concrete variants. Two details matter:
//!
//! - Removal is by **byte position**, never by text search-and-replace.
//!   `(C)x(C)` contains two identical spans, and replacing by text would
//!   delete the wrong one. Spans chosen for removal are marked on a mask and
//!   compacted out in one pass.
//! - Subsets are enumerated in ascending size, combination order within a
//!   size, so the keep-everything variant always comes first and downstream
//!   first-seen deduplication is deterministic.
//!
//! The parentheses of kept groups are stripped in a second pass.

use super::alternation::push_unique;
use super::budget::ExpansionBudget;

/// A parenthesized optional span within one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionalSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Scan the top-level optional spans: each runs from a `(` to the next `)`.
/// Nested parentheses are not specially handled.
pub(crate) fn find_optionals(text: &str) -> Vec<OptionalSpan> {
    regex!(r"\(.*?\)")
        .find_iter(text)
        .map(|m| OptionalSpan { start: m.start(), end: m.end(), text: m.as_str().to_string() })
        .collect()
}

/// Expand `text` into every inclusion/exclusion combination of its optional
/// spans, deduplicated, keep-everything variant first. Zero spans yield the
/// input unchanged. Enumeration stops when the budget runs out.
pub(crate) fn expand_optionals(text: &str, budget: &mut ExpansionBudget) -> Vec<String> {
    let spans = find_optionals(text);
    if spans.is_empty() {
        return vec![text.to_string()];
    }
    log::debug!(
        "expanding {} optional group(s): {:?}",
        spans.len(),
        spans.iter().map(|s| s.text.as_str()).collect::<Vec<_>>()
    );

    let mut variants = Vec::new();
    'subsets: for size in 0..=spans.len() {
        for combination in index_combinations(spans.len(), size) {
            if !budget.admit() {
                break 'subsets;
            }
            let removed = remove_spans(text, combination.iter().map(|&i| &spans[i]));
            push_unique(&mut variants, removed.replace(['(', ')'], ""));
        }
    }
    variants
}

/// Delete the given spans from `text` by position: mark, then compact.
fn remove_spans<'a>(text: &str, spans: impl Iterator<Item = &'a OptionalSpan>) -> String {
    let mut masked = vec![false; text.len()];
    for span in spans {
        masked[span.start..span.end].fill(true);
    }
    text.char_indices().filter(|(at, _)| !masked[*at]).map(|(_, c)| c).collect()
}

/// All k-element index subsets of `0..n`, in lexicographic order.
fn index_combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k > n {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        out.push(indices.clone());
        if k == 0 {
            return out;
        }
        // Rightmost index that can still advance.
        let mut at = k;
        loop {
            if at == 0 {
                return out;
            }
            at -= 1;
            if indices[at] < at + n - k {
                break;
            }
            if at == 0 {
                return out;
            }
        }
        indices[at] += 1;
        for next in at + 1..k {
            indices[next] = indices[next - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ExpansionBudget, OptionalSpan, expand_optionals, find_optionals, index_combinations, remove_spans};

    fn unlimited() -> ExpansionBudget {
        ExpansionBudget::new(usize::MAX)
    }

    fn span(start: usize, end: usize, text: &str) -> OptionalSpan {
        OptionalSpan { start, end, text: text.to_string() }
    }

    #[test]
    fn removal_is_positional_not_textual() {
        let spans = [span(0, 1, "a"), span(6, 7, "a"), span(4, 6, "bc"), span(1, 2, "b")];
        assert_eq!(remove_spans("abcabcabc", spans.iter()), "cabc");
    }

    #[test]
    fn no_optionals_yields_the_input() {
        assert_eq!(expand_optionals("a → b", &mut unlimited()), ["a → b"]);
    }

    #[test]
    fn one_optional_yields_two_variants_kept_first() {
        assert_eq!(expand_optionals("_(l)d#", &mut unlimited()), ["_ld#", "_d#"]);
    }

    #[test]
    fn variant_count_is_two_to_the_n() {
        let variants = expand_optionals("(b)_(l)d#", &mut unlimited());
        assert_eq!(variants.len(), 4);
        for expected in ["b_ld#", "b_d#", "_ld#", "_d#"] {
            assert!(variants.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn identical_spans_are_handled_independently() {
        let variants = expand_optionals("(C)x(C)", &mut unlimited());
        assert_eq!(variants.len(), 4);
        for expected in ["CxC", "Cx", "xC", "x"] {
            assert!(variants.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn budget_truncates_enumeration() {
        let mut budget = ExpansionBudget::new(2);
        let variants = expand_optionals("(a)(b)(c)", &mut budget);
        assert_eq!(variants.len(), 2);
        assert!(budget.overflowed());
    }

    #[test]
    fn combinations_are_lexicographic_by_size() {
        assert_eq!(index_combinations(3, 0), [Vec::<usize>::new()]);
        assert_eq!(index_combinations(3, 2), [vec![0, 1], vec![0, 2], vec![1, 2]]);
        assert_eq!(index_combinations(2, 2), [vec![0, 1]]);
    }

    #[test]
    fn finds_spans_with_offsets() {
        let spans = find_optionals("(b)_(l)d#");
        assert_eq!(spans.len(), 2);
        assert_eq!((spans[0].start, spans[0].end, spans[0].text.as_str()), (0, 3, "(b)"));
        assert_eq!(spans[1].text, "(l)");
    }
}
