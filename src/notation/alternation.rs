//! Alternation expansion.
//!
//! `{a,b}` denotes a set of interchangeable sub-strings at one position, with
//! arbitrary nesting: `{e,w{æ,i}}` denotes `e`, `wæ` and `wi`. Expansion
//! resolves the innermost group first (the first `}` paired with the nearest
//! `{` before it) and re-scans each substitution, so nesting falls out of the
//! recursion without any bracket-depth bookkeeping.
//!
//! The scan result is a tagged variant rather than an in-place string edit:
//! a token is either a literal leaf or one group node with its surrounding
//! text. Each substitution removes exactly one brace pair, which is what
//! makes the recursion terminate.

/// One scan step over a token: either no expandable group, or the innermost
/// group with its surrounding text.
#[derive(Debug, PartialEq, Eq)]
enum Alternation<'a> {
    Literal(&'a str),
    Group { prefix: &'a str, alternatives: Vec<&'a str>, suffix: &'a str },
}

/// Find the innermost alternation group, if any.
///
/// Malformed tokens (a `}` with no `{` before it, or a `{` that is never
/// closed) scan as literals; stricter validation is deliberately not done
/// here, the notation is too free-form for it.
fn scan(token: &str) -> Alternation<'_> {
    let Some(close) = token.find('}') else {
        return Alternation::Literal(token);
    };
    let Some(open) = token[..close].rfind('{') else {
        return Alternation::Literal(token);
    };

    Alternation::Group {
        prefix: &token[..open],
        alternatives: token[open + 1..close].split(',').collect(),
        suffix: &token[close + 1..],
    }
}

/// Expand every alternation group in `token` into the set of concrete strings
/// it denotes, in first-seen order, deduplicated.
///
/// A token without braces expands to itself.
pub(crate) fn expand_alternations(token: &str) -> Vec<String> {
    let mut out = Vec::new();
    expand_into(token, &mut out);
    out
}

fn expand_into(token: &str, out: &mut Vec<String>) {
    match scan(token) {
        Alternation::Literal(literal) => push_unique(out, literal.to_string()),
        Alternation::Group { prefix, alternatives, suffix } => {
            for alternative in alternatives {
                expand_into(&format!("{prefix}{alternative}{suffix}"), out);
            }
        }
    }
}

/// Append `value` unless an equal string is already present.
pub(crate) fn push_unique(out: &mut Vec<String>, value: String) {
    if !out.iter().any(|existing| *existing == value) {
        out.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::{Alternation, expand_alternations, scan};

    #[test]
    fn braceless_tokens_expand_to_themselves() {
        assert_eq!(expand_alternations("dʒ"), ["dʒ"]);
        assert_eq!(expand_alternations(""), [""]);
    }

    #[test]
    fn scan_finds_the_innermost_group() {
        assert_eq!(
            scan("{e,w{æ,i}}"),
            Alternation::Group { prefix: "{e,w", alternatives: vec!["æ", "i"], suffix: "}" }
        );
    }

    #[test]
    fn multiple_groups_cross() {
        let mut expanded = expand_alternations("{e,i}w{e,i}");
        expanded.sort();
        assert_eq!(expanded, ["ewe", "ewi", "iwe", "iwi"]);
    }

    #[test]
    fn nested_groups_flatten() {
        let mut expanded = expand_alternations("{e,w{æ,i}}");
        expanded.sort();
        assert_eq!(expanded, ["e", "wi", "wæ"]);
    }

    #[test]
    fn shared_prefix_and_suffix_distribute() {
        let mut expanded = expand_alternations("{æ,e}i");
        expanded.sort();
        assert_eq!(expanded, ["ei", "æi"]);
    }

    #[test]
    fn duplicate_alternatives_collapse() {
        assert_eq!(expand_alternations("{a,a,b}"), ["a", "b"]);
    }

    #[test]
    fn unbalanced_braces_stay_literal() {
        assert_eq!(expand_alternations("a{b,c"), ["a{b,c"]);
        assert_eq!(expand_alternations("ab}c"), ["ab}c"]);
    }
}
