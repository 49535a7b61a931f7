//! Sound tokenization.
//!
//! Splitting on whitespace alone is not enough: feature matrices like
//! `[+ voice]` contain spaces but are one sound token. The scan therefore
//! treats any `[...]` run as atomic.

/// Split a rule stage into its sound tokens.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    regex!(r"(?:\[[^\]]*\]|\S)+").find_iter(text).map(|m| m.as_str().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(tokenize("z zː"), ["z", "zː"]);
        assert_eq!(tokenize("  j   w "), ["j", "w"]);
    }

    #[test]
    fn feature_matrices_are_atomic() {
        assert_eq!(tokenize("[+ voice]"), ["[+ voice]"]);
        assert_eq!(tokenize("V[- high - long]"), ["V[- high - long]"]);
        assert_eq!(tokenize("S → [+ voice]"), ["S", "→", "[+ voice]"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
