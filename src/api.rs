use crate::classify::Classify;
use crate::error::Diagnostic;
use crate::{AtomicRule, RawNotation, VowelChangeRecord, extract, notation};

/// Options that affect normalization and extraction behavior.
#[derive(Debug, Clone)]
pub struct Options {
    /// Ceiling on optional/alternation expansion per notation. Expansion past
    /// this point is truncated and reported as
    /// [`Diagnostic::ExpansionOverflow`], never silently dropped.
    pub max_variants: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { max_variants: 256 }
    }
}

/// Result from [`normalize_notation_verbose_with`]: the rules plus every
/// diagnostic the normalizer recorded along the way.
#[derive(Debug, Clone)]
pub struct NormalizeOutcome {
    pub rules: Vec<AtomicRule>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Normalize one raw notation into its atomic rules, using default
/// [`Options`].
///
/// # Example
/// ```
/// use soundlaw::{RawNotation, normalize_notation};
///
/// let raw = RawNotation {
///     id: "proto-x-z".to_string(),
///     branch_id: "proto-x".to_string(),
///     text: "z zː → j dʒː".to_string(),
/// };
/// let rules = normalize_notation(&raw);
/// assert_eq!(rules.len(), 2);
/// ```
pub fn normalize_notation(raw: &RawNotation) -> Vec<AtomicRule> {
    normalize_notation_with(raw, &Options::default())
}

/// Normalize one raw notation with explicit options.
pub fn normalize_notation_with(raw: &RawNotation, options: &Options) -> Vec<AtomicRule> {
    notation::normalize(raw, options).0
}

/// Normalize one raw notation and also return the recorded diagnostics.
///
/// Use this when the caller needs to surface soft failures (too few steps,
/// stage-length mismatches, expansion overflow) instead of just logging them.
pub fn normalize_notation_verbose_with(raw: &RawNotation, options: &Options) -> NormalizeOutcome {
    let (rules, diagnostics) = notation::normalize(raw, options);
    NormalizeOutcome { rules, diagnostics }
}

/// Extract the vowel-change records of one atomic rule, using default
/// [`Options`].
///
/// Returns an empty sequence when the rule does not describe a single
/// unambiguous vowel change, or when no environment variant yields a usable
/// context.
pub fn extract_vowel_changes(rule: &AtomicRule, classifier: &impl Classify) -> Vec<VowelChangeRecord> {
    extract_vowel_changes_with(rule, classifier, &Options::default())
}

/// Extract vowel-change records with explicit options.
pub fn extract_vowel_changes_with(
    rule: &AtomicRule,
    classifier: &impl Classify,
    options: &Options,
) -> Vec<VowelChangeRecord> {
    extract::extract(rule, classifier, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::IpaClassifier;

    fn raw(text: &str) -> RawNotation {
        RawNotation { id: "api".to_string(), branch_id: "api-branch".to_string(), text: text.to_string() }
    }

    #[test]
    fn normalize_then_extract_end_to_end() {
        let rules = normalize_notation(&raw("aː → o / b_d"));
        assert_eq!(rules.len(), 1);

        let records = extract_vowel_changes(&rules[0], &IpaClassifier::new());
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.before.as_ref().map(|s| s.text.as_str()), Some("b"));
        assert_eq!(record.from_vowel.text, "aː");
        assert_eq!(record.to_vowel.as_ref().map(|s| s.text.as_str()), Some("o"));
        assert_eq!(record.after.as_ref().map(|s| s.text.as_str()), Some("d"));
        assert_eq!(record.original_text, "aː → o / b_d");
    }

    #[test]
    fn chain_rules_carry_no_vowel_records_for_consonant_changes() {
        let rules = normalize_notation(&raw("dʒ → tʃ → ʃ / V_V"));
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].intermediate_steps, ["tʃ"]);
        assert!(extract_vowel_changes(&rules[0], &IpaClassifier::new()).is_empty());
    }

    #[test]
    fn verbose_normalization_surfaces_diagnostics() {
        let outcome = normalize_notation_verbose_with(&raw("broken"), &Options::default());
        assert!(outcome.rules.is_empty());
        assert_eq!(outcome.diagnostics.len(), 1);
    }

    #[test]
    fn a_closure_can_stand_in_for_the_classifier() {
        let rules = normalize_notation(&raw("a → e"));
        let classifier = |text: &str| IpaClassifier::new().classify(text);
        let records = extract_vowel_changes(&rules[0], &classifier);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].from_vowel.text, "a");
    }
}
