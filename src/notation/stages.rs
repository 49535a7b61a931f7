//! Chain splitting and positional pairing.
//!
//! One concrete rule variant like `z zː → j dʒː` describes a set of sound
//! changes positionally: token `i` of every stage belongs to the same change.
//! Splitting on the chain separator and tokenizing each stage gives a grid;
//! pairing walks its columns:
//!
//! ```text
//! "a b → c d → e f"
//!    stage 0: [a, b]     from
//!    stage 1: [c, d]     intermediates
//!    stage 2: [e, f]     to
//! columns:  (a, [c], e)  (b, [d], f)
//! ```
//!
//! Fewer than two stages is a soft error (the variant contributes nothing);
//! a token-count mismatch across stages is a warning, and pairing proceeds up
//! to the shortest stage.

use super::tokenize::tokenize;
use crate::error::Diagnostic;
use log::warn;

/// One positional column of a variant's stage grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StagePair {
    pub from: String,
    pub intermediates: Vec<String>,
    pub to: String,
}

/// Split one variant on the chain separator and pair tokens positionally.
pub(crate) fn pair_stages(variant: &str, diagnostics: &mut Vec<Diagnostic>) -> Vec<StagePair> {
    // Stray leading dash, an artifact of some source documents.
    let trimmed = regex!(r"^— ").replace(variant, "");

    let stages: Vec<&str> = trimmed.split('→').map(str::trim).collect();
    if stages.len() < 2 {
        warn!("too few steps in rule: {variant} - skipping");
        diagnostics.push(Diagnostic::TooFewSteps { text: variant.to_string() });
        return Vec::new();
    }

    let grid: Vec<Vec<String>> = stages.iter().map(|stage| tokenize(stage)).collect();
    let counts: Vec<usize> = grid.iter().map(Vec::len).collect();
    let common = counts.iter().copied().min().unwrap_or(0);
    if counts.iter().any(|&count| count != common) {
        warn!("mismatched stage lengths for rule: {variant} ({counts:?})");
        diagnostics.push(Diagnostic::StageLengthMismatch { text: variant.to_string(), counts });
    }

    let last = grid.len() - 1;
    (0..common)
        .map(|column| StagePair {
            from: grid[0][column].clone(),
            intermediates: grid[1..last].iter().map(|stage| stage[column].clone()).collect(),
            to: grid[last][column].clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{StagePair, pair_stages};

    fn pair(from: &str, intermediates: &[&str], to: &str) -> StagePair {
        StagePair {
            from: from.to_string(),
            intermediates: intermediates.iter().map(|s| s.to_string()).collect(),
            to: to.to_string(),
        }
    }

    #[test]
    fn two_stage_rules_pair_positionally() {
        let mut diagnostics = Vec::new();
        assert_eq!(pair_stages("z zː → j dʒː", &mut diagnostics), [pair("z", &[], "j"), pair("zː", &[], "dʒː")]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn chains_collect_intermediates() {
        let mut diagnostics = Vec::new();
        assert_eq!(pair_stages("dʒ → tʃ → ʃ", &mut diagnostics), [pair("dʒ", &["tʃ"], "ʃ")]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn stray_leading_dash_is_stripped() {
        let mut diagnostics = Vec::new();
        assert_eq!(pair_stages("— j w → i u", &mut diagnostics), [pair("j", &[], "i"), pair("w", &[], "u")]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn feature_matrices_survive_pairing() {
        let mut diagnostics = Vec::new();
        assert_eq!(pair_stages("S → [+ voice]", &mut diagnostics), [pair("S", &[], "[+ voice]")]);
        assert_eq!(pair_stages("V[- high - long] → ∅", &mut diagnostics), [pair("V[- high - long]", &[], "∅")]);
    }

    #[test]
    fn single_stage_is_a_soft_error() {
        let mut diagnostics = Vec::new();
        assert!(pair_stages("just commentary", &mut diagnostics).is_empty());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn length_mismatch_pairs_up_to_the_shortest_stage() {
        let mut diagnostics = Vec::new();
        assert_eq!(pair_stages("z zː → j", &mut diagnostics), [pair("z", &[], "j")]);
        assert_eq!(diagnostics.len(), 1);
    }
}
