//! Diagnostic conditions raised while normalizing a notation.
//!
//! Every condition here is local to one notation and non-fatal: a failing
//! notation contributes fewer rules, never an aborted batch. Ambiguous vowels
//! and unresolvable environments are not diagnostics at all; they simply yield
//! no records from the extractor.

use thiserror::Error;

/// Per-notation diagnostic produced by the rule normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The notation text was empty after trimming.
    #[error("empty notation")]
    EmptyNotation,

    /// A rule variant had fewer than two chain stages.
    #[error("too few steps in rule `{text}`")]
    TooFewSteps { text: String },

    /// Token counts disagreed across the stages of one variant; pairing
    /// proceeded up to the shortest stage.
    #[error("mismatched stage lengths in rule `{text}` ({counts:?})")]
    StageLengthMismatch { text: String, counts: Vec<usize> },

    /// Optional/alternation expansion hit the configured ceiling and was
    /// truncated.
    #[error("expansion of `{text}` exceeded the ceiling of {limit} variants")]
    ExpansionOverflow { text: String, limit: usize },
}
