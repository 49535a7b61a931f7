//! Rule identity for first-seen deduplication.
//!
//! Optional and alternation expansion routinely re-derive the same atomic
//! rule through different variants (removing `(x)` from two places can
//! collapse to the same text). Within one notation only the first occurrence
//! of a `(from, intermediates, to)` triple is kept; this key is what "the
//! same rule" means. The environment is deliberately not part of the key:
//! every rule from one notation shares it.

/// Identity of an atomic rule within one notation's expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RuleKey {
    from: String,
    intermediates: Vec<String>,
    to: String,
}

impl RuleKey {
    pub(crate) fn new(from: &str, intermediates: &[String], to: &str) -> Self {
        RuleKey { from: from.to_string(), intermediates: intermediates.to_vec(), to: to.to_string() }
    }
}
