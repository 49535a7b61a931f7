#[macro_use]
mod macros;
mod api;
mod classify;
mod error;
mod extract;
mod inventory;
mod notation;
mod segment;

pub use api::{
    NormalizeOutcome, Options, extract_vowel_changes, extract_vowel_changes_with, normalize_notation,
    normalize_notation_with, normalize_notation_verbose_with,
};
pub use classify::{Classify, IpaClassifier};
pub use error::Diagnostic;
pub use inventory::PhonemeInventory;
pub use segment::{
    Backness, ConsonantFeatures, Height, Length, Manner, Place, Roundness, Segment, SegmentKind, SegmentModifiers,
    SuprasegmentalKind, Voicing, VowelFeatures,
};

// --- Core data model ---------------------------------------------------------

/// One sound-change entry as authored: the raw notation text plus the
/// identifiers of the entry and of the language branch it belongs to.
///
/// Owned by the caller (typically a corpus adapter) and never mutated by the
/// core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNotation {
    pub id: String,
    pub branch_id: String,
    pub text: String,
}

/// A single atomic phoneme transformation produced by normalizing one
/// [`RawNotation`].
///
/// `from_sound` and `to_sound` are concrete sound tokens with no remaining
/// alternation (`{}`) or optional (`()`) markers. `intermediate_steps` carries
/// the inner stages of a chain like `dʒ → tʃ → ʃ`, unexpanded, in order.
/// Within the set produced from one notation, no two rules share the same
/// `(from_sound, intermediate_steps, to_sound)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomicRule {
    pub id: String,
    pub branch_id: String,
    pub from_sound: String,
    pub intermediate_steps: Vec<String>,
    pub to_sound: String,
    /// Raw environment expression, still containing `{}`/`()` markers and the
    /// `_` placeholder; expanded lazily by the extractor.
    pub environment: String,
    pub original_text: String,
}

impl AtomicRule {
    /// Render the rule's full chain, e.g. `dʒ → tʃ → ʃ`.
    pub fn chain(&self) -> String {
        let mut out = self.from_sound.clone();
        for step in &self.intermediate_steps {
            out.push_str(" → ");
            out.push_str(step);
        }
        out.push_str(" → ");
        out.push_str(&self.to_sound);
        out
    }
}

/// The terminal artifact of the core: one vowel change with its immediate
/// phonetic context resolved.
///
/// `before`/`after` are absent when the vowel sits at a string boundary and no
/// environment variant supplied a usable neighbor. `to_vowel` is absent for
/// vowel deletion (`V → ∅`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VowelChangeRecord {
    pub before: Option<Segment>,
    pub from_vowel: Segment,
    pub to_vowel: Option<Segment>,
    pub after: Option<Segment>,
    pub original_text: String,
}
