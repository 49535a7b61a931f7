//! Phonetic classification.
//!
//! The extractor consumes classification as a *capability*: anything that can
//! turn a string into an ordered sequence of [`Segment`]s. The [`Classify`]
//! trait is that seam, with a blanket impl for plain functions so tests and
//! embedders can supply their own model.
//!
//! [`IpaClassifier`] is the built-in implementation: a deterministic linear
//! scan over the input that resolves symbols against the immutable
//! [`PhonemeInventory`] and folds trailing marks into the preceding segment.
//!
//! ```text
//! "baːd"  ──▶ [ b (consonant), aː (vowel, long), d (consonant) ]
//! "#C_"   ──▶ [ # (boundary), C (any consonant), _ (placeholder) ]
//! ```
//!
//! Scan rules, in order at each position:
//!
//! 1. whitespace is skipped;
//! 2. a two-character digraph known to the inventory (affricates like `tʃ`)
//!    wins over its first character;
//! 3. a known single character resolves to its inventory template;
//! 4. anything else becomes a bare suprasegmental segment; unknown input is
//!    never silently dropped, and it never counts as phonetic context;
//! 5. length marks and diacritics following a consonant or vowel are absorbed
//!    into that segment's text and features.

use crate::inventory::PhonemeInventory;
use crate::segment::{Length, Segment, SegmentKind, SegmentModifiers, SuprasegmentalKind, Voicing};

/// Capability: classify a string into an ordered sequence of segments.
pub trait Classify {
    fn classify(&self, text: &str) -> Vec<Segment>;
}

impl<F> Classify for F
where
    F: Fn(&str) -> Vec<Segment>,
{
    fn classify(&self, text: &str) -> Vec<Segment> {
        self(text)
    }
}

/// Rule-based classifier over a phoneme inventory.
#[derive(Debug, Clone, Copy)]
pub struct IpaClassifier<'a> {
    inventory: &'a PhonemeInventory,
}

impl IpaClassifier<'static> {
    /// Classifier over the shared process-wide inventory.
    pub fn new() -> Self {
        IpaClassifier { inventory: PhonemeInventory::global() }
    }
}

impl<'a> IpaClassifier<'a> {
    /// Classifier over a caller-owned inventory.
    pub fn with_inventory(inventory: &'a PhonemeInventory) -> Self {
        IpaClassifier { inventory }
    }

    fn lookup_at(&self, chars: &[char], at: usize) -> (SegmentKind, usize) {
        if at + 1 < chars.len() {
            if let Some(kind) = self.inventory.lookup_digraph(chars[at], chars[at + 1]) {
                return (kind.clone(), 2);
            }
        }
        if let Some(kind) = self.inventory.lookup(chars[at]) {
            return (kind.clone(), 1);
        }
        (SegmentKind::Suprasegmental(SuprasegmentalKind::Other), 1)
    }
}

impl Default for IpaClassifier<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Classify for IpaClassifier<'_> {
    fn classify(&self, text: &str) -> Vec<Segment> {
        // Tie bars only join what the digraph table already joins.
        let chars: Vec<char> = text.chars().filter(|&c| c != '\u{0361}').collect();

        let mut segments = Vec::new();
        let mut index = 0;
        while index < chars.len() {
            if chars[index].is_whitespace() {
                index += 1;
                continue;
            }

            let (mut kind, consumed) = self.lookup_at(&chars, index);
            let mut covered: String = chars[index..index + consumed].iter().collect();
            index += consumed;

            while index < chars.len() && attach(&mut kind, chars[index]) {
                covered.push(chars[index]);
                index += 1;
            }

            segments.push(Segment { text: covered, kind });
        }
        segments
    }
}

/// Fold a trailing mark into the segment under construction. Returns false
/// when the mark does not attach (it then starts its own segment).
fn attach(kind: &mut SegmentKind, mark: char) -> bool {
    match kind {
        SegmentKind::Vowel(features) => match mark {
            'ː' => {
                features.length = Length::Long;
                true
            }
            'ˑ' => {
                features.length = Length::HalfLong;
                true
            }
            'ʲ' => {
                features.modifiers |= SegmentModifiers::PALATALIZED;
                true
            }
            'ʷ' => {
                features.modifiers |= SegmentModifiers::LABIALIZED;
                true
            }
            '\u{0303}' => {
                features.modifiers |= SegmentModifiers::NASALIZED;
                true
            }
            '\u{0325}' | '\u{030A}' => {
                features.modifiers |= SegmentModifiers::DEVOICED;
                true
            }
            '\u{0329}' => {
                features.modifiers |= SegmentModifiers::SYLLABIC;
                true
            }
            _ => false,
        },
        SegmentKind::Consonant(features) => match mark {
            'ː' | 'ˑ' => {
                features.modifiers |= SegmentModifiers::GEMINATE;
                true
            }
            'ʲ' => {
                features.modifiers |= SegmentModifiers::PALATALIZED;
                true
            }
            'ʷ' => {
                features.modifiers |= SegmentModifiers::LABIALIZED;
                true
            }
            'ʰ' => {
                features.modifiers |= SegmentModifiers::ASPIRATED;
                true
            }
            'ʼ' => {
                features.modifiers |= SegmentModifiers::EJECTIVE;
                true
            }
            '\u{0303}' => {
                features.modifiers |= SegmentModifiers::NASALIZED;
                true
            }
            '\u{0325}' | '\u{030A}' => {
                features.voicing = Voicing::Voiceless;
                features.modifiers |= SegmentModifiers::DEVOICED;
                true
            }
            '\u{0329}' => {
                features.modifiers |= SegmentModifiers::SYLLABIC;
                true
            }
            _ => false,
        },
        SegmentKind::Suprasegmental(_) => false,
    }
}
