//! The phoneme inventory: an immutable symbol-to-features lookup table.
//!
//! The inventory is process-wide, read-only configuration data. It is built
//! once behind a `Lazy` and passed by reference into the classifier; nothing
//! mutates it after construction.
//!
//! Three families of entries:
//!
//! - base IPA letters and affricate digraphs (`base.rs`)
//! - suprasegmental markers the notation uses (`base.rs`)
//! - single-letter natural-class abbreviation codes (`abbreviations.rs`),
//!   following the Index Diachronica abbreviation table

mod abbreviations;
mod base;

use crate::segment::SegmentKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static GLOBAL: Lazy<PhonemeInventory> = Lazy::new(PhonemeInventory::new);

/// Immutable lookup table from notation symbols to segment feature templates.
#[derive(Debug)]
pub struct PhonemeInventory {
    singles: HashMap<char, SegmentKind>,
    digraphs: HashMap<(char, char), SegmentKind>,
}

impl PhonemeInventory {
    /// Build the full inventory (base IPA + suprasegmentals + abbreviation
    /// codes). Prefer [`PhonemeInventory::global`] outside of tests.
    pub fn new() -> Self {
        let mut singles = HashMap::new();
        let mut digraphs = HashMap::new();

        for (symbol, kind) in base::entries().into_iter().chain(abbreviations::entries()) {
            let mut chars = symbol.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(a), None, _) => {
                    singles.insert(a, kind);
                }
                (Some(a), Some(b), None) => {
                    digraphs.insert((a, b), kind);
                }
                _ => unreachable!("inventory symbols are one or two characters"),
            }
        }

        PhonemeInventory { singles, digraphs }
    }

    /// The shared process-wide inventory.
    pub fn global() -> &'static PhonemeInventory {
        &GLOBAL
    }

    pub fn lookup(&self, symbol: char) -> Option<&SegmentKind> {
        self.singles.get(&symbol)
    }

    pub fn lookup_digraph(&self, first: char, second: char) -> Option<&SegmentKind> {
        self.digraphs.get(&(first, second))
    }
}

impl Default for PhonemeInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{Manner, SegmentKind, SuprasegmentalKind, Voicing};

    #[test]
    fn base_letters_resolve() {
        let inv = PhonemeInventory::global();
        assert!(matches!(inv.lookup('a'), Some(SegmentKind::Vowel(_))));
        assert!(matches!(inv.lookup('b'), Some(SegmentKind::Consonant(_))));
        assert!(inv.lookup('7').is_none());
    }

    #[test]
    fn affricate_digraphs_resolve() {
        let inv = PhonemeInventory::global();
        let Some(SegmentKind::Consonant(f)) = inv.lookup_digraph('d', 'ʒ') else {
            panic!("dʒ should be a consonant digraph");
        };
        assert_eq!(f.voicing, Voicing::Voiced);
        assert_eq!(f.manner, Manner::SibilantAffricate);
    }

    #[test]
    fn abbreviation_codes_resolve() {
        let inv = PhonemeInventory::global();
        assert!(matches!(inv.lookup('V'), Some(SegmentKind::Vowel(_))));
        assert!(matches!(inv.lookup('C'), Some(SegmentKind::Consonant(_))));
        // Not every uppercase letter is a code.
        assert!(inv.lookup('X').is_none());
    }

    #[test]
    fn notation_markers_resolve() {
        let inv = PhonemeInventory::global();
        assert!(matches!(
            inv.lookup('_'),
            Some(SegmentKind::Suprasegmental(SuprasegmentalKind::Placeholder))
        ));
        assert!(matches!(
            inv.lookup('#'),
            Some(SegmentKind::Suprasegmental(SuprasegmentalKind::WordBoundary))
        ));
    }
}
