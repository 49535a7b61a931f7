//! Single-letter natural-class abbreviation codes.
//!
//! Source documents abbreviate whole classes of sounds with uppercase letters
//! (`V` any vowel, `O` any obstruent, `K` any velar, ...). Each code
//! classifies like a normal segment whose unspecified feature axes are `Any`,
//! so the extractor can treat `CaːC` exactly like a concrete sound string.

use crate::segment::{
    Backness, ConsonantFeatures, Height, Length, Manner, Place, Roundness, SegmentKind, SegmentModifiers, Voicing,
    VowelFeatures,
};

fn vowel_class(backness: Backness, modifiers: SegmentModifiers) -> SegmentKind {
    SegmentKind::Vowel(VowelFeatures {
        height: Height::Any,
        backness,
        roundness: Roundness::Any,
        length: Length::Short,
        modifiers,
    })
}

fn consonant_class(voicing: Voicing, place: Place, manner: Manner) -> SegmentKind {
    SegmentKind::Consonant(ConsonantFeatures { voicing, place, manner, modifiers: SegmentModifiers::empty() })
}

pub(super) fn entries() -> Vec<(&'static str, SegmentKind)> {
    vec![
        ("A", consonant_class(Voicing::Any, Place::Any, Manner::SibilantAffricate)),
        ("B", vowel_class(Backness::Back, SegmentModifiers::empty())),
        ("C", consonant_class(Voicing::Any, Place::Any, Manner::Any)),
        ("D", consonant_class(Voicing::Voiced, Place::Any, Manner::Plosive)),
        ("E", vowel_class(Backness::Front, SegmentModifiers::empty())),
        ("F", consonant_class(Voicing::Any, Place::Any, Manner::SibilantFricative)),
        ("H", consonant_class(Voicing::Any, Place::Laryngeal, Manner::Any)),
        ("J", consonant_class(Voicing::Any, Place::Any, Manner::Approximant)),
        ("K", consonant_class(Voicing::Any, Place::Velar, Manner::Any)),
        ("Ḱ", consonant_class(Voicing::Any, Place::Palatal, Manner::Any)),
        ("L", consonant_class(Voicing::Any, Place::Any, Manner::Liquid)),
        ("M", vowel_class(Backness::Any, SegmentModifiers::DIPHTHONG)),
        ("N", consonant_class(Voicing::Any, Place::Any, Manner::Nasal)),
        ("O", consonant_class(Voicing::Any, Place::Any, Manner::Obstruent)),
        ("P", consonant_class(Voicing::Any, Place::Bilabial, Manner::Any)),
        ("Q", consonant_class(Voicing::Any, Place::Uvular, Manner::Any)),
        ("R", consonant_class(Voicing::Any, Place::Any, Manner::Sonorant)),
        ("S", consonant_class(Voicing::Any, Place::Any, Manner::Plosive)),
        ("V", vowel_class(Backness::Any, SegmentModifiers::empty())),
        ("W", consonant_class(Voicing::Any, Place::Any, Manner::Glide)),
        ("Z", consonant_class(Voicing::Any, Place::Any, Manner::Continuant)),
    ]
}
