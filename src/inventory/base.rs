//! Base IPA entries: vowels by height/backness/roundness, consonants by
//! voicing/place/manner, affricate digraphs, and the suprasegmental markers
//! the notation uses around sounds.

use crate::segment::{
    Backness, ConsonantFeatures, Height, Length, Manner, Place, Roundness, SegmentKind, SegmentModifiers,
    SuprasegmentalKind, Voicing, VowelFeatures,
};

fn vowel(height: Height, backness: Backness, roundness: Roundness) -> SegmentKind {
    SegmentKind::Vowel(VowelFeatures {
        height,
        backness,
        roundness,
        length: Length::Short,
        modifiers: SegmentModifiers::empty(),
    })
}

fn consonant(voicing: Voicing, place: Place, manner: Manner) -> SegmentKind {
    SegmentKind::Consonant(ConsonantFeatures { voicing, place, manner, modifiers: SegmentModifiers::empty() })
}

pub(super) fn entries() -> Vec<(&'static str, SegmentKind)> {
    use Backness::*;
    use Height::*;
    use Manner::*;
    use Place::*;
    use Roundness::*;
    use Voicing::*;

    let mut out: Vec<(&'static str, SegmentKind)> = Vec::new();

    // Vowels.
    for (symbol, height, backness, roundness) in [
        ("i", Close, Front, Unrounded),
        ("y", Close, Front, Rounded),
        ("ɨ", Close, Central, Unrounded),
        ("ʉ", Close, Central, Rounded),
        ("ɯ", Close, Back, Unrounded),
        ("u", Close, Back, Rounded),
        ("ɪ", NearClose, Front, Unrounded),
        ("ʏ", NearClose, Front, Rounded),
        ("ʊ", NearClose, Back, Rounded),
        ("e", CloseMid, Front, Unrounded),
        ("ø", CloseMid, Front, Rounded),
        ("ɘ", CloseMid, Central, Unrounded),
        ("ɵ", CloseMid, Central, Rounded),
        ("ɤ", CloseMid, Back, Unrounded),
        ("o", CloseMid, Back, Rounded),
        ("ə", Mid, Central, Unrounded),
        ("ɛ", OpenMid, Front, Unrounded),
        ("œ", OpenMid, Front, Rounded),
        ("ɜ", OpenMid, Central, Unrounded),
        ("ɞ", OpenMid, Central, Rounded),
        ("ʌ", OpenMid, Back, Unrounded),
        ("ɔ", OpenMid, Back, Rounded),
        ("æ", NearOpen, Front, Unrounded),
        ("ɐ", NearOpen, Central, Unrounded),
        ("a", Open, Front, Unrounded),
        ("ɶ", Open, Front, Rounded),
        ("ɑ", Open, Back, Unrounded),
        ("ɒ", Open, Back, Rounded),
    ] {
        out.push((symbol, vowel(height, backness, roundness)));
    }

    // Consonants.
    for (symbol, voicing, place, manner) in [
        // Nasals.
        ("m", Voiced, Bilabial, Nasal),
        ("ɱ", Voiced, Labiodental, Nasal),
        ("n", Voiced, Alveolar, Nasal),
        ("ɳ", Voiced, Retroflex, Nasal),
        ("ɲ", Voiced, Palatal, Nasal),
        ("ŋ", Voiced, Velar, Nasal),
        ("ɴ", Voiced, Uvular, Nasal),
        // Plosives.
        ("p", Voiceless, Bilabial, Plosive),
        ("b", Voiced, Bilabial, Plosive),
        ("t", Voiceless, Alveolar, Plosive),
        ("d", Voiced, Alveolar, Plosive),
        ("ʈ", Voiceless, Retroflex, Plosive),
        ("ɖ", Voiced, Retroflex, Plosive),
        ("c", Voiceless, Palatal, Plosive),
        ("ɟ", Voiced, Palatal, Plosive),
        ("k", Voiceless, Velar, Plosive),
        ("ɡ", Voiced, Velar, Plosive),
        ("g", Voiced, Velar, Plosive),
        ("q", Voiceless, Uvular, Plosive),
        ("ɢ", Voiced, Uvular, Plosive),
        ("ʔ", Voiceless, Glottal, Plosive),
        // Sibilant fricatives.
        ("s", Voiceless, Alveolar, SibilantFricative),
        ("z", Voiced, Alveolar, SibilantFricative),
        ("ʃ", Voiceless, Postalveolar, SibilantFricative),
        ("ʒ", Voiced, Postalveolar, SibilantFricative),
        ("ʂ", Voiceless, Retroflex, SibilantFricative),
        ("ʐ", Voiced, Retroflex, SibilantFricative),
        ("ɕ", Voiceless, Palatal, SibilantFricative),
        ("ʑ", Voiced, Palatal, SibilantFricative),
        // Non-sibilant fricatives.
        ("ɸ", Voiceless, Bilabial, NonSibilantFricative),
        ("β", Voiced, Bilabial, NonSibilantFricative),
        ("f", Voiceless, Labiodental, NonSibilantFricative),
        ("v", Voiced, Labiodental, NonSibilantFricative),
        ("θ", Voiceless, Dental, NonSibilantFricative),
        ("ð", Voiced, Dental, NonSibilantFricative),
        ("ç", Voiceless, Palatal, NonSibilantFricative),
        ("ʝ", Voiced, Palatal, NonSibilantFricative),
        ("x", Voiceless, Velar, NonSibilantFricative),
        ("ɣ", Voiced, Velar, NonSibilantFricative),
        ("χ", Voiceless, Uvular, NonSibilantFricative),
        ("ʁ", Voiced, Uvular, NonSibilantFricative),
        ("ħ", Voiceless, Pharyngeal, NonSibilantFricative),
        ("ʕ", Voiced, Pharyngeal, NonSibilantFricative),
        ("h", Voiceless, Glottal, NonSibilantFricative),
        ("ɦ", Voiced, Glottal, NonSibilantFricative),
        // Lateral fricatives.
        ("ɬ", Voiceless, Alveolar, LateralFricative),
        ("ɮ", Voiced, Alveolar, LateralFricative),
        // Affricate digraphs.
        ("ts", Voiceless, Alveolar, SibilantAffricate),
        ("dz", Voiced, Alveolar, SibilantAffricate),
        ("tʃ", Voiceless, Postalveolar, SibilantAffricate),
        ("dʒ", Voiced, Postalveolar, SibilantAffricate),
        ("tɕ", Voiceless, Palatal, SibilantAffricate),
        ("dʑ", Voiced, Palatal, SibilantAffricate),
        // Approximants and glides.
        ("ʋ", Voiced, Labiodental, Approximant),
        ("ɹ", Voiced, Alveolar, Approximant),
        ("ɻ", Voiced, Retroflex, Approximant),
        ("j", Voiced, Palatal, Glide),
        ("ɥ", Voiced, Palatal, Glide),
        ("ɰ", Voiced, Velar, Glide),
        ("w", Voiced, Velar, Glide),
        ("ʍ", Voiceless, Velar, Glide),
        // Laterals.
        ("l", Voiced, Alveolar, LateralApproximant),
        ("ɭ", Voiced, Retroflex, LateralApproximant),
        ("ʎ", Voiced, Palatal, LateralApproximant),
        ("ʟ", Voiced, Velar, LateralApproximant),
        // Trills and taps.
        ("ʙ", Voiced, Bilabial, Trill),
        ("r", Voiced, Alveolar, Trill),
        ("ʀ", Voiced, Uvular, Trill),
        ("ɾ", Voiced, Alveolar, TapOrFlap),
        ("ɽ", Voiced, Retroflex, TapOrFlap),
    ] {
        out.push((symbol, consonant(voicing, place, manner)));
    }

    // Suprasegmentals and notation markers.
    for (symbol, kind) in [
        ("_", SuprasegmentalKind::Placeholder),
        ("#", SuprasegmentalKind::WordBoundary),
        ("ː", SuprasegmentalKind::LengthMark),
        ("ˑ", SuprasegmentalKind::LengthMark),
        ("ˈ", SuprasegmentalKind::Stress),
        ("ˌ", SuprasegmentalKind::Stress),
        (".", SuprasegmentalKind::Other),
        ("*", SuprasegmentalKind::Other),
        ("∅", SuprasegmentalKind::Other),
    ] {
        out.push((symbol, SegmentKind::Suprasegmental(kind)));
    }

    out
}
