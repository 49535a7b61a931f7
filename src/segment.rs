//! Phonetic value types.
//!
//! A [`Segment`] is one classified phonetic unit: a consonant, a vowel, or a
//! suprasegmental marker, together with its articulatory features. Feature
//! axes carry an `Any` wildcard so that natural-class abbreviation codes
//! (`V` "any vowel", `O` "any obstruent", ...) classify into the same model as
//! concrete IPA letters.

use bitflags::bitflags;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voicing {
    Voiced,
    Voiceless,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Place {
    Bilabial,
    Labiodental,
    Dental,
    Alveolar,
    Postalveolar,
    Retroflex,
    Palatal,
    Velar,
    Uvular,
    Pharyngeal,
    Glottal,
    /// Cover term for pharyngeal/glottal, used by the `H` abbreviation code.
    Laryngeal,
    Any,
}

/// Manner of articulation, including the coarse natural-class manners the
/// abbreviation codes denote (liquid, obstruent, sonorant, continuant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manner {
    Nasal,
    Plosive,
    SibilantAffricate,
    SibilantFricative,
    NonSibilantFricative,
    LateralFricative,
    Approximant,
    LateralApproximant,
    TapOrFlap,
    Trill,
    Glide,
    Liquid,
    Obstruent,
    Sonorant,
    Continuant,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Height {
    Close,
    NearClose,
    CloseMid,
    Mid,
    OpenMid,
    NearOpen,
    Open,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backness {
    Front,
    Central,
    Back,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Roundness {
    Rounded,
    Unrounded,
    Any,
}

/// Vowel (or geminate consonant) length, carried by a trailing `ː`/`ˑ` mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Length {
    #[default]
    Short,
    HalfLong,
    Long,
}

bitflags! {
    /// Modifier flags attached to a segment by diacritics and modifier
    /// letters (`ʲ ʷ ʰ ʼ`, combining tilde/ring/syllabic mark, ...).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SegmentModifiers: u16 {
        const NASALIZED = 1 << 0;
        const PALATALIZED = 1 << 1;
        const LABIALIZED = 1 << 2;
        const ASPIRATED = 1 << 3;
        const EJECTIVE = 1 << 4;
        const DEVOICED = 1 << 5;
        const SYLLABIC = 1 << 6;
        const GEMINATE = 1 << 7;
        const DIPHTHONG = 1 << 8;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsonantFeatures {
    pub voicing: Voicing,
    pub place: Place,
    pub manner: Manner,
    pub modifiers: SegmentModifiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VowelFeatures {
    pub height: Height,
    pub backness: Backness,
    pub roundness: Roundness,
    pub length: Length,
    pub modifiers: SegmentModifiers,
}

/// Suprasegmental markers the notation uses around sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuprasegmentalKind {
    /// `_`: the position of the changing segment in an environment.
    Placeholder,
    /// `#`: word boundary.
    WordBoundary,
    /// Standalone `ː`/`ˑ` (normally absorbed into the preceding segment).
    LengthMark,
    /// `ˈ`/`ˌ` stress marks.
    Stress,
    /// Anything else the notation carries that is not a classifiable sound
    /// (`∅`, `*`, syllable dots, stray punctuation).
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Consonant(ConsonantFeatures),
    Vowel(VowelFeatures),
    Suprasegmental(SuprasegmentalKind),
}

/// One classified phonetic unit: the covered text plus its features.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    pub fn is_vowel(&self) -> bool {
        matches!(self.kind, SegmentKind::Vowel(_))
    }

    pub fn is_consonant(&self) -> bool {
        matches!(self.kind, SegmentKind::Consonant(_))
    }

    pub fn is_suprasegmental(&self) -> bool {
        matches!(self.kind, SegmentKind::Suprasegmental(_))
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, SegmentKind::Suprasegmental(SuprasegmentalKind::Placeholder))
    }

    /// Human-readable feature summary, e.g. `voiced alveolar plosive` or
    /// `open back unrounded vowel (long)`.
    pub fn summary(&self) -> String {
        match &self.kind {
            SegmentKind::Consonant(f) => {
                let mut s = format!("{} {} {}", f.voicing, f.place, f.manner);
                if !f.modifiers.is_empty() {
                    s.push_str(&format!(" ({:?})", f.modifiers));
                }
                s
            }
            SegmentKind::Vowel(f) => {
                let mut s = format!("{} {} {} vowel", f.height, f.backness, f.roundness);
                match f.length {
                    Length::Short => {}
                    Length::HalfLong => s.push_str(" (half-long)"),
                    Length::Long => s.push_str(" (long)"),
                }
                if !f.modifiers.is_empty() {
                    s.push_str(&format!(" ({:?})", f.modifiers));
                }
                s
            }
            SegmentKind::Suprasegmental(k) => format!("{k:?}").to_lowercase(),
        }
    }
}

impl fmt::Display for Voicing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Voicing::Voiced => "voiced",
            Voicing::Voiceless => "voiceless",
            Voicing::Any => "any-voicing",
        })
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Place::Bilabial => "bilabial",
            Place::Labiodental => "labiodental",
            Place::Dental => "dental",
            Place::Alveolar => "alveolar",
            Place::Postalveolar => "postalveolar",
            Place::Retroflex => "retroflex",
            Place::Palatal => "palatal",
            Place::Velar => "velar",
            Place::Uvular => "uvular",
            Place::Pharyngeal => "pharyngeal",
            Place::Glottal => "glottal",
            Place::Laryngeal => "laryngeal",
            Place::Any => "any-place",
        })
    }
}

impl fmt::Display for Manner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Manner::Nasal => "nasal",
            Manner::Plosive => "plosive",
            Manner::SibilantAffricate => "affricate",
            Manner::SibilantFricative => "sibilant fricative",
            Manner::NonSibilantFricative => "fricative",
            Manner::LateralFricative => "lateral fricative",
            Manner::Approximant => "approximant",
            Manner::LateralApproximant => "lateral approximant",
            Manner::TapOrFlap => "tap",
            Manner::Trill => "trill",
            Manner::Glide => "glide",
            Manner::Liquid => "liquid",
            Manner::Obstruent => "obstruent",
            Manner::Sonorant => "sonorant",
            Manner::Continuant => "continuant",
            Manner::Any => "any-manner",
        })
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Height::Close => "close",
            Height::NearClose => "near-close",
            Height::CloseMid => "close-mid",
            Height::Mid => "mid",
            Height::OpenMid => "open-mid",
            Height::NearOpen => "near-open",
            Height::Open => "open",
            Height::Any => "any-height",
        })
    }
}

impl fmt::Display for Backness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Backness::Front => "front",
            Backness::Central => "central",
            Backness::Back => "back",
            Backness::Any => "any-backness",
        })
    }
}

impl fmt::Display for Roundness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Roundness::Rounded => "rounded",
            Roundness::Unrounded => "unrounded",
            Roundness::Any => "any-roundness",
        })
    }
}
