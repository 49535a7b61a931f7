//! Vowel-context extraction.
//!
//! Given one atomic rule, locate the single vowel undergoing change in its
//! source form and resolve the segments on either side of it: from the sound
//! string itself when possible, otherwise from the rule's environment
//! expression. The result is zero or more [`VowelChangeRecord`]s.
//!
//! ```text
//! from "baːd"              ──▶ before=b  vowel=aː  after=d   (sound resolves both sides)
//! from "aː", env "_{w,v}"  ──▶ two records differing in `after` (w / v)
//! from "baːde"             ──▶ nothing (two vowels: ambiguous, dropped)
//! ```
//!
//! The rules, in order:
//!
//! - more than one vowel in the source form: ambiguous, no records;
//! - no vowel in the source form: nothing changed a vowel, no records;
//! - both neighbors present in the sound string: exactly one record, the
//!   environment is never consulted;
//! - otherwise each concrete environment variant may contribute a record;
//!   variants whose placeholder sits next to a vowel are discarded, sides
//!   already resolved from the sound take precedence, and equal records
//!   collapse.

#[path = "extract/environment.rs"]
mod environment;

#[cfg(test)]
#[path = "extract/tests.rs"]
mod tests;

use crate::api::Options;
use crate::classify::Classify;
use crate::segment::Segment;
use crate::{AtomicRule, VowelChangeRecord};

/// The single changing vowel of a sound string and its immediate neighbors.
#[derive(Debug, Clone, Default)]
struct SoundContext {
    before: Option<Segment>,
    vowel: Option<Segment>,
    after: Option<Segment>,
}

/// Classify a sound string and locate its single vowel.
///
/// Returns `None` when more than one vowel is present (ambiguous). A missing
/// vowel is not an error here; the caller decides what absence means.
fn sound_context(sound: &str, classifier: &impl Classify) -> Option<SoundContext> {
    // Feature matrices do not resolve to phonetic segments.
    let stripped = regex!(r"\[[^\]]*\]").replace_all(sound, "");
    let segments = classifier.classify(&stripped);

    let mut context = SoundContext::default();
    for (index, segment) in segments.iter().enumerate() {
        if !segment.is_vowel() {
            continue;
        }
        if context.vowel.is_some() {
            return None;
        }
        context.before = index.checked_sub(1).and_then(|at| usable_neighbor(&segments[at]));
        context.after = segments.get(index + 1).and_then(usable_neighbor);
        context.vowel = Some(segment.clone());
    }
    Some(context)
}

/// A neighbor counts as context only if it is an actual sound; boundary marks
/// and other suprasegmentals leave the side absent.
fn usable_neighbor(segment: &Segment) -> Option<Segment> {
    if segment.is_suprasegmental() { None } else { Some(segment.clone()) }
}

/// Extract the vowel-change records of one atomic rule.
pub(crate) fn extract(rule: &AtomicRule, classifier: &impl Classify, options: &Options) -> Vec<VowelChangeRecord> {
    let Some(from) = sound_context(&rule.from_sound, classifier) else {
        return Vec::new();
    };
    let Some(from_vowel) = from.vowel else {
        return Vec::new();
    };
    let Some(to) = sound_context(&rule.to_sound, classifier) else {
        return Vec::new();
    };
    let to_vowel = to.vowel;

    if from.before.is_some() && from.after.is_some() {
        return vec![VowelChangeRecord {
            before: from.before,
            from_vowel,
            to_vowel,
            after: from.after,
            original_text: rule.original_text.clone(),
        }];
    }

    let mut records: Vec<VowelChangeRecord> = Vec::new();
    for variant in environment::expand(&rule.environment, options) {
        let Some((env_before, env_after)) = environment::placeholder_context(&variant, classifier) else {
            continue;
        };
        let record = VowelChangeRecord {
            // Sides resolved from the sound itself win over the environment.
            before: from.before.clone().or(env_before),
            from_vowel: from_vowel.clone(),
            to_vowel: to_vowel.clone(),
            after: from.after.clone().or(env_after),
            original_text: rule.original_text.clone(),
        };
        if !records.contains(&record) {
            records.push(record);
        }
    }
    records
}
