//! Environment expansion and placeholder context.
//!
//! An environment expression like `(b)_(l)d#` or `_{w,v}` is itself notation:
//! it carries optional groups, alternation groups and the `_` placeholder
//! standing for the changing segment. Expansion reuses the notation pipeline's
//! expanders; classification then locates the placeholder and reads off its
//! neighbors.

use crate::api::Options;
use crate::classify::Classify;
use crate::notation::{ExpansionBudget, expand_alternations, expand_optionals};
use crate::segment::Segment;
use log::warn;

/// Expand an environment expression into its concrete variants (optionals
/// first, then alternations), deduplicated, in first-seen order.
///
/// An empty environment expands to one empty variant: a rule without stated
/// context is still a usable rule, just one with both sides unknown.
pub(crate) fn expand(environment: &str, options: &Options) -> Vec<String> {
    let mut budget = ExpansionBudget::new(options.max_variants);
    let mut variants = Vec::new();
    'variants: for variant in expand_optionals(environment, &mut budget) {
        for concrete in expand_alternations(&variant) {
            if !budget.admit() {
                break 'variants;
            }
            if !variants.contains(&concrete) {
                variants.push(concrete);
            }
        }
    }
    if budget.overflowed() {
        warn!("expansion of environment `{environment}` exceeded the ceiling of {} variants", options.max_variants);
    }
    variants
}

/// Classify one concrete environment variant and read the segments adjacent
/// to its `_` placeholder.
///
/// Returns `None` when the variant is unusable: several placeholders, or a
/// vowel directly adjacent to the placeholder (such contexts are too
/// ambiguous to attribute and are dropped rather than guessed at). A variant
/// without a placeholder yields `(None, None)`: no context, but usable.
pub(crate) fn placeholder_context(
    variant: &str,
    classifier: &impl Classify,
) -> Option<(Option<Segment>, Option<Segment>)> {
    let stripped = regex!(r"\[[^\]]*\]").replace_all(variant, "");
    let segments = classifier.classify(&stripped);

    let mut found = false;
    let mut before = None;
    let mut after = None;
    for (index, segment) in segments.iter().enumerate() {
        if !segment.is_placeholder() {
            continue;
        }
        if found {
            return None;
        }
        if let Some(at) = index.checked_sub(1) {
            if segments[at].is_vowel() {
                return None;
            }
            before = usable(&segments[at]);
        }
        if let Some(next) = segments.get(index + 1) {
            if next.is_vowel() {
                return None;
            }
            after = usable(next);
        }
        found = true;
    }
    Some((before, after))
}

fn usable(segment: &Segment) -> Option<Segment> {
    if segment.is_suprasegmental() { None } else { Some(segment.clone()) }
}
