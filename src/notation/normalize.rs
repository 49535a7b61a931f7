//! Rule normalization: one raw notation in, atomic rules out.
//!
//! This is the pipeline orchestrator. It owns the steps that are about the
//! *whole* notation (annotation stripping, environment split-off, variant
//! enumeration, rule assembly, deduplication) and delegates each bounded
//! piece to its sibling module.

use super::alternation::expand_alternations;
use super::budget::ExpansionBudget;
use super::dedup::RuleKey;
use super::optional::expand_optionals;
use super::stages::pair_stages;
use crate::api::Options;
use crate::error::Diagnostic;
use crate::{AtomicRule, RawNotation};
use log::{debug, warn};
use std::collections::HashSet;

/// Normalize one raw notation into its deduplicated atomic rules.
pub(crate) fn normalize(raw: &RawNotation, options: &Options) -> (Vec<AtomicRule>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();

    let text = raw.text.trim();
    if text.is_empty() {
        diagnostics.push(Diagnostic::EmptyNotation);
        return (Vec::new(), diagnostics);
    }

    // Backticked asides and "(?)" are authorial uncertainty annotations, not
    // semantic content.
    let cleaned = regex!(r"`[^`]*`").replace_all(text, "");
    let cleaned = cleaned.replace("(?)", "");

    let (body, environment) = split_environment(&cleaned);

    let mut variant_budget = ExpansionBudget::new(options.max_variants);
    let variants = expand_optionals(&body, &mut variant_budget);

    let mut rule_budget = ExpansionBudget::new(options.max_variants);
    let mut seen: HashSet<RuleKey> = HashSet::new();
    let mut rules = Vec::new();

    'variants: for variant in variants {
        for column in pair_stages(&variant, &mut diagnostics) {
            let from_sounds = expand_alternations(&column.from);
            let to_sounds = expand_alternations(&column.to);
            for from in &from_sounds {
                for to in &to_sounds {
                    if !rule_budget.admit() {
                        break 'variants;
                    }
                    if !seen.insert(RuleKey::new(from, &column.intermediates, to)) {
                        continue;
                    }
                    rules.push(AtomicRule {
                        id: raw.id.clone(),
                        branch_id: raw.branch_id.clone(),
                        from_sound: from.clone(),
                        intermediate_steps: column.intermediates.clone(),
                        to_sound: to.clone(),
                        environment: environment.clone(),
                        original_text: raw.text.clone(),
                    });
                }
            }
        }
    }

    if variant_budget.overflowed() || rule_budget.overflowed() {
        warn!("expansion of `{}` exceeded the ceiling of {} variants", raw.text, options.max_variants);
        diagnostics.push(Diagnostic::ExpansionOverflow { text: raw.text.clone(), limit: options.max_variants });
    }

    debug!("normalized `{}` into {} rule(s)", raw.text, rules.len());
    (rules, diagnostics)
}

/// Separate the environment suffix from the rule body.
///
/// The primary form is an explicit `" / "` separator. Failing that, a rule
/// that ends with a parenthesized or curly-quoted clause is treated as
/// carrying its environment inline, unless the clause directly follows the
/// chain separator, in which case it is a trailing optional stage, not an
/// environment.
fn split_environment(text: &str) -> (String, String) {
    if let Some((body, environment)) = text.split_once(" / ") {
        return (body.to_string(), environment.trim().to_string());
    }

    if let Some(captures) = regex!(r"(.+) (\(.+\)|“.+”)$").captures(text) {
        let body = captures.get(1).unwrap().as_str();
        if !body.trim_end().ends_with('→') {
            return (body.to_string(), captures.get(2).unwrap().as_str().to_string());
        }
    }

    (text.to_string(), String::new())
}
