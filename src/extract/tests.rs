use super::environment;
use super::sound_context;
use crate::api::{Options, extract_vowel_changes};
use crate::classify::IpaClassifier;
use crate::{AtomicRule, VowelChangeRecord};

fn rule(from: &str, to: &str, environment: &str) -> AtomicRule {
    AtomicRule {
        id: "test".to_string(),
        branch_id: "test-branch".to_string(),
        from_sound: from.to_string(),
        intermediate_steps: Vec::new(),
        to_sound: to.to_string(),
        environment: environment.to_string(),
        original_text: format!("{from} → {to}"),
    }
}

/// Compact view of a record: the `before`, `from`, `to`, `after` texts.
fn texts(record: &VowelChangeRecord) -> [Option<String>; 4] {
    [
        record.before.as_ref().map(|s| s.text.clone()),
        Some(record.from_vowel.text.clone()),
        record.to_vowel.as_ref().map(|s| s.text.clone()),
        record.after.as_ref().map(|s| s.text.clone()),
    ]
}

fn some(text: &str) -> Option<String> {
    Some(text.to_string())
}

#[test]
fn sound_context_finds_a_long_vowel() {
    let context = sound_context("Caːd", &IpaClassifier::new()).expect("single vowel");
    assert_eq!(context.before.map(|s| s.text), some("C"));
    assert_eq!(context.vowel.map(|s| s.text), some("aː"));
    assert_eq!(context.after.map(|s| s.text), some("d"));
}

#[test]
fn sound_context_bails_on_two_vowels() {
    assert!(sound_context("Caːde", &IpaClassifier::new()).is_none());
}

#[test]
fn sound_context_at_string_boundaries() {
    let context = sound_context("ef", &IpaClassifier::new()).expect("single vowel");
    assert!(context.before.is_none());
    assert_eq!(context.vowel.map(|s| s.text), some("e"));
    assert_eq!(context.after.map(|s| s.text), some("f"));

    let context = sound_context("fe", &IpaClassifier::new()).expect("single vowel");
    assert_eq!(context.before.map(|s| s.text), some("f"));
    assert!(context.after.is_none());
}

#[test]
fn sound_context_strips_feature_matrices() {
    let context = sound_context("V[- high - long]", &IpaClassifier::new()).expect("single vowel");
    assert_eq!(context.vowel.map(|s| s.text), some("V"));
}

#[test]
fn environment_expansion_examples() {
    // Array of (environment, expected variants, unordered).
    let cases: Vec<(&str, Vec<&str>)> = vec![
        ("_d#", vec!["_d#"]),
        ("_(l)d#", vec!["_d#", "_ld#"]),
        ("(b)_(l)d#", vec!["_d#", "_ld#", "b_d#", "b_ld#"]),
        ("_{l,d}#", vec!["_l#", "_d#"]),
        ("{l,d}_{l,d}#", vec!["l_l#", "l_d#", "d_l#", "d_d#"]),
        ("_{{l,f},d}#", vec!["_l#", "_f#", "_d#"]),
    ];

    for (environment, expected) in cases {
        let mut variants = environment::expand(environment, &Options::default());
        let mut wanted: Vec<String> = expected.into_iter().map(|s| s.to_string()).collect();
        variants.sort();
        wanted.sort();
        assert_eq!(variants, wanted, "wrong variants for environment '{environment}'");
    }
}

#[test]
fn no_vowel_yields_nothing() {
    assert!(extract_vowel_changes(&rule("ts", "s", ""), &IpaClassifier::new()).is_empty());
}

#[test]
fn multiple_vowels_yield_nothing() {
    assert!(extract_vowel_changes(&rule("baːde", "bode", ""), &IpaClassifier::new()).is_empty());
}

#[test]
fn vowel_adjacent_environment_yields_nothing() {
    assert!(extract_vowel_changes(&rule("a", "o", "_u"), &IpaClassifier::new()).is_empty());
}

#[test]
fn sound_resolved_context_needs_no_environment() {
    let records = extract_vowel_changes(&rule("baːd", "bod", ""), &IpaClassifier::new());
    assert_eq!(records.len(), 1);
    assert_eq!(texts(&records[0]), [some("b"), some("aː"), some("o"), some("d")]);
}

#[test]
fn vowel_deletion_has_no_to_vowel() {
    let records = extract_vowel_changes(&rule("baːd", "bd", ""), &IpaClassifier::new());
    assert_eq!(records.len(), 1);
    assert_eq!(texts(&records[0]), [some("b"), some("aː"), None, some("d")]);
}

#[test]
fn environment_fills_the_missing_before() {
    let records = extract_vowel_changes(&rule("aːd", "od", "f_"), &IpaClassifier::new());
    assert_eq!(records.len(), 1);
    assert_eq!(texts(&records[0]), [some("f"), some("aː"), some("o"), some("d")]);
}

#[test]
fn environment_fills_the_missing_after() {
    let records = extract_vowel_changes(&rule("daː", "do", "_f"), &IpaClassifier::new());
    assert_eq!(records.len(), 1);
    assert_eq!(texts(&records[0]), [some("d"), some("aː"), some("o"), some("f")]);
}

#[test]
fn alternating_environment_yields_one_record_per_variant() {
    let records = extract_vowel_changes(&rule("aː", "o", "_{w,v}"), &IpaClassifier::new());
    let produced: Vec<[Option<String>; 4]> = records.iter().map(texts).collect();
    assert_eq!(produced.len(), 2);
    assert!(produced.contains(&[None, some("aː"), some("o"), some("w")]));
    assert!(produced.contains(&[None, some("aː"), some("o"), some("v")]));
}

#[test]
fn abbreviation_codes_extract_like_sounds() {
    let records = extract_vowel_changes(&rule("B", "E", ""), &IpaClassifier::new());
    assert_eq!(records.len(), 1);
    assert_eq!(texts(&records[0]), [None, some("B"), some("E"), None]);
}

#[test]
fn word_boundary_neighbors_count_as_absent() {
    let records = extract_vowel_changes(&rule("a", "i", "#C_"), &IpaClassifier::new());
    assert_eq!(records.len(), 1);
    assert_eq!(texts(&records[0]), [some("C"), some("a"), some("i"), None]);
}

#[test]
fn many_optionals_deduplicate_to_distinct_contexts() {
    let records = extract_vowel_changes(&rule("aː", "oː", "#(C)(C)(C)_(C)(C)(C)"), &IpaClassifier::new());
    let produced: Vec<[Option<String>; 4]> = records.iter().map(texts).collect();
    assert_eq!(produced.len(), 4);
    for wanted in [
        [some("C"), some("aː"), some("oː"), some("C")],
        [None, some("aː"), some("oː"), some("C")],
        [some("C"), some("aː"), some("oː"), None],
        [None, some("aː"), some("oː"), None],
    ] {
        assert!(produced.contains(&wanted), "missing {wanted:?}");
    }
}

#[test]
fn two_placeholders_disqualify_a_variant() {
    assert!(environment::placeholder_context("_d_", &IpaClassifier::new()).is_none());
}

#[test]
fn placeholderless_variant_is_usable_but_empty() {
    let (before, after) = environment::placeholder_context("sporadic", &IpaClassifier::new())
        .expect("no placeholder still yields empty context");
    assert!(before.is_none());
    assert!(after.is_none());
}
