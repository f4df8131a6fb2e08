//! End-to-end evaluation of one text through both passes.

mod common;

use common::{cat_sat_text, rows};
use featext::core::{FeatureMap, FeatureValue};
use featext::{Diagnostic, Diagnostics, EvaluationSettings, FeatureRegistry, TextData};
use pretty_assertions::assert_eq;

fn number(features: &FeatureMap, name: &str) -> f64 {
    features
        .get(name)
        .and_then(|v| v.as_number())
        .unwrap_or_else(|| panic!("{name} has no numeric value"))
}

#[test]
fn test_cat_sat_scenario() {
    let registry = FeatureRegistry::default();
    let mut diagnostics = Diagnostics::new();
    let features = registry.evaluate_text(
        &["N", "S", "Noun", "Verb"],
        &["m_SbToS"],
        &cat_sat_text(),
        &mut diagnostics,
    );

    assert_eq!(number(&features, "N"), 3.0);
    assert_eq!(number(&features, "S"), 1.0);
    assert_eq!(number(&features, "Noun"), 1.0);
    assert_eq!(number(&features, "Verb"), 1.0);

    let with_ratio = registry.evaluate(
        &["N", "S", "Noun", "Verb", "m_NounToVerb"],
        &cat_sat_text(),
        &mut Diagnostics::new(),
    );
    assert_eq!(
        with_ratio.names().collect::<Vec<_>>(),
        vec!["N", "S", "Noun", "Verb", "m_NounToVerb"]
    );
    assert_eq!(number(&with_ratio, "m_NounToVerb"), 1.0);
}

#[test]
fn test_shared_dependency_is_computed_once() {
    let registry = FeatureRegistry::default();
    let mut diagnostics = Diagnostics::new();
    let (features, stats) = registry.evaluate_with_stats(
        &["Noun", "m_NounToVerb", "m_NounToN", "Noun"],
        &cat_sat_text(),
        &mut diagnostics,
    );

    assert_eq!(number(&features, "Noun"), 1.0);
    assert_eq!(number(&features, "m_NounToN"), 1.0 / 3.0);
    assert_eq!(stats.computations("Noun"), 1);
    assert!(stats.cache_hits >= 3);
}

#[test]
fn test_memo_cache_is_per_text() {
    let registry = FeatureRegistry::default();
    let empty = TextData::default();

    let first = registry.evaluate(&["N"], &cat_sat_text(), &mut Diagnostics::new());
    let second = registry.evaluate(&["N"], &empty, &mut Diagnostics::new());

    assert_eq!(number(&first, "N"), 3.0);
    assert_eq!(number(&second, "N"), 0.0);
}

#[test]
fn test_unknown_feature_is_reported_and_skipped() {
    let registry = FeatureRegistry::default();
    let mut diagnostics = Diagnostics::new();
    let features = registry.evaluate(&["N", "Nouns", "S"], &cat_sat_text(), &mut diagnostics);

    assert_eq!(features.names().collect::<Vec<_>>(), vec!["N", "S"]);
    assert_eq!(
        diagnostics.entries(),
        &[Diagnostic::UnknownFeature {
            feature: "Nouns".to_string()
        }]
    );
}

#[test]
fn test_zero_denominator_gives_sentinel() {
    let registry = FeatureRegistry::default();
    let mut diagnostics = Diagnostics::new();
    let features = registry.evaluate(
        &["m_TTR", "m_AdjToNoun", "m_ASL", "N"],
        &TextData::default(),
        &mut diagnostics,
    );

    assert_eq!(features.get("m_TTR"), Some(FeatureValue::DivisionByZero));
    assert_eq!(features.get("m_AdjToNoun"), Some(FeatureValue::DivisionByZero));
    assert_eq!(features.get("m_ASL"), Some(FeatureValue::DivisionByZero));
    assert_eq!(features.get("N"), Some(FeatureValue::Number(0.0)));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_frequency_table_size_follows_settings() {
    let registry = FeatureRegistry::new(EvaluationSettings {
        type_frequency_buckets: 4,
        ..EvaluationSettings::default()
    });
    let features = registry.evaluate(&["FreqT"], &cat_sat_text(), &mut Diagnostics::new());

    assert_eq!(
        features.names().collect::<Vec<_>>(),
        vec!["Freq001", "Freq002", "Freq003", "Freq004"]
    );
    assert_eq!(number(&features, "Freq001"), 3.0);
    assert_eq!(number(&features, "Freq002"), 0.0);
}

#[test]
fn test_function_words_are_counted_from_settings() {
    let registry = FeatureRegistry::new(EvaluationSettings {
        functional_words: vec!["the".to_string(), "a".to_string()],
        ..EvaluationSettings::default()
    });
    let features = registry.evaluate(
        &["FuncT", "Nlex", "m_Density2"],
        &cat_sat_text(),
        &mut Diagnostics::new(),
    );

    assert_eq!(number(&features, "FuncT"), 1.0);
    assert_eq!(number(&features, "Nlex"), 2.0);
    assert_eq!(number(&features, "m_Density2"), 2.0 / 3.0);
}

#[test]
fn test_tree_scenario_through_registry() {
    let text = TextData::default().with_dependency_rows(rows(&[(1, 2), (2, 0), (3, 2)]));
    let registry = FeatureRegistry::default();
    let mut diagnostics = Diagnostics::new();
    let features = registry.evaluate(
        &["Trees", "HeadsSum", "LeavesSum", "DepHeight", "DepWidth"],
        &text,
        &mut diagnostics,
    );

    assert_eq!(number(&features, "Trees"), 1.0);
    assert_eq!(number(&features, "HeadsSum"), 1.0);
    assert_eq!(number(&features, "LeavesSum"), 2.0);
    assert_eq!(number(&features, "DepHeight"), 2.0);
    assert_eq!(number(&features, "DepWidth"), 2.0);
    assert!(diagnostics.is_empty());
}
