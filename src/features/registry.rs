//! Per-text feature evaluation.
//!
//! A [`FeatureRegistry`] is shared read-only across texts. Each call to
//! [`FeatureRegistry::evaluate`] opens a fresh [`Evaluation`] holding the
//! memo cache for that one text, so nothing computed for one text is ever
//! visible while evaluating another.

use std::collections::HashMap;

use crate::core::errors::{FeatureError, FeatureResult};
use crate::core::FeatureMap;
use crate::corpus::TextData;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::metrics::dependency::TreeSummary;
use crate::metrics::phrase;
use crate::metrics::spectrum::type_frequency_table;

use super::catalog::{Compute, FeatureCatalog};
use super::meta;

pub const DEFAULT_TYPE_FREQUENCY_BUCKETS: usize = 30;

/// Inputs to the evaluation that do not come from the text itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationSettings {
    /// Words counted by `FuncT`
    pub functional_words: Vec<String>,
    /// Number of spectrum buckets `FreqT` expands into
    pub type_frequency_buckets: usize,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            functional_words: Vec::new(),
            type_frequency_buckets: DEFAULT_TYPE_FREQUENCY_BUCKETS,
        }
    }
}

/// Memo cache counters of one evaluation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationStats {
    pub cache_hits: usize,
    pub cache_misses: usize,
    computations: HashMap<String, usize>,
}

impl EvaluationStats {
    /// Times the compute function of `name` actually ran
    pub fn computations(&self, name: &str) -> usize {
        self.computations.get(name).copied().unwrap_or(0)
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total > 0 {
            self.cache_hits as f64 / total as f64
        } else {
            0.0
        }
    }

    fn record_computation(&mut self, name: &str) {
        *self.computations.entry(name.to_string()).or_insert(0) += 1;
    }
}

/// State of one evaluation pass over one text
pub struct Evaluation<'a> {
    catalog: &'a FeatureCatalog,
    text: &'a TextData,
    settings: &'a EvaluationSettings,
    diagnostics: &'a mut Diagnostics,
    word_types: Vec<&'a str>,
    memo: HashMap<String, FeatureResult<f64>>,
    frequency_table: Option<Vec<usize>>,
    tree_summary: Option<TreeSummary>,
    phrase_lengths: HashMap<String, Vec<usize>>,
    stats: EvaluationStats,
}

impl<'a> Evaluation<'a> {
    pub fn new(
        catalog: &'a FeatureCatalog,
        text: &'a TextData,
        settings: &'a EvaluationSettings,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        Self {
            catalog,
            text,
            settings,
            diagnostics,
            word_types: text.words().map(|t| t.word_type.as_str()).collect(),
            memo: HashMap::new(),
            frequency_table: None,
            tree_summary: None,
            phrase_lengths: HashMap::new(),
            stats: EvaluationStats::default(),
        }
    }

    pub fn text(&self) -> &'a TextData {
        self.text
    }

    pub fn settings(&self) -> &'a EvaluationSettings {
        self.settings
    }

    /// Case-normalized word forms in document order
    pub fn word_types(&self) -> &[&'a str] {
        &self.word_types
    }

    pub fn stats(&self) -> &EvaluationStats {
        &self.stats
    }

    /// Value of a scalar feature, computed at most once per pass
    pub fn value(&mut self, name: &str) -> FeatureResult<f64> {
        if let Some(cached) = self.memo.get(name) {
            self.stats.cache_hits += 1;
            return cached.clone();
        }
        self.stats.cache_misses += 1;

        let catalog = self.catalog;
        let result = match catalog.get(name).map(|d| &d.compute) {
            Some(Compute::Scalar(compute)) => {
                self.stats.record_computation(name);
                compute(self)
            }
            Some(_) => Err(FeatureError::undefined(format!(
                "'{}' has no single value",
                name
            ))),
            None => Err(FeatureError::undefined(format!("unknown feature '{}'", name))),
        };

        self.memo.insert(name.to_string(), result.clone());
        result
    }

    /// Spectrum buckets `1..=max(buckets, 2)` of the word types
    pub fn frequency_table(&mut self) -> &[usize] {
        if self.frequency_table.is_none() {
            let buckets = self.settings.type_frequency_buckets.max(2);
            self.frequency_table = Some(type_frequency_table(&self.word_types, buckets));
        }
        self.frequency_table.as_deref().unwrap_or(&[])
    }

    pub fn tree_summary(&mut self) -> TreeSummary {
        if let Some(summary) = self.tree_summary {
            return summary;
        }
        let text = self.text;
        let summary = TreeSummary::from_sentences(&text.dependency_sentences, self.diagnostics);
        self.tree_summary = Some(summary);
        summary
    }

    /// Lengths of completed phrases of one markup category
    pub fn phrase_lengths(&mut self, category: &str) -> &[usize] {
        if !self.phrase_lengths.contains_key(category) {
            let text = self.text;
            let lengths = phrase::phrase_lengths(&text.phrase_events, category, self.diagnostics);
            self.phrase_lengths.insert(category.to_string(), lengths);
        }
        self.phrase_lengths
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn into_stats(self) -> EvaluationStats {
        self.stats
    }
}

/// Evaluates requested features against the catalog
#[derive(Debug)]
pub struct FeatureRegistry<'c> {
    catalog: &'c FeatureCatalog,
    settings: EvaluationSettings,
}

impl FeatureRegistry<'static> {
    pub fn new(settings: EvaluationSettings) -> Self {
        Self::with_catalog(FeatureCatalog::standard(), settings)
    }
}

impl Default for FeatureRegistry<'static> {
    fn default() -> Self {
        Self::new(EvaluationSettings::default())
    }
}

impl<'c> FeatureRegistry<'c> {
    pub fn with_catalog(catalog: &'c FeatureCatalog, settings: EvaluationSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn catalog(&self) -> &'c FeatureCatalog {
        self.catalog
    }

    pub fn settings(&self) -> &EvaluationSettings {
        &self.settings
    }

    /// Evaluate primitive features in request order.
    ///
    /// Unknown names are reported and left out. Failures become sentinels.
    /// Dependencies computed along the way are only in the result when they
    /// were requested themselves.
    pub fn evaluate<S: AsRef<str>>(
        &self,
        names: &[S],
        text: &TextData,
        diagnostics: &mut Diagnostics,
    ) -> FeatureMap {
        self.evaluate_with_stats(names, text, diagnostics).0
    }

    /// [`evaluate`](Self::evaluate), also returning the memo cache counters
    pub fn evaluate_with_stats<S: AsRef<str>>(
        &self,
        names: &[S],
        text: &TextData,
        diagnostics: &mut Diagnostics,
    ) -> (FeatureMap, EvaluationStats) {
        let mut features = FeatureMap::new();
        let mut evaluation = Evaluation::new(self.catalog, text, &self.settings, diagnostics);

        for name in names {
            let name = name.as_ref();
            match self.catalog.get(name) {
                Some(descriptor) if descriptor.kind.is_primitive() => match &descriptor.compute {
                    Compute::Scalar(_) => features.insert(name, evaluation.value(name)),
                    Compute::Expanded(expand) => {
                        evaluation.stats.record_computation(name);
                        for (entry, value) in expand(&mut evaluation) {
                            features.insert(entry, value);
                        }
                    }
                    Compute::Formula(_) => {}
                },
                _ => evaluation.diagnostics.report(Diagnostic::UnknownFeature {
                    feature: name.to_string(),
                }),
            }
        }

        (features, evaluation.into_stats())
    }

    /// Second pass: meta-features over the primitive results of one text
    pub fn resolve_meta<S: AsRef<str>>(
        &self,
        names: &[S],
        primitives: &FeatureMap,
        diagnostics: &mut Diagnostics,
    ) -> FeatureMap {
        meta::resolve_meta(self.catalog, names, primitives, diagnostics)
    }

    /// Both passes, primitive entries first
    pub fn evaluate_text<P, M>(
        &self,
        primitive_names: &[P],
        meta_names: &[M],
        text: &TextData,
        diagnostics: &mut Diagnostics,
    ) -> FeatureMap
    where
        P: AsRef<str>,
        M: AsRef<str>,
    {
        let mut features = self.evaluate(primitive_names, text, diagnostics);
        let meta = self.resolve_meta(meta_names, &features, diagnostics);
        features.merge(meta);
        features
    }
}
