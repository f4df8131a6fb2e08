//! Corpus extraction: load every text, evaluate it, collect the results.
//!
//! Texts are independent, so they are processed in parallel with rayon.
//! Each text gets its own evaluation pass and its own diagnostics; a text
//! that cannot be read is recorded as a [`TextFailure`] and the rest of the
//! corpus carries on.

use indicatif::ParallelProgressIterator;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, info_span, warn};

use crate::core::errors::Result;
use crate::core::FeatureMap;
use crate::corpus::{
    default_word_categories, discover_text_ids, load_text, CorpusLayout, RawText, TextData,
};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::features::FeatureRegistry;
use crate::progress::{ProgressConfig, TEMPLATE_TEXTS};

/// Which features to compute and what counts as a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRequest {
    /// Evaluated in the first pass, in this order
    pub primitive: Vec<String>,
    /// Resolved in the second pass against the primitive results
    pub meta: Vec<String>,
    pub word_categories: Vec<String>,
}

impl FeatureRequest {
    pub fn new(primitive: Vec<String>, meta: Vec<String>) -> Self {
        Self {
            primitive,
            meta,
            word_categories: default_word_categories(),
        }
    }

    pub fn with_word_categories(mut self, categories: Vec<String>) -> Self {
        self.word_categories = categories;
        self
    }
}

/// Features and diagnostics of one text
#[derive(Debug, Clone, Serialize)]
pub struct TextResult {
    pub text_id: String,
    pub features: FeatureMap,
    pub diagnostics: Vec<Diagnostic>,
}

/// A text that could not be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextFailure {
    pub text_id: String,
    pub error: String,
}

/// Everything produced for a corpus, ordered by text id
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorpusResults {
    pub texts: Vec<TextResult>,
    pub failures: Vec<TextFailure>,
}

impl CorpusResults {
    /// Feature names in first-seen order across all texts
    pub fn feature_names(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut names = Vec::new();
        for text in &self.texts {
            for name in text.features.names() {
                if seen.insert(name) {
                    names.push(name.to_string());
                }
            }
        }
        names
    }

    pub fn diagnostic_count(&self) -> usize {
        self.texts.iter().map(|t| t.diagnostics.len()).sum()
    }
}

/// Evaluate one already loaded text; performs no I/O
pub fn extract_text(
    registry: &FeatureRegistry<'_>,
    request: &FeatureRequest,
    raw: &RawText,
) -> TextResult {
    let mut diagnostics = Diagnostics::for_text(raw.id.as_str());
    let text = TextData::from_rows(
        &raw.chunk_rows,
        &raw.conll_rows,
        &request.word_categories,
        &mut diagnostics,
    );
    let features =
        registry.evaluate_text(&request.primitive, &request.meta, &text, &mut diagnostics);

    TextResult {
        text_id: raw.id.clone(),
        features,
        diagnostics: diagnostics.into_entries(),
    }
}

/// Extract features for every text of a corpus directory
pub struct CorpusExtractor<'r> {
    registry: FeatureRegistry<'r>,
    request: FeatureRequest,
    progress: ProgressConfig,
}

impl<'r> CorpusExtractor<'r> {
    pub fn new(registry: FeatureRegistry<'r>, request: FeatureRequest) -> Self {
        Self {
            registry,
            request,
            progress: ProgressConfig::quiet(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressConfig) -> Self {
        self.progress = progress;
        self
    }

    pub fn request(&self) -> &FeatureRequest {
        &self.request
    }

    /// Fails only when the corpus itself cannot be listed or is empty
    pub fn run(&self, layout: &CorpusLayout) -> Result<CorpusResults> {
        let span = info_span!("extract_corpus", corpus = %layout.dir.display());
        let _guard = span.enter();

        let text_ids = discover_text_ids(layout)?;
        info!(texts = text_ids.len(), "Extracting features");

        let bar = self
            .progress
            .create_bar(text_ids.len() as u64, TEMPLATE_TEXTS);
        bar.set_message("Extracting features");

        let outcomes: Vec<std::result::Result<TextResult, TextFailure>> = text_ids
            .par_iter()
            .progress_with(bar.clone())
            .map(|text_id| self.process(layout, text_id))
            .collect();
        bar.finish_and_clear();

        let mut results = CorpusResults::default();
        for outcome in outcomes {
            match outcome {
                Ok(text) => results.texts.push(text),
                Err(failure) => results.failures.push(failure),
            }
        }
        results.texts.sort_by(|a, b| a.text_id.cmp(&b.text_id));

        info!(
            texts = results.texts.len(),
            failures = results.failures.len(),
            diagnostics = results.diagnostic_count(),
            "Extraction finished"
        );
        Ok(results)
    }

    fn process(
        &self,
        layout: &CorpusLayout,
        text_id: &str,
    ) -> std::result::Result<TextResult, TextFailure> {
        let _span = info_span!("text", id = text_id).entered();

        match load_text(layout, text_id) {
            Ok(raw) => Ok(extract_text(&self.registry, &self.request, &raw)),
            Err(e) => {
                warn!(text = text_id, error = %e, "Skipping text");
                Err(TextFailure {
                    text_id: text_id.to_string(),
                    error: e.to_string(),
                })
            }
        }
    }
}
