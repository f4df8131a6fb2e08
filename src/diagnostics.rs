//! Diagnostics raised while segmenting and evaluating a text.
//!
//! Nothing in the feature engines is fatal. Every anomaly degrades to a
//! locally recovered value and one [`Diagnostic`] handed to a
//! [`Diagnostics`] collector, which forwards it to `tracing` and keeps it
//! for the caller. A collector belongs to exactly one text.

use serde::Serialize;
use thiserror::Error;

/// A recoverable anomaly, reported once where it is detected
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    #[error("Unable to extract feature '{feature}': unknown feature, skipped")]
    UnknownFeature { feature: String },

    #[error(
        "Cannot compute meta-feature '{feature}': prerequisite '{prerequisite}' was not requested"
    )]
    MissingPrerequisite {
        feature: String,
        prerequisite: String,
    },

    #[error("Malformed markup for phrase '{category}': {reason}")]
    MalformedMarkup { category: String, reason: String },

    #[error("Self-referencing dependency node {position} in sentence {sentence}")]
    SelfReferencingDependency { sentence: usize, position: usize },

    #[error("Dependency cycle through node {position} in sentence {sentence}")]
    DependencyCycle { sentence: usize, position: usize },

    #[error("Node {position} in sentence {sentence} points to missing head {head}")]
    DanglingHead {
        sentence: usize,
        position: usize,
        head: usize,
    },

    #[error("Malformed row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Sentence opened at row {line} was never closed")]
    UnterminatedSentence { line: usize },

    #[error("Sentence end at row {line} without a matching start")]
    UnexpectedSentenceEnd { line: usize },
}

impl Diagnostic {
    /// Stable machine-readable name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownFeature { .. } => "unknown_feature",
            Self::MissingPrerequisite { .. } => "missing_prerequisite",
            Self::MalformedMarkup { .. } => "malformed_markup",
            Self::SelfReferencingDependency { .. } => "self_referencing_dependency",
            Self::DependencyCycle { .. } => "dependency_cycle",
            Self::DanglingHead { .. } => "dangling_head",
            Self::MalformedRow { .. } => "malformed_row",
            Self::UnterminatedSentence { .. } => "unterminated_sentence",
            Self::UnexpectedSentenceEnd { .. } => "unexpected_sentence_end",
        }
    }
}

/// Per-text diagnostic collector.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    text_id: Option<String>,
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_text(text_id: impl Into<String>) -> Self {
        Self {
            text_id: Some(text_id.into()),
            entries: Vec::new(),
        }
    }

    pub fn text_id(&self) -> Option<&str> {
        self.text_id.as_deref()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            text = self.text_id.as_deref().unwrap_or("-"),
            kind = diagnostic.kind(),
            "{}",
            diagnostic
        );
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of diagnostics of the given kind
    pub fn count_kind(&self, kind: &str) -> usize {
        self.entries.iter().filter(|d| d.kind() == kind).count()
    }

    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}
