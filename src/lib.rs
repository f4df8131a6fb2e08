//! Readability feature extraction over annotated text corpora.
//!
//! Texts arrive as tabbed token rows with phrase markup and as CoNLL
//! dependency rows. [`features::FeatureRegistry`] evaluates the requested
//! primitive features for one text and resolves meta-features over them;
//! [`pipeline::CorpusExtractor`] does that for every text of a corpus in
//! parallel.

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod corpus;
pub mod diagnostics;
pub mod features;
pub mod io;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod progress;

// Re-export commonly used types
pub use crate::core::{
    Error, FeatureError, FeatureMap, FeatureResult, FeatureValue, Result, Sentence, Token,
};

pub use crate::corpus::{CorpusLayout, TextData};

pub use crate::diagnostics::{Diagnostic, Diagnostics};

pub use crate::features::{
    EvaluationSettings, FeatureCatalog, FeatureKind, FeatureRegistry,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::pipeline::{CorpusExtractor, CorpusResults, FeatureRequest, TextResult};
