//! Feature catalog and evaluation.
//!
//! [`catalog`] holds one descriptor per feature name; [`registry`] evaluates
//! requested primitive features over one text with a per-text memo cache;
//! [`meta`] resolves second-pass formulas over those results.

pub mod catalog;
mod lexical;
pub mod meta;
mod phrase;
pub mod registry;
mod syntax;
pub mod tags;

pub use catalog::{Compute, FeatureCatalog, FeatureDescriptor, FeatureKind, MetaFormula};
pub use meta::resolve_meta;
pub use registry::{
    Evaluation, EvaluationSettings, EvaluationStats, FeatureRegistry,
    DEFAULT_TYPE_FREQUENCY_BUCKETS,
};
