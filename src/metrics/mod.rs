//! Metrics calculation module
//!
//! The three engines the feature catalog is built on: the frequency
//! spectrum, dependency tree metrics and the phrase bracket parser.

pub mod dependency;
pub mod phrase;
pub mod spectrum;

pub use dependency::{
    dependency_distance, heads_count, leaves, mean, node_depth, tree_depth, width, TreeSummary,
};
pub use phrase::{mean_phrase_length, phrase_count, phrase_lengths};
pub use spectrum::{
    diversity_d, frequency_distribution, frequency_spectrum, ratio, relative_entropy,
    shannon_entropy, type_frequency_table, type_token_ratio, yule_k,
};
