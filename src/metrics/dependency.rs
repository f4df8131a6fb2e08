//! Dependency tree metrics over flat `(position, head)` tables.
//!
//! A sentence's tree is implicit in its rows: every row points at its head
//! by sentence-local position, 0 being the root. Nothing here assumes the
//! table is well formed. Self-references, cycles and heads pointing outside
//! the sentence end the walk with depth 0 and a diagnostic.

use std::collections::{HashMap, HashSet};

use crate::core::DependencyRow;
use crate::diagnostics::{Diagnostic, Diagnostics};

/// Distinct head positions referenced in the sentence, root excluded
pub fn heads_count(sentence: &[DependencyRow]) -> usize {
    sentence
        .iter()
        .filter(|row| !row.is_root_attached())
        .map(|row| row.head)
        .collect::<HashSet<_>>()
        .len()
}

/// Rows whose position is never used as a head
pub fn leaves(sentence: &[DependencyRow]) -> Vec<&DependencyRow> {
    let heads: HashSet<usize> = sentence.iter().map(|row| row.head).collect();
    sentence
        .iter()
        .filter(|row| !heads.contains(&row.position))
        .collect()
}

/// Hops from `node` up to the root, the root attachment counting as 1.
///
/// `sentence_index` only labels diagnostics. The walk visits each position
/// at most once, so the result never exceeds the number of rows.
pub fn node_depth(
    node: &DependencyRow,
    sentence: &[DependencyRow],
    sentence_index: usize,
    diagnostics: &mut Diagnostics,
) -> usize {
    let heads: HashMap<usize, usize> = sentence.iter().map(|row| (row.position, row.head)).collect();
    walk_to_root(node, &heads, sentence_index, diagnostics)
}

fn walk_to_root(
    node: &DependencyRow,
    heads: &HashMap<usize, usize>,
    sentence_index: usize,
    diagnostics: &mut Diagnostics,
) -> usize {
    let mut visited = HashSet::new();
    let mut current = node.position;
    let mut head = node.head;
    let mut depth = 0;

    loop {
        if head == 0 {
            return depth + 1;
        }
        if head == current {
            diagnostics.report(Diagnostic::SelfReferencingDependency {
                sentence: sentence_index,
                position: current,
            });
            return 0;
        }
        if !visited.insert(current) {
            diagnostics.report(Diagnostic::DependencyCycle {
                sentence: sentence_index,
                position: current,
            });
            return 0;
        }
        match heads.get(&head) {
            Some(&next) => {
                depth += 1;
                current = head;
                head = next;
            }
            None => {
                diagnostics.report(Diagnostic::DanglingHead {
                    sentence: sentence_index,
                    position: current,
                    head,
                });
                return 0;
            }
        }
    }
}

/// Deepest leaf-to-root path; 0 for an empty sentence
pub fn tree_depth(
    sentence: &[DependencyRow],
    sentence_index: usize,
    diagnostics: &mut Diagnostics,
) -> usize {
    let heads: HashMap<usize, usize> = sentence.iter().map(|row| (row.position, row.head)).collect();
    leaves(sentence)
        .into_iter()
        .map(|leaf| walk_to_root(leaf, &heads, sentence_index, diagnostics))
        .max()
        .unwrap_or(0)
}

/// Largest number of rows sharing one head position
pub fn width(sentence: &[DependencyRow]) -> usize {
    let mut out_degree: HashMap<usize, usize> = HashMap::new();
    for row in sentence {
        *out_degree.entry(row.head).or_insert(0) += 1;
    }
    out_degree.into_values().max().unwrap_or(0)
}

/// Mean `|position - head|` over the rows; 0 for no rows
pub fn dependency_distance(rows: &[DependencyRow]) -> f64 {
    mean(rows.iter().map(DependencyRow::distance))
}

/// Arithmetic mean, 0 for an empty sequence
pub fn mean<I: IntoIterator<Item = usize>>(values: I) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0usize, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Corpus-level tree statistics, each a sum or a mean over sentences.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TreeSummary {
    pub trees: usize,
    pub heads_sum: usize,
    pub heads_avg: f64,
    pub leaves_sum: usize,
    pub leaves_avg: f64,
    pub depth_avg: f64,
    pub width_avg: f64,
}

impl TreeSummary {
    pub fn from_sentences(sentences: &[Vec<DependencyRow>], diagnostics: &mut Diagnostics) -> Self {
        let heads: Vec<usize> = sentences.iter().map(|s| heads_count(s)).collect();
        let leaf_counts: Vec<usize> = sentences.iter().map(|s| leaves(s).len()).collect();
        let depths: Vec<usize> = sentences
            .iter()
            .enumerate()
            .map(|(index, s)| tree_depth(s, index + 1, diagnostics))
            .collect();

        Self {
            trees: sentences.len(),
            heads_sum: heads.iter().sum(),
            heads_avg: mean(heads.iter().copied()),
            leaves_sum: leaf_counts.iter().sum(),
            leaves_avg: mean(leaf_counts.iter().copied()),
            depth_avg: mean(depths),
            width_avg: mean(sentences.iter().map(|s| width(s))),
        }
    }
}
