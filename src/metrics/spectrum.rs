//! Frequency spectrum and lexical diversity measures.
//!
//! Every measure here is a pure function of a label sequence. The
//! spectrum (frequency-of-frequencies) is built in two passes: label to
//! count, then count to number-of-labels-with-that-count.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::core::errors::{FeatureError, FeatureResult};

/// Count occurrences of each distinct label
pub fn frequency_distribution<L, I>(labels: I) -> HashMap<L, usize>
where
    L: Hash + Eq,
    I: IntoIterator<Item = L>,
{
    let mut counts = HashMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}

/// Map each observed frequency `f` to the number of distinct labels
/// occurring exactly `f` times. Empty input gives an empty spectrum.
pub fn frequency_spectrum<L, I>(labels: I) -> BTreeMap<usize, usize>
where
    L: Hash + Eq,
    I: IntoIterator<Item = L>,
{
    let mut spectrum = BTreeMap::new();
    for count in frequency_distribution(labels).into_values() {
        *spectrum.entry(count).or_insert(0) += 1;
    }
    spectrum
}

/// The `n` lowest spectrum buckets, `1..=n`, missing buckets as 0.
///
/// Index 0 holds the hapax legomena count, index 1 the dis legomena.
pub fn type_frequency_table<L: Hash + Eq>(types: &[L], n: usize) -> Vec<usize> {
    let spectrum = frequency_spectrum(types.iter());
    (1..=n)
        .map(|bucket| spectrum.get(&bucket).copied().unwrap_or(0))
        .collect()
}

/// Name of the `FreqT` entry for a spectrum bucket (`Freq001`, ...)
pub fn bucket_name(bucket: usize) -> String {
    format!("Freq{:03}", bucket)
}

/// Divide, reporting a zero denominator instead of producing inf/NaN
pub fn ratio(numerator: f64, denominator: f64) -> FeatureResult<f64> {
    if denominator == 0.0 {
        Err(FeatureError::DivisionByZero)
    } else {
        Ok(numerator / denominator)
    }
}

/// Distinct types over tokens
pub fn type_token_ratio(types: usize, tokens: usize) -> FeatureResult<f64> {
    ratio(types as f64, tokens as f64)
}

/// Yule's characteristic K: `10000 * (Σ spectrum[f]·f² − N) / N²`
///
/// An empty type list gives `DivisionByZero` rather than 0.
pub fn yule_k<L: Hash + Eq>(types: &[L]) -> FeatureResult<f64> {
    let n = types.len() as f64;
    let sum: f64 = frequency_spectrum(types.iter())
        .iter()
        .map(|(&freq, &count)| (count * freq * freq) as f64)
        .sum();
    ratio(10000.0 * (sum - n), n * n)
}

/// Shannon entropy in bits over the type list; 0 for empty input
pub fn shannon_entropy<L: Hash + Eq>(types: &[L]) -> f64 {
    if types.is_empty() {
        return 0.0;
    }

    let total = types.len() as f64;
    frequency_distribution(types.iter())
        .values()
        .map(|&count| {
            let probability = count as f64 / total;
            -probability * probability.log2()
        })
        .sum()
}

/// Entropy normalized by its maximum, `-log2(1/|types|)`.
///
/// With one token or none the maximum is zero.
pub fn relative_entropy<L: Hash + Eq>(types: &[L]) -> FeatureResult<f64> {
    if types.is_empty() {
        return Err(FeatureError::DivisionByZero);
    }
    let max_entropy = -(1.0 / types.len() as f64).log2();
    ratio(shannon_entropy(types), max_entropy)
}

/// Lexical diversity D (Durán, Malvern, Richards & Chipere 2004).
///
/// Solves `d/n · (sqrt(1 + 2n/d) − 1) = TTR` for `d > 0`. The left side
/// rises monotonically from 0 to 1 as `d` grows, so a root exists only for
/// `0 < TTR < 1`; its closed form is `d = TTR²·n / (2·(1 − TTR))`.
pub fn diversity_d(tokens: usize, types: usize) -> FeatureResult<f64> {
    let ttr = type_token_ratio(types, tokens)?;
    if !(ttr > 0.0 && ttr < 1.0) {
        return Err(FeatureError::undefined(format!(
            "no positive D for type-token ratio {}",
            ttr
        )));
    }

    let n = tokens as f64;
    let d = ttr * ttr * n / (2.0 * (1.0 - ttr));

    let residual = d_curve(d, n) - ttr;
    if residual.abs() > 1e-6 {
        return Err(FeatureError::undefined(format!(
            "D root does not satisfy the curve (residual {})",
            residual
        )));
    }
    Ok(d)
}

/// Expected type-token ratio for a given `d` over `n` tokens
fn d_curve(d: f64, n: f64) -> f64 {
    d / n * ((1.0 + 2.0 * n / d).sqrt() - 1.0)
}
