//! The tagged feature catalog.
//!
//! Every feature the engine knows is one [`FeatureDescriptor`]: its name,
//! its kind, the names it depends on and how to compute it. Dispatch is a
//! lookup in this table, never a chain of string comparisons.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::core::errors::FeatureResult;
use crate::core::FeatureValue;
use crate::metrics::spectrum::ratio;

use super::registry::Evaluation;
use super::{lexical, meta, phrase, syntax};

/// Which data a feature is computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Words and sentences of the chunk table
    Lexical,
    /// Dependency rows
    Syntax,
    /// Phrase bracket markup
    Phrase,
    /// Formula over other features' results
    Meta,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 4] = [Self::Lexical, Self::Syntax, Self::Phrase, Self::Meta];

    pub fn is_primitive(self) -> bool {
        !matches!(self, Self::Meta)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Syntax => "syntax",
            Self::Phrase => "phrase",
            Self::Meta => "meta",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub type ScalarFn = Box<dyn Fn(&mut Evaluation<'_>) -> FeatureResult<f64> + Send + Sync>;
pub type ExpandFn =
    Box<dyn Fn(&mut Evaluation<'_>) -> Vec<(String, FeatureResult<f64>)> + Send + Sync>;

/// `(Σ numerators) / denominator`, looked up by name in earlier results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaFormula {
    pub numerators: Vec<String>,
    pub denominator: String,
}

impl MetaFormula {
    pub fn new(numerators: &[&str], denominator: &str) -> Self {
        Self {
            numerators: numerators.iter().map(|n| n.to_string()).collect(),
            denominator: denominator.to_string(),
        }
    }

    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.numerators
            .iter()
            .chain(std::iter::once(&self.denominator))
            .map(String::as_str)
    }

    /// Any prerequisite holding a sentinel makes the result `Missing`
    pub fn evaluate<F>(&self, lookup: F) -> FeatureValue
    where
        F: Fn(&str) -> Option<FeatureValue>,
    {
        let mut sum = 0.0;
        for name in &self.numerators {
            match lookup(name) {
                Some(FeatureValue::Number(value)) => sum += value,
                _ => return FeatureValue::Missing,
            }
        }
        match lookup(&self.denominator) {
            Some(FeatureValue::Number(denominator)) => ratio(sum, denominator).into(),
            _ => FeatureValue::Missing,
        }
    }
}

pub enum Compute {
    /// One value under the feature's own name
    Scalar(ScalarFn),
    /// Several values under derived names (`FreqT` → `Freq001`, ...)
    Expanded(ExpandFn),
    /// Second-pass formula over already computed results
    Formula(MetaFormula),
}

pub struct FeatureDescriptor {
    pub name: String,
    pub kind: FeatureKind,
    pub dependencies: Vec<String>,
    pub compute: Compute,
}

impl fmt::Debug for FeatureDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compute = match self.compute {
            Compute::Scalar(_) => "scalar",
            Compute::Expanded(_) => "expanded",
            Compute::Formula(_) => "formula",
        };
        f.debug_struct("FeatureDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("dependencies", &self.dependencies)
            .field("compute", &compute)
            .finish()
    }
}

static STANDARD: Lazy<FeatureCatalog> = Lazy::new(|| {
    let mut catalog = FeatureCatalog::new();
    lexical::register(&mut catalog);
    syntax::register(&mut catalog);
    phrase::register(&mut catalog);
    meta::register(&mut catalog);
    catalog
});

/// Feature descriptors in registration order, indexed by name
#[derive(Debug, Default)]
pub struct FeatureCatalog {
    descriptors: Vec<FeatureDescriptor>,
    index: HashMap<String, usize>,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

impl FeatureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every feature of the readability catalog
    pub fn standard() -> &'static FeatureCatalog {
        &STANDARD
    }

    /// Add a descriptor, replacing any previous one of the same name
    pub fn register(&mut self, descriptor: FeatureDescriptor) {
        match self.index.get(&descriptor.name) {
            Some(&slot) => self.descriptors[slot] = descriptor,
            None => {
                self.index
                    .insert(descriptor.name.clone(), self.descriptors.len());
                self.descriptors.push(descriptor);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FeatureDescriptor> {
        self.index.get(name).map(|&slot| &self.descriptors[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureDescriptor> {
        self.descriptors.iter()
    }

    pub fn of_kind(&self, kind: FeatureKind) -> impl Iterator<Item = &FeatureDescriptor> {
        self.descriptors.iter().filter(move |d| d.kind == kind)
    }

    pub fn scalar<F>(&mut self, name: impl Into<String>, kind: FeatureKind, dependencies: &[&str], compute: F)
    where
        F: Fn(&mut Evaluation<'_>) -> FeatureResult<f64> + Send + Sync + 'static,
    {
        self.register(FeatureDescriptor {
            name: name.into(),
            kind,
            dependencies: owned(dependencies),
            compute: Compute::Scalar(Box::new(compute)),
        });
    }

    /// A plain count, never failing
    pub fn count<F>(&mut self, name: impl Into<String>, kind: FeatureKind, count: F)
    where
        F: Fn(&mut Evaluation<'_>) -> usize + Send + Sync + 'static,
    {
        self.scalar(name, kind, &[], move |evaluation| Ok(count(evaluation) as f64));
    }

    /// `(Σ numerators) / denominator` over other features of this pass
    pub fn ratio(
        &mut self,
        name: impl Into<String>,
        kind: FeatureKind,
        numerators: &[&str],
        denominator: &str,
    ) {
        let terms = owned(numerators);
        let divisor = denominator.to_string();
        let mut dependencies = numerators.to_vec();
        dependencies.push(denominator);

        self.scalar(name, kind, &dependencies, move |evaluation| {
            let mut sum = 0.0;
            for term in &terms {
                sum += evaluation.value(term)?;
            }
            ratio(sum, evaluation.value(&divisor)?)
        });
    }

    pub fn expanded<F>(&mut self, name: impl Into<String>, kind: FeatureKind, dependencies: &[&str], expand: F)
    where
        F: Fn(&mut Evaluation<'_>) -> Vec<(String, FeatureResult<f64>)> + Send + Sync + 'static,
    {
        self.register(FeatureDescriptor {
            name: name.into(),
            kind,
            dependencies: owned(dependencies),
            compute: Compute::Expanded(Box::new(expand)),
        });
    }

    pub fn formula(&mut self, name: impl Into<String>, numerators: &[&str], denominator: &str) {
        let formula = MetaFormula::new(numerators, denominator);
        self.register(FeatureDescriptor {
            name: name.into(),
            kind: FeatureKind::Meta,
            dependencies: formula.dependencies().map(str::to_string).collect(),
            compute: Compute::Formula(formula),
        });
    }
}
