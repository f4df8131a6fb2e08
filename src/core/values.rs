//! Feature values and the ordered per-text feature mapping.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use super::errors::FeatureError;

/// Text written for a ratio whose denominator was zero
pub const DIVISION_BY_ZERO_TEXT: &str = "Div/0!";
/// Text written for a value that could not be determined
pub const MISSING_TEXT: &str = "Missing!";

/// Result of evaluating one feature for one text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Number(f64),
    DivisionByZero,
    Missing,
}

impl FeatureValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<usize> for FeatureValue {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<Result<f64, FeatureError>> for FeatureValue {
    fn from(result: Result<f64, FeatureError>) -> Self {
        match result {
            Ok(value) => Self::Number(value),
            Err(FeatureError::DivisionByZero) => Self::DivisionByZero,
            Err(FeatureError::Undefined { .. }) => Self::Missing,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::DivisionByZero => f.write_str(DIVISION_BY_ZERO_TEXT),
            Self::Missing => f.write_str(MISSING_TEXT),
        }
    }
}

impl Serialize for FeatureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::DivisionByZero => serializer.serialize_str(DIVISION_BY_ZERO_TEXT),
            Self::Missing => serializer.serialize_str(MISSING_TEXT),
        }
    }
}

/// Feature name to value, iterated in insertion order.
///
/// Re-inserting an existing name replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureMap {
    entries: Vec<(String, FeatureValue)>,
    index: HashMap<String, usize>,
}

impl FeatureMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FeatureValue>) {
        let name = name.into();
        let value = value.into();
        match self.index.get(&name) {
            Some(&slot) => self.entries[slot].1 = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<FeatureValue> {
        self.index.get(name).map(|&slot| self.entries[slot].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Append every entry of `other`; later values win on name clashes.
    pub fn merge(&mut self, other: FeatureMap) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }
}

impl Serialize for FeatureMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
