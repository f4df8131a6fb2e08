pub mod errors;
pub mod types;
pub mod values;

pub use errors::{Error, FeatureError, FeatureResult, Result};
pub use types::{DependencyRow, PhraseEvent, Sentence, Token};
pub use values::{FeatureMap, FeatureValue, DIVISION_BY_ZERO_TEXT, MISSING_TEXT};
