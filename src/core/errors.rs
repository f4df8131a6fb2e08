//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Recoverable failure while computing a single feature value.
///
/// These never abort an evaluation pass: the registry turns them into
/// sentinel values and moves on to the next requested feature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    /// A ratio's denominator was zero
    #[error("division by zero")]
    DivisionByZero,

    /// The formula has no value for this input (log of zero, no real root)
    #[error("undefined: {reason}")]
    Undefined { reason: String },
}

impl FeatureError {
    pub fn undefined(reason: impl Into<String>) -> Self {
        Self::Undefined {
            reason: reason.into(),
        }
    }
}

/// Result type for a single feature computation
pub type FeatureResult<T> = std::result::Result<T, FeatureError>;

/// Main error type for featext operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The corpus directory holds no texts
    #[error("No texts found in corpus at {}", .0.display())]
    EmptyCorpus(PathBuf),

    /// A text is missing one of its companion annotation files
    #[error("Missing input for text '{text_id}': {}", .path.display())]
    MissingInput { text_id: String, path: PathBuf },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Delimited reader/writer errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
