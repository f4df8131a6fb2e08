//! Configuration validation with error accumulation.
//!
//! Every problem is collected before reporting so a single run shows all
//! of them. Feature names are not checked here: unknown names are a
//! per-text diagnostic during evaluation.

use std::fmt;

use super::FeatextConfig;
use crate::core::errors::{Error, Result};

/// One invalid configuration field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Dotted path of the offending field, e.g. `settings.separator`
    pub field: String,
    pub message: String,
}

impl ConfigValidationError {
    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate entire config, accumulating all errors
pub fn validate_config(config: &FeatextConfig) -> std::result::Result<(), Vec<ConfigValidationError>> {
    let errors: Vec<ConfigValidationError> = [
        validate_features(config),
        validate_settings(config),
        validate_paths(config),
        validate_words(config),
    ]
    .into_iter()
    .flatten()
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// [`validate_config`] folded into a single configuration error
pub fn validate_config_result(config: &FeatextConfig) -> Result<()> {
    validate_config(config).map_err(|errors| {
        let lines: Vec<String> = errors.iter().map(|e| format!("  - {}", e)).collect();
        Error::Configuration(format!(
            "{} invalid setting(s):\n{}",
            errors.len(),
            lines.join("\n")
        ))
    })
}

fn validate_features(config: &FeatextConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();
    if config.features.is_empty() {
        errors.push(ConfigValidationError::for_field(
            "features",
            "no features requested (grammar, syntax, phrase and meta are all empty)",
        ));
    }

    let lists = [
        ("features.grammar", &config.features.grammar),
        ("features.syntax", &config.features.syntax),
        ("features.phrase", &config.features.phrase),
        ("features.meta", &config.features.meta),
    ];
    for (field, names) in lists {
        if names.iter().any(|name| name.trim().is_empty()) {
            errors.push(ConfigValidationError::for_field(field, "empty feature name"));
        }
    }
    errors
}

fn validate_settings(config: &FeatextConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();
    if config.settings.separator_byte().is_none() {
        errors.push(ConfigValidationError::for_field(
            "settings.separator",
            format!(
                "must be a single ASCII character, got {:?}",
                config.settings.separator
            ),
        ));
    }
    errors
}

fn validate_paths(config: &FeatextConfig) -> Vec<ConfigValidationError> {
    let paths = &config.paths;
    let mut errors = Vec::new();

    if paths.output_stem.trim().is_empty() {
        errors.push(ConfigValidationError::for_field(
            "paths.output_stem",
            "must not be empty",
        ));
    }
    for (field, extension) in [
        ("paths.chunk_extension", &paths.chunk_extension),
        ("paths.conll_extension", &paths.conll_extension),
    ] {
        if extension.is_empty() {
            errors.push(ConfigValidationError::for_field(field, "must not be empty"));
        }
    }
    if !paths.chunk_extension.is_empty() && paths.chunk_extension == paths.conll_extension {
        errors.push(ConfigValidationError::for_field(
            "paths.conll_extension",
            "must differ from paths.chunk_extension",
        ));
    }
    errors
}

fn validate_words(config: &FeatextConfig) -> Vec<ConfigValidationError> {
    if config.words.categories.is_empty() {
        vec![ConfigValidationError::for_field(
            "words.categories",
            "at least one token category must count as a word",
        )]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> FeatextConfig {
        let mut config = FeatextConfig::default();
        config.features.grammar = vec!["N".into()];
        config
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&configured()).is_ok());
    }

    #[test]
    fn test_no_features_is_error() {
        let errors = validate_config(&FeatextConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "features");
    }

    #[test]
    fn test_all_errors_are_collected() {
        let mut config = FeatextConfig::default();
        config.settings.separator = "ab".into();
        config.paths.conll_extension = "chunk".into();
        config.words.categories.clear();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "features",
                "settings.separator",
                "paths.conll_extension",
                "words.categories"
            ]
        );
    }

    #[test]
    fn test_result_wrapper_lists_every_error() {
        let mut config = configured();
        config.paths.output_stem = " ".into();
        config.settings.separator = String::new();

        let message = validate_config_result(&config).unwrap_err().to_string();
        assert!(message.contains("2 invalid setting(s)"));
        assert!(message.contains("paths.output_stem"));
        assert!(message.contains("settings.separator"));
    }
}
