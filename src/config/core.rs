use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::corpus::default_word_categories;
use crate::features::DEFAULT_TYPE_FREQUENCY_BUCKETS;
use crate::io::OutputFormat;
use crate::logging::LOG_FILE_NAME;

/// Root configuration structure for featext
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FeatextConfig {
    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub paths: PathsConfig,

    /// Requested feature names
    #[serde(default)]
    pub features: FeaturesConfig,

    #[serde(default)]
    pub words: WordsConfig,
}

impl FeatextConfig {
    /// Primitive request list: grammar, then syntax, then phrase features
    pub fn primitive_features(&self) -> Vec<String> {
        self.features
            .grammar
            .iter()
            .chain(&self.features.syntax)
            .chain(&self.features.phrase)
            .cloned()
            .collect()
    }

    pub fn meta_features(&self) -> Vec<String> {
        self.features.meta.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Output field separator, a single ASCII character
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Size of the `FreqT` frequency table
    #[serde(default = "default_type_frequency_buckets")]
    pub type_frequency_buckets: usize,

    /// Worker threads, 0 for all cores
    #[serde(default)]
    pub jobs: usize,

    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            type_frequency_buckets: default_type_frequency_buckets(),
            jobs: 0,
            output_format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Separator as a byte, if it is a single ASCII character
    pub fn separator_byte(&self) -> Option<u8> {
        match self.separator.as_bytes() {
            [byte] if byte.is_ascii() => Some(*byte),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_corpus_dir")]
    pub corpus_dir: PathBuf,

    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,

    /// Output file name prefix
    #[serde(default = "default_output_stem")]
    pub output_stem: String,

    /// Whitespace separated function word list
    #[serde(default)]
    pub functional_words: Option<PathBuf>,

    #[serde(default = "default_chunk_extension")]
    pub chunk_extension: String,

    #[serde(default = "default_conll_extension")]
    pub conll_extension: String,

    /// Run log, `<results_dir>/feature_extract.log` when unset
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl PathsConfig {
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.results_dir.join(LOG_FILE_NAME))
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            corpus_dir: default_corpus_dir(),
            results_dir: default_results_dir(),
            output_stem: default_output_stem(),
            functional_words: None,
            chunk_extension: default_chunk_extension(),
            conll_extension: default_conll_extension(),
            log_file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FeaturesConfig {
    #[serde(default)]
    pub grammar: Vec<String>,

    #[serde(default)]
    pub syntax: Vec<String>,

    #[serde(default)]
    pub phrase: Vec<String>,

    #[serde(default)]
    pub meta: Vec<String>,
}

impl FeaturesConfig {
    pub fn is_empty(&self) -> bool {
        self.grammar.is_empty()
            && self.syntax.is_empty()
            && self.phrase.is_empty()
            && self.meta.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordsConfig {
    /// Token categories counted as words
    #[serde(default = "default_word_categories")]
    pub categories: Vec<String>,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            categories: default_word_categories(),
        }
    }
}

pub fn default_separator() -> String {
    "\t".to_string()
}

pub fn default_type_frequency_buckets() -> usize {
    DEFAULT_TYPE_FREQUENCY_BUCKETS
}

fn default_corpus_dir() -> PathBuf {
    PathBuf::from("corpus")
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_output_stem() -> String {
    "featext".to_string()
}

fn default_chunk_extension() -> String {
    "chunk".to_string()
}

fn default_conll_extension() -> String {
    "conll".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let config: FeatextConfig = toml::from_str("").unwrap();
        assert_eq!(config, FeatextConfig::default());
        assert_eq!(config.settings.separator_byte(), Some(b'\t'));
        assert_eq!(config.settings.type_frequency_buckets, 30);
        assert_eq!(config.words.categories, vec!["TOK", "ABBR", "DIG"]);
        assert_eq!(config.paths.conll_extension, "conll");
    }

    #[test]
    fn test_log_file_defaults_to_results_dir() {
        let config: FeatextConfig = toml::from_str("[paths]\nresults_dir = \"out\"\n").unwrap();
        assert_eq!(
            config.paths.log_file_path(),
            PathBuf::from("out").join("feature_extract.log")
        );

        let config: FeatextConfig =
            toml::from_str("[paths]\nlog_file = \"logs/run.log\"\n").unwrap();
        assert_eq!(config.paths.log_file_path(), PathBuf::from("logs/run.log"));
    }

    #[test]
    fn test_primitive_order_is_grammar_syntax_phrase() {
        let config: FeatextConfig = toml::from_str(
            r#"
            [features]
            phrase = ["Np_all"]
            meta = ["m_Np_allToS"]
            grammar = ["N", "S"]
            syntax = ["Sb"]
            "#,
        )
        .unwrap();
        assert_eq!(config.primitive_features(), vec!["N", "S", "Sb", "Np_all"]);
        assert_eq!(config.meta_features(), vec!["m_Np_allToS"]);
    }

    #[test]
    fn test_separator_must_be_single_ascii() {
        let mut settings = Settings::default();
        settings.separator = ";".into();
        assert_eq!(settings.separator_byte(), Some(b';'));
        settings.separator = "::".into();
        assert_eq!(settings.separator_byte(), None);
        settings.separator = "§".into();
        assert_eq!(settings.separator_byte(), None);
    }

    #[test]
    fn test_output_format_names() {
        let config: FeatextConfig =
            toml::from_str("[settings]\noutput_format = \"json\"\n").unwrap();
        assert_eq!(config.settings.output_format, OutputFormat::Json);
    }
}
