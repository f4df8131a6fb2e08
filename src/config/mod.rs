mod core;
mod loader;
pub mod validation;

pub use core::{
    default_separator, default_type_frequency_buckets, FeatextConfig, FeaturesConfig,
    PathsConfig, Settings, WordsConfig,
};
pub use loader::{
    directory_ancestors, find_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
pub use validation::{validate_config, validate_config_result, ConfigValidationError};

use crate::corpus::CorpusLayout;
use crate::pipeline::FeatureRequest;

/// Written by `featext init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# featext configuration

[settings]
# Output field separator (single character)
separator = "\t"
# Entries in the FreqT frequency table
type_frequency_buckets = 30
# Worker threads, 0 uses every core
jobs = 0
# "delimited" or "json"
output_format = "delimited"

[paths]
corpus_dir = "corpus"
results_dir = "results"
output_stem = "featext"
# functional_words = "functional_words.txt"
chunk_extension = "chunk"
conll_extension = "conll"
# log_file = "results/feature_extract.log"

[features]
grammar = ["N", "T", "S", "Char", "Noun", "Verb", "m_NounToVerb", "m_TTR", "m_YuleK"]
syntax = ["Sb", "Obj", "Pnom", "Coord", "Apos", "DepHeight", "DepWidth"]
phrase = ["Np_all", "Vg", "Cl_all", "L_Np_all"]
meta = ["m_SbToS", "m_SbToVerb", "m_CoToAp", "m_Np_allToS"]

[words]
categories = ["TOK", "ABBR", "DIG"]
"#;

impl FeatextConfig {
    pub fn feature_request(&self) -> FeatureRequest {
        FeatureRequest::new(self.primitive_features(), self.meta_features())
            .with_word_categories(self.words.categories.clone())
    }

    pub fn corpus_layout(&self) -> CorpusLayout {
        CorpusLayout::new(&self.paths.corpus_dir)
            .with_extensions(&self.paths.chunk_extension, &self.paths.conll_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureCatalog;

    #[test]
    fn test_template_is_valid() {
        let config = parse_config(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    fn test_template_names_are_in_catalog() {
        let config = parse_config(DEFAULT_CONFIG_TEMPLATE).unwrap();
        let catalog = FeatureCatalog::standard();
        for name in config.primitive_features().iter().chain(&config.meta_features()) {
            assert!(catalog.contains(name), "{name} is not a known feature");
        }
    }

    #[test]
    fn test_feature_request_from_config() {
        let config = parse_config(
            "[features]\ngrammar = [\"N\"]\nmeta = [\"m_SbToS\"]\n[words]\ncategories = [\"TOK\"]\n",
        )
        .unwrap();
        let request = config.feature_request();
        assert_eq!(request.primitive, vec!["N"]);
        assert_eq!(request.meta, vec!["m_SbToS"]);
        assert_eq!(request.word_categories, vec!["TOK"]);
    }
}
