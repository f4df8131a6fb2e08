use crate::config::{self, FeatextConfig};
use crate::corpus::read_word_list;
use crate::features::{EvaluationSettings, FeatureRegistry};
use crate::io::{self, output::OutputFormat};
use crate::pipeline::{CorpusExtractor, CorpusResults};
use crate::progress::ProgressConfig;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Command line arguments of `featext extract`
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    pub config: Option<PathBuf>,
    pub corpus: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub jobs: Option<usize>,
    pub quiet: bool,
}

/// What an extraction run produced
#[derive(Debug, Clone)]
pub struct ExtractSummary {
    pub output: PathBuf,
    pub texts: usize,
    pub failures: usize,
    pub diagnostics: usize,
}

/// Configuration of an extraction run: file, then overrides, then validation
pub fn load_extract_config(args: &ExtractConfig) -> Result<FeatextConfig> {
    let loaded = match &args.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => config::load_config(),
    };
    let config = apply_overrides(loaded, args);
    config::validate_config_result(&config)?;
    Ok(config)
}

pub fn handle_extract(config: &FeatextConfig, args: &ExtractConfig) -> Result<ExtractSummary> {
    let registry = FeatureRegistry::new(evaluation_settings(config)?);
    let progress = ProgressConfig::from_env(args.quiet);
    let extractor = CorpusExtractor::new(registry, config.feature_request()).with_progress(progress);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.settings.jobs)
        .build()
        .context("Failed to build worker pool")?;
    let layout = config.corpus_layout();
    let results = pool
        .install(|| extractor.run(&layout))
        .with_context(|| format!("Failed to extract corpus {}", layout.dir.display()))?;

    let output = args.output.clone().unwrap_or_else(|| {
        io::output_path(
            &config.paths.results_dir,
            &config.paths.output_stem,
            config.settings.output_format,
        )
    });
    write_output(config, &results, &output)?;

    for failure in &results.failures {
        eprintln!("Skipped {}: {}", failure.text_id, failure.error);
    }

    Ok(ExtractSummary {
        output,
        texts: results.texts.len(),
        failures: results.failures.len(),
        diagnostics: results.diagnostic_count(),
    })
}

/// Command line values take precedence over the configuration file
pub fn apply_overrides(mut config: FeatextConfig, args: &ExtractConfig) -> FeatextConfig {
    if let Some(corpus) = &args.corpus {
        config.paths.corpus_dir = corpus.clone();
    }
    if let Some(format) = args.format {
        config.settings.output_format = format;
    }
    if let Some(jobs) = args.jobs {
        config.settings.jobs = jobs;
    }
    config
}

fn evaluation_settings(config: &FeatextConfig) -> Result<EvaluationSettings> {
    let functional_words = match &config.paths.functional_words {
        Some(path) => read_word_list(path)
            .with_context(|| format!("Failed to read functional words {}", path.display()))?,
        None => {
            log::warn!("No functional word list configured; FuncT will be 0");
            Vec::new()
        }
    };

    Ok(EvaluationSettings {
        functional_words,
        type_frequency_buckets: config.settings.type_frequency_buckets,
    })
}

fn write_output(config: &FeatextConfig, results: &CorpusResults, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        io::ensure_dir(parent)?;
    }
    let separator = config
        .settings
        .separator_byte()
        .context("settings.separator must be a single ASCII character")?;

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer =
        io::create_writer(config.settings.output_format, separator, BufWriter::new(file));
    writer.write_results(results)?;
    Ok(())
}
