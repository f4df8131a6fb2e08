use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "featext")]
#[command(about = "Readability feature extraction over annotated text corpora", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the configured features for every text of a corpus
    Extract {
        /// Configuration file (defaults to the nearest featext.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Corpus directory, overrides paths.corpus_dir
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Output file (defaults to <results_dir>/<output_stem>_all.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format, overrides settings.output_format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Worker threads (0 = all cores), overrides settings.jobs
        #[arg(short = 'j', long)]
        jobs: Option<usize>,

        /// Increase log verbosity (-v info, -vv debug, -vvv trace)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// List every known feature grouped by kind
    Features {
        /// Only list one kind
        #[arg(short, long, value_enum)]
        kind: Option<KindFilter>,
    },

    /// Write a default featext.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Delimited,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    Lexical,
    Syntax,
    Phrase,
    Meta,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Delimited => crate::io::output::OutputFormat::Delimited,
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
        }
    }
}

impl From<KindFilter> for crate::features::FeatureKind {
    fn from(k: KindFilter) -> Self {
        match k {
            KindFilter::Lexical => crate::features::FeatureKind::Lexical,
            KindFilter::Syntax => crate::features::FeatureKind::Syntax,
            KindFilter::Phrase => crate::features::FeatureKind::Phrase,
            KindFilter::Meta => crate::features::FeatureKind::Meta,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
