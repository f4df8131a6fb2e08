use anyhow::{Context, Result};
use clap::Parser;
use featext::cli::{Cli, Commands};
use featext::commands::{self, ExtractConfig};
use featext::logging;
use std::path::Path;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            config,
            corpus,
            output,
            format,
            jobs,
            verbosity,
            quiet,
        } => {
            let args = ExtractConfig {
                config,
                corpus,
                output,
                format: format.map(Into::into),
                jobs,
                quiet,
            };
            let config = commands::load_extract_config(&args)?;
            init_logging(verbosity, &config.paths.log_file_path())?;
            let summary = commands::handle_extract(&config, &args)?;
            println!(
                "Wrote {} text(s) to {} ({} skipped, {} diagnostic(s))",
                summary.texts,
                summary.output.display(),
                summary.failures,
                summary.diagnostics
            );
            Ok(())
        }
        Commands::Features { kind } => commands::list_features(kind.map(Into::into)),
        Commands::Init { force } => commands::init_config(force),
    }
}

/// `RUST_LOG` wins over `-v` on stderr; the run log always gets info and above
fn init_logging(verbosity: u8, log_file: &Path) -> Result<()> {
    let file = logging::open_log_file(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;
    logging::subscriber(logging::verbosity_filter(verbosity), Some(file)).init();
    Ok(())
}
