//! Progress feedback for corpus extraction.
//!
//! - **Quiet mode**: no progress output (`--quiet` or `FEATEXT_QUIET`)
//! - **Non-TTY**: progress bars are hidden in CI and piped output

use indicatif::{ProgressBar, ProgressStyle};

pub const TEMPLATE_TEXTS: &str = "📄 {msg} {pos}/{len} texts ({percent}%) - {eta}";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressConfig {
    /// Whether to suppress all progress output
    pub quiet_mode: bool,
}

impl ProgressConfig {
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var("FEATEXT_QUIET").is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
        }
    }

    pub fn quiet() -> Self {
        Self { quiet_mode: true }
    }

    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }

    /// A bar over `len` items, hidden when progress should not be shown
    pub fn create_bar(&self, len: u64, template: &str) -> ProgressBar {
        if !self.should_show_progress() {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(len);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(template)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░  "),
        );
        bar
    }
}
