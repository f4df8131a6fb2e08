//! CLI command implementations.
//!
//! - **extract**: compute the configured features for a corpus
//! - **features**: list the feature catalog
//! - **init**: write a default configuration file

pub mod extract;
pub mod features;
pub mod init;

pub use extract::{handle_extract, load_extract_config, ExtractConfig, ExtractSummary};
pub use features::list_features;
pub use init::init_config;
