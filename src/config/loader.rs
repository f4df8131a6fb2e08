use std::path::{Path, PathBuf};

use super::core::FeatextConfig;
use crate::core::errors::{Error, Result};
use crate::io;

pub const CONFIG_FILE_NAME: &str = "featext.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse a configuration document
pub fn parse_config(contents: &str) -> Result<FeatextConfig> {
    toml::from_str::<FeatextConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Load an explicitly named configuration file; any failure is an error
pub fn load_config_from(path: &Path) -> Result<FeatextConfig> {
    let contents = io::read_file(path)?;
    let config = parse_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<FeatextConfig> {
    if !config_path.is_file() {
        return None;
    }

    match load_config_from(config_path) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// The directory and its parents, nearest first
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `featext.toml`
pub fn find_config(start: PathBuf) -> Option<FeatextConfig> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

/// Load the nearest configuration above the current directory, or defaults
pub fn load_config() -> FeatextConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return FeatextConfig::default();
        }
    };

    find_config(current).unwrap_or_else(|| {
        log::debug!(
            "No config found after checking {} directories. Using default config.",
            MAX_TRAVERSAL_DEPTH
        );
        FeatextConfig::default()
    })
}
