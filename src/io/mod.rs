pub mod output;

pub use output::{create_writer, output_path, DelimitedWriter, JsonWriter, OutputFormat, OutputWriter};

use crate::core::errors::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::FileSystem {
        message: "Failed to read file".to_string(),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::FileSystem {
        message: "Failed to write file".to_string(),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("results/run");
        ensure_dir(&nested).unwrap();

        let path = nested.join("out.txt");
        write_file(&path, "N\tS\n").unwrap();
        assert_eq!(read_file(&path).unwrap(), "N\tS\n");
    }

    #[test]
    fn test_read_missing_file_keeps_path() {
        let dir = TempDir::new().unwrap();
        let err = read_file(&dir.path().join("absent.toml")).unwrap_err();
        match err {
            Error::FileSystem { path, source, .. } => {
                assert!(path.unwrap().ends_with("absent.toml"));
                assert!(source.is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
