//! Corpus discovery and per-text file loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{Error, Result};

use super::reader::{read_rows, Row};

/// Where a corpus lives and how its annotation files are named
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLayout {
    pub dir: PathBuf,
    pub chunk_extension: String,
    pub conll_extension: String,
}

impl CorpusLayout {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            chunk_extension: "chunk".to_string(),
            conll_extension: "conll".to_string(),
        }
    }

    pub fn with_extensions(mut self, chunk: impl Into<String>, conll: impl Into<String>) -> Self {
        self.chunk_extension = chunk.into();
        self.conll_extension = conll.into();
        self
    }

    pub fn chunk_path(&self, text_id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", text_id, self.chunk_extension))
    }

    pub fn conll_path(&self, text_id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", text_id, self.conll_extension))
    }
}

/// Both annotation tables of one text, unparsed
#[derive(Debug, Clone)]
pub struct RawText {
    pub id: String,
    pub chunk_rows: Vec<Row>,
    pub conll_rows: Vec<Row>,
}

/// Text ids are the basenames of the dependency files, sorted
pub fn discover_text_ids(layout: &CorpusLayout) -> Result<Vec<String>> {
    let pattern = layout
        .dir
        .join(format!("*.{}", layout.conll_extension))
        .to_string_lossy()
        .into_owned();

    let mut ids: Vec<String> = glob::glob(&pattern)?
        .filter_map(|entry| match entry {
            Ok(path) => path.file_stem().map(|s| s.to_string_lossy().into_owned()),
            Err(e) => {
                log::warn!("Skipping unreadable corpus entry: {}", e);
                None
            }
        })
        .collect();
    ids.sort();

    if ids.is_empty() {
        return Err(Error::EmptyCorpus(layout.dir.clone()));
    }
    Ok(ids)
}

/// Read both annotation files of a text
pub fn load_text(layout: &CorpusLayout, text_id: &str) -> Result<RawText> {
    let chunk_path = layout.chunk_path(text_id);
    let conll_path = layout.conll_path(text_id);

    for path in [&chunk_path, &conll_path] {
        if !path.exists() {
            return Err(Error::MissingInput {
                text_id: text_id.to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    Ok(RawText {
        id: text_id.to_string(),
        chunk_rows: read_rows(&chunk_path)?,
        conll_rows: read_rows(&conll_path)?,
    })
}

/// Whitespace-separated word list, e.g. the functional words
pub fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::file_system(format!("cannot read word list: {}", e), path))?;
    Ok(content.split_whitespace().map(str::to_string).collect())
}
