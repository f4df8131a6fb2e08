//! Tab-separated annotation rows.

use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::errors::{Error, Result};

/// Shortest line content treated as data; anything shorter is blank noise
const MIN_ROW_CHARS: usize = 2;

/// One annotation line split on tabs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number in the source file
    pub line: usize,
    pub fields: Vec<String>,
}

impl Row {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Build a row from a tab-joined string, for fixtures
    pub fn from_tabbed(line: usize, text: &str) -> Self {
        Self::new(line, text.split('\t').map(str::to_string).collect())
    }

    /// Field at `index`, empty when the row is short
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    fn content_len(&self) -> usize {
        let chars: usize = self.fields.iter().map(|f| f.chars().count()).sum();
        chars + self.fields.len().saturating_sub(1)
    }
}

/// Read rows from any reader; quotes are literal text, row widths may vary
pub fn rows_from_reader<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        let row = Row::new(line, record.iter().map(str::to_string).collect());
        if row.content_len() >= MIN_ROW_CHARS {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Read every row of an annotation file
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let file = File::open(path)
        .map_err(|e| Error::file_system(format!("cannot open {}: {}", path.display(), e), path))?;
    rows_from_reader(file)
}

/// Parse rows from in-memory text
pub fn parse_rows(content: &str) -> Result<Vec<Row>> {
    rows_from_reader(content.as_bytes())
}
