use crate::core::errors::Result;
use crate::pipeline::CorpusResults;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One row per text, separator from the configuration
    #[default]
    Delimited,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Delimited => "csv",
            Self::Json => "json",
        }
    }
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &CorpusResults) -> Result<()>;
}

/// Feature table: a `text_id` column followed by every feature seen in
/// the corpus. Features a text did not produce are left empty.
pub struct DelimitedWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> DelimitedWriter<W> {
    pub fn new(writer: W, separator: u8) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .delimiter(separator)
                .from_writer(writer),
        }
    }
}

impl<W: Write> OutputWriter for DelimitedWriter<W> {
    fn write_results(&mut self, results: &CorpusResults) -> Result<()> {
        let names = results.feature_names();

        let mut header = Vec::with_capacity(names.len() + 1);
        header.push("text_id");
        header.extend(names.iter().map(String::as_str));
        self.writer.write_record(&header)?;

        for text in &results.texts {
            let mut record = Vec::with_capacity(names.len() + 1);
            record.push(text.text_id.clone());
            record.extend(names.iter().map(|name| {
                text.features
                    .get(name)
                    .map(|value| value.to_string())
                    .unwrap_or_default()
            }));
            self.writer.write_record(&record)?;
        }

        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &CorpusResults) -> Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<W: Write + 'static>(
    format: OutputFormat,
    separator: u8,
    writer: W,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Delimited => Box::new(DelimitedWriter::new(writer, separator)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}

/// `<results_dir>/<stem>_all.<ext>`
pub fn output_path(results_dir: &Path, stem: &str, format: OutputFormat) -> PathBuf {
    results_dir.join(format!("{}_all.{}", stem, format.extension()))
}
