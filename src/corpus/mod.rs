//! Corpus input: reading annotation files and segmenting them into the
//! per-text data the feature engines consume.

pub mod loader;
pub mod reader;
pub mod segment;

pub use loader::{discover_text_ids, load_text, read_word_list, CorpusLayout, RawText};
pub use reader::{parse_rows, read_rows, Row};
pub use segment::default_word_categories;

use crate::core::{DependencyRow, PhraseEvent, Sentence, Token};
use crate::diagnostics::Diagnostics;

/// Everything known about one text, read-only once built
#[derive(Debug, Clone, Default)]
pub struct TextData {
    pub sentences: Vec<Sentence>,
    /// Non-marker rows of the chunk table, punctuation included
    pub all_tokens: usize,
    pub dependency_rows: Vec<DependencyRow>,
    pub dependency_sentences: Vec<Vec<DependencyRow>>,
    pub phrase_events: Vec<PhraseEvent>,
}

impl TextData {
    /// Segment both annotation tables of a text
    pub fn from_rows(
        chunk_rows: &[Row],
        conll_rows: &[Row],
        word_categories: &[String],
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let dependency_rows = segment::dependency_rows(conll_rows, diagnostics);
        let dependency_sentences = segment::dependency_sentences(&dependency_rows);
        Self {
            sentences: segment::segment_sentences(chunk_rows, word_categories, diagnostics),
            all_tokens: segment::count_all_tokens(chunk_rows),
            dependency_rows,
            dependency_sentences,
            phrase_events: segment::phrase_events(chunk_rows, word_categories),
        }
    }

    /// Text made of sentences only, without dependency or phrase data
    pub fn from_sentences(sentences: Vec<Sentence>) -> Self {
        let all_tokens = sentences.iter().map(Sentence::len).sum();
        Self {
            sentences,
            all_tokens,
            ..Self::default()
        }
    }

    pub fn with_dependency_rows(mut self, rows: Vec<DependencyRow>) -> Self {
        self.dependency_sentences = segment::dependency_sentences(&rows);
        self.dependency_rows = rows;
        self
    }

    pub fn with_phrase_events(mut self, events: Vec<PhraseEvent>) -> Self {
        self.phrase_events = events;
        self
    }

    /// Words of all sentences in document order
    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(Sentence::iter)
    }

    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }
}
