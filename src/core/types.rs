//! Annotated corpus data as consumed by the feature engines.
//!
//! All of these are built fresh per text by [`crate::corpus::segment`] and
//! are read-only afterwards.

use serde::{Deserialize, Serialize};

/// A word occurrence inside a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub surface: String,
    pub lemma: String,
    pub tag: String,
    /// Case-normalized surface form
    pub word_type: String,
}

impl Token {
    pub fn new(surface: impl Into<String>, lemma: impl Into<String>, tag: impl Into<String>) -> Self {
        let surface = surface.into();
        let word_type = surface.to_lowercase();
        Self {
            surface,
            lemma: lemma.into(),
            tag: tag.into(),
            word_type,
        }
    }

    /// Character count of the surface form
    pub fn char_len(&self) -> usize {
        self.surface.chars().count()
    }
}

/// Ordered words of one sentence, punctuation and markers excluded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

/// One token's dependency link. Positions are 1-based and sentence-local;
/// a head of 0 is the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyRow {
    pub position: usize,
    pub head: usize,
    /// Analytic function label (`Sb`, `Obj`, `Coord_Co`, ...)
    pub relation: String,
}

impl DependencyRow {
    pub fn new(position: usize, head: usize) -> Self {
        Self {
            position,
            head,
            relation: String::new(),
        }
    }

    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = relation.into();
        self
    }

    pub fn is_root_attached(&self) -> bool {
        self.head == 0
    }

    pub fn distance(&self) -> usize {
        self.position.abs_diff(self.head)
    }
}

/// One entry of the phrase markup stream
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhraseEvent {
    /// `[np_nm` opens a phrase of category `np_nm`
    Open(String),
    /// `/np_nm]` closes a phrase of category `np_nm`
    Close(String),
    /// A word-category token
    Word,
    /// Punctuation, sentence markers and anything else
    Other,
}

impl PhraseEvent {
    pub fn opens(&self, category: &str) -> bool {
        matches!(self, Self::Open(c) if c == category)
    }

    pub fn closes(&self, category: &str) -> bool {
        matches!(self, Self::Close(c) if c == category)
    }
}
