// Analysis results: per-token category entries and synonym entries

use std::fmt;

use crate::category::{Category, WordClass};

/// The classification of one token.
///
/// An analysis pass produces one entry per token, index-aligned with the
/// token sequence. `token` is the text that was actually classified, so
/// after a correction it holds the corrected word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisEntry {
    pub token: String,
    pub category: Category,
}

impl AnalysisEntry {
    pub fn new(token: impl Into<String>, category: Category) -> Self {
        Self {
            token: token.into(),
            category,
        }
    }

    /// Shorthand for `self.category.class()`.
    pub fn class(&self) -> WordClass {
        self.category.class()
    }
}

impl fmt::Display for AnalysisEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.token, self.category)
    }
}

/// Synonyms collected for one token.
///
/// `synonyms` never contains `word` itself and has no duplicates; it is
/// empty for word classes that are not looked up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynonymEntry {
    pub word: String,
    pub synonyms: Vec<String>,
}

impl SynonymEntry {
    pub fn new(word: impl Into<String>, synonyms: Vec<String>) -> Self {
        Self {
            word: word.into(),
            synonyms,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }
}

impl fmt::Display for SynonymEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, [{}])", self.word, self.synonyms.join(", "))
    }
}
