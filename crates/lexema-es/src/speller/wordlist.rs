// In-memory word list serving as vocabulary, dictionary and suggestion source

use hashbrown::HashSet;

use crate::data::parse_word_list;
use crate::speller::{Dictionary, LookupError, SuggestionSource, Vocabulary};
use crate::suggestion::{SuggestionStatus, typing_strategy};

/// Default cap on the number of suggestions returned per word.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Default dictionary-lookup budget per suggestion search.
pub const DEFAULT_SUGGESTION_COST: usize = crate::suggestion::strategy::DEFAULT_MAX_COST;

/// An ordered, deduplicated list of known words.
///
/// Words keep the order of their first insertion; the corrector's
/// vocabulary scan relies on that order for tie-breaking.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    index: HashSet<String>,
    max_suggestions: usize,
    max_cost: usize,
}

impl Default for WordList {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            index: HashSet::new(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_cost: DEFAULT_SUGGESTION_COST,
        }
    }
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from words in order; later duplicates are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        list.extend(words);
        list
    }

    /// Build a list from a one-word-per-line file.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(parse_word_list(text))
    }

    /// Set the suggestion limits used by [`SuggestionSource::suggest`].
    pub fn with_suggestion_limits(mut self, max_suggestions: usize, max_cost: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self.max_cost = max_cost;
        self
    }

    /// Append a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        if word.is_empty() || self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            self.insert(word);
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Vocabulary for WordList {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter())
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        WordList::contains(self, word)
    }
}

impl SuggestionSource for WordList {
    /// Edit-operation suggestions validated against this list, best first.
    fn suggest(&self, word: &str) -> Result<Vec<String>, LookupError> {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return Ok(Vec::new());
        }
        let strategy = typing_strategy(self.max_cost);
        let mut status = SuggestionStatus::new(&chars, self.max_suggestions, strategy.max_cost());
        strategy.generate(self, &mut status);
        status.sort_suggestions();
        Ok(status.into_suggestions().into_iter().map(|s| s.word).collect())
    }
}
