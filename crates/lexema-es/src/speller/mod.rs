// Spelling services and the edit-distance corrector
//
// The corrector consumes three services, each behind a trait so that any
// provider (a word list, a hunspell binding, a remote dictionary) can be
// plugged in:
//   - `SuggestionSource`: ranked correction candidates for a word
//   - `Vocabulary`: every known word, in a stable order
//   - `Dictionary`: membership checks, used by the foreign-word guard

pub mod cache;
pub mod corrector;
pub mod wordlist;

pub use cache::CorrectionCache;
pub use corrector::{CorrectorOptions, SpellCorrector};
pub use wordlist::WordList;

/// Failure of an external lookup service.
///
/// Lookup errors never escape the analysis pipeline: a failed suggestion
/// query counts as "no suggestion", a failed parse as "unknown".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("lookup service unavailable: {0}")]
    Unavailable(String),
    #[error("lookup service timed out")]
    Timeout,
}

/// A dictionary-suggestion service for the target language.
pub trait SuggestionSource {
    /// Return candidate corrections for `word`, best first. An empty list
    /// means the service has nothing to offer.
    fn suggest(&self, word: &str) -> Result<Vec<String>, LookupError>;
}

/// A membership check against one language's dictionary.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

/// The reference vocabulary: all known-correct words of the target
/// language.
///
/// Iteration order must be stable across calls; the corrector's tie-break
/// depends on it.
pub trait Vocabulary {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}
