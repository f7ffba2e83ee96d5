// Suggestion search for misspelled words: edit generators run under a
// shared lookup budget against any `Dictionary`.

pub mod generators;
pub mod status;
pub mod strategy;

pub use status::{Suggestion, SuggestionStatus};
pub use strategy::{SuggestionStrategy, default_typing_strategy, typing_strategy};
