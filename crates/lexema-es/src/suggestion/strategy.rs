// Suggestion strategy: an ordered list of generators sharing one budget

use lexema_core::character::SPANISH_ALPHABET;

use super::generators::*;
use super::status::SuggestionStatus;
use crate::speller::Dictionary;

/// Default number of dictionary lookups one suggestion search may spend.
pub const DEFAULT_MAX_COST: usize = 1500;

/// A suggestion strategy holds primary and secondary generator lists and
/// runs them against a cost budget.
pub struct SuggestionStrategy {
    max_cost: usize,
    /// Run first; if any of them produce suggestions, secondaries are skipped.
    primary_generators: Vec<Box<dyn SuggestionGenerator>>,
    /// Run only if the primaries produced nothing.
    generators: Vec<Box<dyn SuggestionGenerator>>,
}

impl SuggestionStrategy {
    pub fn max_cost(&self) -> usize {
        self.max_cost
    }

    /// Run the strategy for the word tracked by `status`.
    pub fn generate(&self, dictionary: &dyn Dictionary, status: &mut SuggestionStatus<'_>) {
        for generator in &self.primary_generators {
            if status.should_abort() {
                break;
            }
            generator.generate(dictionary, status);
        }
        if status.suggestion_count() > 0 {
            return;
        }
        for generator in &self.generators {
            if status.should_abort() {
                break;
            }
            generator.generate(dictionary, status);
        }
    }
}

/// Strategy for typing errors in Spanish text.
///
/// Accent fixes are tried first; single-edit operations (deletion,
/// transposition, substitution, insertion) follow in increasing cost.
pub fn typing_strategy(max_cost: usize) -> SuggestionStrategy {
    let alphabet: Vec<char> = SPANISH_ALPHABET.chars().collect();

    let primary_generators: Vec<Box<dyn SuggestionGenerator>> = vec![Box::new(AccentChange)];

    let generators: Vec<Box<dyn SuggestionGenerator>> = vec![
        Box::new(Deletion),
        Box::new(Swap),
        Box::new(Replacement {
            characters: alphabet.clone(),
        }),
        Box::new(Insertion {
            characters: alphabet,
        }),
    ];

    SuggestionStrategy {
        max_cost,
        primary_generators,
        generators,
    }
}

/// Typing strategy with [`DEFAULT_MAX_COST`].
pub fn default_typing_strategy() -> SuggestionStrategy {
    typing_strategy(DEFAULT_MAX_COST)
}
