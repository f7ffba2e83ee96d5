// Suggestion search state: cost budget, abort conditions, deduplication

use hashbrown::HashSet;

/// A suggestion candidate with its priority (lower is better).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub priority: u32,
}

/// Tracks one suggestion search: the word being corrected, the candidates
/// found so far and the dictionary lookups spent.
///
/// Every membership check costs one unit. Once `max_cost` is spent the
/// search stops, except that a search that has found nothing yet may run
/// on up to twice the budget.
pub struct SuggestionStatus<'a> {
    word: &'a [char],
    max_suggestions: usize,
    max_cost: usize,
    current_cost: usize,
    suggestions: Vec<Suggestion>,
    seen: HashSet<String>,
}

impl<'a> SuggestionStatus<'a> {
    pub fn new(word: &'a [char], max_suggestions: usize, max_cost: usize) -> Self {
        Self {
            word,
            max_suggestions,
            max_cost,
            current_cost: 0,
            suggestions: Vec::with_capacity(max_suggestions),
            seen: HashSet::new(),
        }
    }

    /// Returns `true` if no more candidates should be checked.
    pub fn should_abort(&self) -> bool {
        if self.suggestions.len() >= self.max_suggestions {
            return true;
        }
        if self.current_cost < self.max_cost {
            return false;
        }
        !(self.suggestions.is_empty() && self.current_cost < 2 * self.max_cost)
    }

    /// Spend one unit of the budget.
    pub fn charge(&mut self) {
        self.current_cost += 1;
    }

    pub fn cost(&self) -> usize {
        self.current_cost
    }

    /// Add a suggestion. Duplicates and the original word are ignored.
    pub fn add_suggestion(&mut self, word: String, priority: u32) {
        if self.suggestions.len() >= self.max_suggestions {
            return;
        }
        if word.chars().eq(self.word.iter().copied()) {
            return;
        }
        if !self.seen.insert(word.clone()) {
            return;
        }
        self.suggestions.push(Suggestion { word, priority });
    }

    /// Stable sort by priority: equal priorities keep discovery order.
    pub fn sort_suggestions(&mut self) {
        self.suggestions.sort_by_key(|s| s.priority);
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestions.len()
    }

    pub fn word(&self) -> &[char] {
        self.word
    }

    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.suggestions
    }
}
