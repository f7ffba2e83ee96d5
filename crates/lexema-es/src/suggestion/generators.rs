// Individual suggestion generators: each applies one class of edit
// operation to produce candidate words, then validates them against the
// dictionary.

use lexema_core::character::strip_accent;

use super::status::SuggestionStatus;
use crate::speller::Dictionary;

/// Trait for individual suggestion generators.
pub trait SuggestionGenerator {
    /// Generate suggestions for the word tracked by `status`, using
    /// `dictionary` to validate candidates.
    fn generate(&self, dictionary: &dyn Dictionary, status: &mut SuggestionStatus<'_>);
}

/// Check a candidate buffer against the dictionary and record it on a hit.
pub fn suggest_for_buffer(
    dictionary: &dyn Dictionary,
    status: &mut SuggestionStatus<'_>,
    buffer: &[char],
    priority: u32,
) {
    if status.should_abort() {
        return;
    }
    let candidate: String = buffer.iter().collect();
    status.charge();
    if dictionary.contains(&candidate) {
        status.add_suggestion(candidate, priority);
    }
}

// ---------------------------------------------------------------------------
// AccentChange
// ---------------------------------------------------------------------------

/// Add or remove the acute accent on one vowel at a time.
///
/// Missing or misplaced accents are the most common misspelling in
/// Spanish text typed on a non-Spanish keyboard, so this generator runs
/// first and gets the best priority.
pub struct AccentChange;

const ACCENTED: [(char, char); 5] = [
    ('a', '\u{00E1}'),
    ('e', '\u{00E9}'),
    ('i', '\u{00ED}'),
    ('o', '\u{00F3}'),
    ('u', '\u{00FA}'),
];

impl SuggestionGenerator for AccentChange {
    fn generate(&self, dictionary: &dyn Dictionary, status: &mut SuggestionStatus<'_>) {
        let word = status.word().to_vec();
        let mut buffer = word.clone();

        // Strip an accent that is present.
        for (i, &c) in word.iter().enumerate() {
            let plain = strip_accent(c);
            if plain == c {
                continue;
            }
            buffer[i] = plain;
            suggest_for_buffer(dictionary, status, &buffer, 1);
            buffer[i] = c;
        }

        // Move the only accent, or add one where none is present.
        let stripped: Vec<char> = word.iter().map(|&c| strip_accent(c)).collect();
        for i in 0..stripped.len() {
            if status.should_abort() {
                break;
            }
            let Some(&(_, accented)) = ACCENTED.iter().find(|(plain, _)| *plain == stripped[i])
            else {
                continue;
            };
            if word[i] == accented {
                continue;
            }
            let mut candidate = stripped.clone();
            candidate[i] = accented;
            suggest_for_buffer(dictionary, status, &candidate, 1);
        }
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Try deleting one character at each position.
///
/// Skips positions where the deleted character equals its predecessor,
/// since that would produce the same candidate as the previous position.
pub struct Deletion;

impl SuggestionGenerator for Deletion {
    fn generate(&self, dictionary: &dyn Dictionary, status: &mut SuggestionStatus<'_>) {
        let word = status.word().to_vec();
        if word.len() < 2 {
            return;
        }
        let mut buffer = Vec::with_capacity(word.len() - 1);
        for i in 0..word.len() {
            if status.should_abort() {
                break;
            }
            if i > 0 && word[i] == word[i - 1] {
                continue;
            }
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.extend_from_slice(&word[i + 1..]);
            suggest_for_buffer(dictionary, status, &buffer, 2);
        }
    }
}

// ---------------------------------------------------------------------------
// Swap
// ---------------------------------------------------------------------------

/// Try swapping each pair of adjacent characters.
pub struct Swap;

impl SuggestionGenerator for Swap {
    fn generate(&self, dictionary: &dyn Dictionary, status: &mut SuggestionStatus<'_>) {
        let mut buffer = status.word().to_vec();
        for i in 0..buffer.len().saturating_sub(1) {
            if status.should_abort() {
                break;
            }
            if buffer[i] == buffer[i + 1] {
                continue;
            }
            buffer.swap(i, i + 1);
            suggest_for_buffer(dictionary, status, &buffer, 2);
            buffer.swap(i, i + 1);
        }
    }
}

// ---------------------------------------------------------------------------
// Replacement
// ---------------------------------------------------------------------------

/// Try replacing each character with every character of an alphabet.
pub struct Replacement {
    /// Replacement characters, most frequent first.
    pub characters: Vec<char>,
}

impl SuggestionGenerator for Replacement {
    fn generate(&self, dictionary: &dyn Dictionary, status: &mut SuggestionStatus<'_>) {
        let mut buffer = status.word().to_vec();
        for i in 0..buffer.len() {
            let original = buffer[i];
            for &c in &self.characters {
                if status.should_abort() {
                    return;
                }
                if c == original {
                    continue;
                }
                buffer[i] = c;
                suggest_for_buffer(dictionary, status, &buffer, 3);
            }
            buffer[i] = original;
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Try inserting each character of an alphabet at every position.
///
/// Inserting a character next to an identical one yields the same word
/// from two positions, so only the first position is tried.
pub struct Insertion {
    /// Characters to insert, most frequent first.
    pub characters: Vec<char>,
}

impl SuggestionGenerator for Insertion {
    fn generate(&self, dictionary: &dyn Dictionary, status: &mut SuggestionStatus<'_>) {
        let word = status.word().to_vec();
        let mut buffer = Vec::with_capacity(word.len() + 1);
        for &ins in &self.characters {
            for j in 0..=word.len() {
                if status.should_abort() {
                    return;
                }
                if j > 0 && word[j - 1] == ins {
                    continue;
                }
                buffer.clear();
                buffer.extend_from_slice(&word[..j]);
                buffer.push(ins);
                buffer.extend_from_slice(&word[j..]);
                suggest_for_buffer(dictionary, status, &buffer, 3);
            }
        }
    }
}
