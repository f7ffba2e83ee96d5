// Edit-distance spelling corrector: suggestion scan, then vocabulary scan

use crate::distance::char_distance;
use crate::speller::cache::{CacheLookup, CorrectionCache};
use crate::speller::{SuggestionSource, Vocabulary};

/// Default maximum edit distance for an accepted correction.
pub const DEFAULT_MAX_DISTANCE: usize = 1;

/// Corrector options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectorOptions {
    /// A candidate is accepted only if its edit distance to the token is at
    /// most this value. Applies to both the suggestion scan and the
    /// vocabulary scan.
    pub max_distance: usize,
}

impl Default for CorrectorOptions {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

/// Finds the closest acceptable correction for a token.
///
/// The search runs in two stages:
/// 1. Walk the suggestion service's candidates in their ranked order and
///    take the first one within `max_distance`.
/// 2. Otherwise scan the whole reference vocabulary for the nearest word.
///    Among words at the same distance the first one whose length equals
///    the token's length wins; a zero-distance hit ends the scan at once.
///
/// Results are memoized in the caller's [`CorrectionCache`]. A token is
/// searched once per cache, and again only if a failed search ran under a
/// smaller `max_distance`.
pub struct SpellCorrector<'a> {
    suggestions: &'a dyn SuggestionSource,
    vocabulary: &'a dyn Vocabulary,
    options: CorrectorOptions,
}

impl<'a> SpellCorrector<'a> {
    pub fn new(
        suggestions: &'a dyn SuggestionSource,
        vocabulary: &'a dyn Vocabulary,
        options: CorrectorOptions,
    ) -> Self {
        Self {
            suggestions,
            vocabulary,
            options,
        }
    }

    pub fn options(&self) -> CorrectorOptions {
        self.options
    }

    /// Return the accepted correction for `token`, or `None` when nothing
    /// within the distance threshold exists.
    ///
    /// A token that is itself a vocabulary word corrects to itself.
    pub fn correct(&self, token: &str, cache: &mut CorrectionCache) -> Option<String> {
        match cache.lookup(token, self.options.max_distance) {
            CacheLookup::Corrected(word) => return Some(word.to_string()),
            CacheLookup::Uncorrectable => return None,
            CacheLookup::Unseen => {}
        }

        let token_chars: Vec<char> = token.chars().collect();

        if let Some(word) = self.scan_suggestions(token, &token_chars) {
            return Some(accept(cache, token, word));
        }

        match self.scan_vocabulary(&token_chars) {
            Some((word, dist)) if dist <= self.options.max_distance => {
                Some(accept(cache, token, word))
            }
            _ => {
                log::debug!(
                    "no correction within distance {} for {token:?}",
                    self.options.max_distance
                );
                cache.insert_miss(token, self.options.max_distance);
                None
            }
        }
    }

    /// Stage 1: first suggestion within the threshold, in service order.
    fn scan_suggestions(&self, token: &str, token_chars: &[char]) -> Option<String> {
        let candidates = match self.suggestions.suggest(token) {
            Ok(candidates) => candidates,
            Err(e) => {
                log::warn!("suggestion lookup failed for {token:?}: {e}");
                return None;
            }
        };
        candidates.into_iter().find(|candidate| {
            let candidate_chars: Vec<char> = candidate.chars().collect();
            char_distance(token_chars, &candidate_chars) <= self.options.max_distance
        })
    }

    /// Stage 2: nearest vocabulary word and its distance.
    ///
    /// A later word replaces the current best when it is strictly closer,
    /// or equally close while having the token's length when the current
    /// best does not.
    fn scan_vocabulary(&self, token_chars: &[char]) -> Option<(String, usize)> {
        let token_len = token_chars.len();
        let mut best: Option<(&str, usize, usize)> = None;
        let mut word_chars: Vec<char> = Vec::new();

        for word in self.vocabulary.words() {
            word_chars.clear();
            word_chars.extend(word.chars());
            let dist = char_distance(token_chars, &word_chars);
            let word_len = word_chars.len();

            let replace = match best {
                None => true,
                Some((_, min, best_len)) => {
                    dist < min || (dist == min && word_len == token_len && best_len != token_len)
                }
            };
            if replace {
                best = Some((word, dist, word_len));
                if dist == 0 {
                    break;
                }
            }
        }

        best.map(|(word, dist, _)| (word.to_string(), dist))
    }
}

/// Record an accepted correction and emit the correction notice.
fn accept(cache: &mut CorrectionCache, token: &str, word: String) -> String {
    log::info!("corrected word: {token} --> {word}");
    cache.insert(token, word.clone());
    word
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::speller::LookupError;

    /// Vocabulary that counts how many words have been handed out.
    struct CountingVocabulary {
        words: Vec<String>,
        yielded: Cell<usize>,
        scans: Cell<usize>,
    }

    impl CountingVocabulary {
        fn new(words: &[&str]) -> Self {
            Self {
                words: words.iter().map(|w| w.to_string()).collect(),
                yielded: Cell::new(0),
                scans: Cell::new(0),
            }
        }
    }

    impl Vocabulary for CountingVocabulary {
        fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
            self.scans.set(self.scans.get() + 1);
            Box::new(self.words.iter().map(|w| {
                self.yielded.set(self.yielded.get() + 1);
                w.as_str()
            }))
        }
    }

    /// Suggestion source with canned answers.
    struct FixedSuggestions(Vec<(&'static str, Vec<&'static str>)>);

    impl SuggestionSource for FixedSuggestions {
        fn suggest(&self, word: &str) -> Result<Vec<String>, LookupError> {
            Ok(self
                .0
                .iter()
                .find(|(w, _)| *w == word)
                .map(|(_, s)| s.iter().map(|s| s.to_string()).collect())
                .unwrap_or_default())
        }
    }

    struct FailingSuggestions;

    impl SuggestionSource for FailingSuggestions {
        fn suggest(&self, _word: &str) -> Result<Vec<String>, LookupError> {
            Err(LookupError::Timeout)
        }
    }

    fn no_suggestions() -> FixedSuggestions {
        FixedSuggestions(Vec::new())
    }

    #[test]
    fn prefers_same_length_candidate_on_tie() {
        let vocab = CountingVocabulary::new(&["gato", "gatos"]);
        let sugg = no_suggestions();
        let corrector = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let mut cache = CorrectionCache::new();
        assert_eq!(corrector.correct("gatox", &mut cache), Some("gatos".to_string()));
    }

    #[test]
    fn keeps_first_same_length_match() {
        let vocab = CountingVocabulary::new(&["gato", "gatos", "gatoz"]);
        let sugg = no_suggestions();
        let corrector = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let mut cache = CorrectionCache::new();
        assert_eq!(corrector.correct("gatox", &mut cache), Some("gatos".to_string()));
    }

    #[test]
    fn same_length_word_replaces_shorter_best_on_tie() {
        let vocab = CountingVocabulary::new(&["mesa", "meses"]);
        let sugg = no_suggestions();
        let corrector = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let mut cache = CorrectionCache::new();
        // Both are at distance 1 from "mesas"; only "meses" has its length.
        assert_eq!(corrector.correct("mesas", &mut cache), Some("meses".to_string()));
    }

    #[test]
    fn first_word_kept_when_tie_has_wrong_length() {
        let vocab = CountingVocabulary::new(&["mesa", "mesass"]);
        let sugg = no_suggestions();
        let corrector = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let mut cache = CorrectionCache::new();
        assert_eq!(corrector.correct("mesas", &mut cache), Some("mesa".to_string()));
    }

    #[test]
    fn strictly_closer_word_wins_regardless_of_length() {
        let vocab = CountingVocabulary::new(&["gatas", "gato"]);
        let sugg = no_suggestions();
        let corrector = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let mut cache = CorrectionCache::new();
        // "gatas" is at distance 2 from "gatoz", "gato" at distance 1.
        assert_eq!(corrector.correct("gatoz", &mut cache), Some("gato".to_string()));
    }

    #[test]
    fn zero_distance_stops_the_scan() {
        let vocab = CountingVocabulary::new(&["isla", "mar", "norte", "siglo", "mapa"]);
        let sugg = no_suggestions();
        let corrector = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let mut cache = CorrectionCache::new();
        assert_eq!(corrector.correct("mar", &mut cache), Some("mar".to_string()));
        assert_eq!(vocab.yielded.get(), 2);
    }

    #[test]
    fn too_distant_words_are_rejected() {
        let vocab = CountingVocabulary::new(&["isla", "mar"]);
        let sugg = no_suggestions();
        let corrector = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let mut cache = CorrectionCache::new();
        assert_eq!(corrector.correct("azkaban", &mut cache), None);
        assert!(cache.is_empty());
        assert_eq!(cache.miss_count(), 1);
    }

    #[test]
    fn threshold_is_configurable() {
        let vocab = CountingVocabulary::new(&["agrandada"]);
        let sugg = no_suggestions();
        let strict = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let mut cache = CorrectionCache::new();
        assert_eq!(
            strict.correct("agrandadas", &mut cache),
            Some("agrandada".to_string())
        );
        assert_eq!(strict.correct("agrndadas", &mut cache), None);

        let loose = SpellCorrector::new(&sugg, &vocab, CorrectorOptions { max_distance: 2 });
        let mut cache = CorrectionCache::new();
        assert_eq!(
            loose.correct("agrndadas", &mut cache),
            Some("agrandada".to_string())
        );
    }

    #[test]
    fn raised_threshold_searches_a_remembered_miss_again() {
        let vocab = CountingVocabulary::new(&["fortaleza"]);
        let sugg = no_suggestions();
        let strict = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let loose = SpellCorrector::new(&sugg, &vocab, CorrectorOptions { max_distance: 2 });
        let mut cache = CorrectionCache::new();

        assert_eq!(strict.correct("frtalezaa", &mut cache), None);
        assert_eq!(strict.correct("frtalezaa", &mut cache), None);
        assert_eq!(vocab.scans.get(), 1);

        assert_eq!(
            loose.correct("frtalezaa", &mut cache),
            Some("fortaleza".to_string())
        );
        assert_eq!(vocab.scans.get(), 2);
        assert_eq!(cache.miss_count(), 0);
    }

    #[test]
    fn empty_vocabulary_finds_nothing() {
        let vocab = CountingVocabulary::new(&[]);
        let sugg = no_suggestions();
        let corrector = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        assert_eq!(corrector.correct("mesas", &mut CorrectionCache::new()), None);
    }

    #[test]
    fn first_acceptable_suggestion_wins_without_vocabulary_scan() {
        let vocab = CountingVocabulary::new(&["fortaleza"]);
        let sugg = FixedSuggestions(vec![(
            "fortal\u{00E9}za",
            vec!["fortalezas", "fortaleza", "fortalecer"],
        )]);
        let corrector = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let mut cache = CorrectionCache::new();
        // "fortalezas" is at distance 2, "fortaleza" at distance 1.
        assert_eq!(
            corrector.correct("fortal\u{00E9}za", &mut cache),
            Some("fortaleza".to_string())
        );
        assert_eq!(vocab.scans.get(), 0);
        assert_eq!(cache.get("fortal\u{00E9}za"), Some("fortaleza"));
    }

    #[test]
    fn rejected_suggestions_fall_back_to_vocabulary() {
        let vocab = CountingVocabulary::new(&["mapa"]);
        let sugg = FixedSuggestions(vec![("mapas", vec!["campanas", "papas"])]);
        let corrector = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let mut cache = CorrectionCache::new();
        // "papas" is at distance 1 and is accepted before any vocabulary scan.
        assert_eq!(corrector.correct("mapas", &mut cache), Some("papas".to_string()));
        assert_eq!(vocab.scans.get(), 0);

        let sugg = FixedSuggestions(vec![("mapas", vec!["campanas"])]);
        let corrector = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let mut cache = CorrectionCache::new();
        assert_eq!(corrector.correct("mapas", &mut cache), Some("mapa".to_string()));
        assert_eq!(vocab.scans.get(), 1);
    }

    #[test]
    fn suggestion_failure_degrades_to_vocabulary_scan() {
        let vocab = CountingVocabulary::new(&["mesa"]);
        let sugg = FailingSuggestions;
        let corrector = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let mut cache = CorrectionCache::new();
        assert_eq!(corrector.correct("mesas", &mut cache), Some("mesa".to_string()));
    }

    #[test]
    fn second_call_uses_cache() {
        let vocab = CountingVocabulary::new(&["gato", "gatos", "perro"]);
        let sugg = no_suggestions();
        let corrector = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let mut cache = CorrectionCache::new();

        let first = corrector.correct("gatox", &mut cache);
        assert_eq!(vocab.scans.get(), 1);
        let second = corrector.correct("gatox", &mut cache);
        assert_eq!(first, second);
        assert_eq!(vocab.scans.get(), 1);
    }

    #[test]
    fn uncorrectable_token_is_not_rescanned() {
        let vocab = CountingVocabulary::new(&["isla"]);
        let sugg = no_suggestions();
        let corrector = SpellCorrector::new(&sugg, &vocab, CorrectorOptions::default());
        let mut cache = CorrectionCache::new();
        assert_eq!(corrector.correct("muggle", &mut cache), None);
        assert_eq!(corrector.correct("muggle", &mut cache), None);
        assert_eq!(vocab.scans.get(), 1);
    }
}
