// Two-tier token classification with spelling correction of unknown nouns

use lexema_core::character::SPANISH_VOWELS;
use lexema_core::{AnalysisEntry, Category, WordClass};

use crate::speller::{CorrectionCache, Dictionary, SpellCorrector};
use crate::tagging::{FrequencyTable, ShallowParser, category_from_marker};

/// Classifier options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierOptions {
    /// Map every shallow-parse result that is not a noun, verb or adjective
    /// to a conjunction, as older releases did. Off by default.
    pub legacy_conjunction_fallback: bool,
    /// A token is only sent to the corrector if it contains one of these.
    pub vowels: Vec<char>,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            legacy_conjunction_fallback: false,
            vowels: SPANISH_VOWELS.to_vec(),
        }
    }
}

/// Assigns a category to a single token.
///
/// 1. Tier 1: the frequency table's highest-ranked tag for the token.
/// 2. Tier 2: the shallow parser's marker, reduced to a bare class.
/// 3. A tier-2 noun may be a misspelling. If corrections are allowed, the
///    token has a vowel and no foreign dictionary knows it, the corrector
///    runs; a different correction is classified again with corrections
///    disabled and replaces the tier-2 result.
///
/// The returned entry carries the token it classifies, which is the
/// corrected token whenever a correction was applied.
pub struct Classifier<'a> {
    frequency: &'a FrequencyTable,
    parser: &'a dyn ShallowParser,
    corrector: SpellCorrector<'a>,
    foreign: Vec<&'a dyn Dictionary>,
    options: ClassifierOptions,
}

impl<'a> Classifier<'a> {
    pub fn new(
        frequency: &'a FrequencyTable,
        parser: &'a dyn ShallowParser,
        corrector: SpellCorrector<'a>,
        options: ClassifierOptions,
    ) -> Self {
        Self {
            frequency,
            parser,
            corrector,
            foreign: Vec::new(),
            options,
        }
    }

    /// Add a foreign-language dictionary. Tokens it contains are never
    /// corrected.
    pub fn with_foreign_dictionary(mut self, dictionary: &'a dyn Dictionary) -> Self {
        self.foreign.push(dictionary);
        self
    }

    pub fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    /// Classify `token`, correcting it first if allowed and needed.
    pub fn classify(
        &self,
        token: &str,
        corrections_allowed: bool,
        cache: &mut CorrectionCache,
    ) -> AnalysisEntry {
        if let Some(category) = self.frequency.category(token) {
            log::trace!("{token}: tagged corpus -> {category}");
            return AnalysisEntry::new(token, category);
        }

        let category = self.shallow_category(token);
        log::trace!("{token}: shallow parse -> {category}");

        if corrections_allowed && self.should_correct(token, &category) {
            if let Some(corrected) = self.corrector.correct(token, cache) {
                if corrected != token {
                    return self.classify(&corrected, false, cache);
                }
            }
        }

        AnalysisEntry::new(token, category)
    }

    fn shallow_category(&self, token: &str) -> Category {
        match self.parser.parse(token) {
            Ok(marker) => category_from_marker(&marker, self.options.legacy_conjunction_fallback),
            Err(e) => {
                log::warn!("shallow parse failed for {token:?}: {e}");
                Category::unknown()
            }
        }
    }

    fn should_correct(&self, token: &str, category: &Category) -> bool {
        category.class() == WordClass::Noun
            && token.chars().any(|c| self.options.vowels.contains(&c))
            && !self.is_foreign(token)
    }

    fn is_foreign(&self, token: &str) -> bool {
        self.foreign.iter().any(|d| d.contains(token))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use hashbrown::HashMap;

    use super::*;
    use crate::speller::{CorrectorOptions, LookupError, SuggestionSource, Vocabulary, WordList};

    /// Parser with fixed tags per word; everything else is a noun.
    struct MapParser {
        tags: HashMap<String, String>,
        calls: Cell<usize>,
    }

    impl MapParser {
        fn new(tags: &[(&str, &str)]) -> Self {
            Self {
                tags: tags
                    .iter()
                    .map(|(w, t)| (w.to_string(), t.to_string()))
                    .collect(),
                calls: Cell::new(0),
            }
        }
    }

    impl ShallowParser for MapParser {
        fn parse(&self, word: &str) -> Result<String, LookupError> {
            self.calls.set(self.calls.get() + 1);
            let tag = self.tags.get(word).map(String::as_str).unwrap_or("NN");
            Ok(format!("{word}/{tag}"))
        }
    }

    struct BrokenParser;

    impl ShallowParser for BrokenParser {
        fn parse(&self, _word: &str) -> Result<String, LookupError> {
            Err(LookupError::Unavailable("no model".into()))
        }
    }

    /// Word list that counts suggestion queries and vocabulary scans.
    struct CountingList {
        list: WordList,
        queries: Cell<usize>,
        scans: Cell<usize>,
    }

    impl CountingList {
        fn new(words: &[&str]) -> Self {
            Self {
                list: WordList::from_words(words.iter().copied()),
                queries: Cell::new(0),
                scans: Cell::new(0),
            }
        }
    }

    impl SuggestionSource for CountingList {
        fn suggest(&self, word: &str) -> Result<Vec<String>, LookupError> {
            self.queries.set(self.queries.get() + 1);
            self.list.suggest(word)
        }
    }

    impl Vocabulary for CountingList {
        fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
            self.scans.set(self.scans.get() + 1);
            self.list.words()
        }
    }

    fn frequency(pairs: &[(&str, &str)]) -> FrequencyTable {
        FrequencyTable::from_tagged_words(pairs.iter().copied())
    }

    fn classifier<'a>(
        freq: &'a FrequencyTable,
        parser: &'a dyn ShallowParser,
        words: &'a CountingList,
        options: ClassifierOptions,
    ) -> Classifier<'a> {
        let corrector = SpellCorrector::new(words, words, CorrectorOptions::default());
        Classifier::new(freq, parser, corrector, options)
    }

    #[test]
    fn tagged_corpus_hit_skips_everything_else() {
        let freq = frequency(&[("isla", "ncfs000")]);
        let parser = MapParser::new(&[]);
        let words = CountingList::new(&["isla", "islas"]);
        let c = classifier(&freq, &parser, &words, ClassifierOptions::default());
        let mut cache = CorrectionCache::new();

        let entry = c.classify("isla", true, &mut cache);
        assert_eq!(entry, AnalysisEntry::new("isla", Category::from_tag("ncfs000")));
        assert_eq!(parser.calls.get(), 0);
        assert_eq!(words.queries.get(), 0);
        assert_eq!(words.scans.get(), 0);
    }

    #[test]
    fn tagged_corpus_tag_is_padded() {
        let freq = frequency(&[("y", "cc")]);
        let parser = MapParser::new(&[]);
        let words = CountingList::new(&[]);
        let c = classifier(&freq, &parser, &words, ClassifierOptions::default());
        let entry = c.classify("y", true, &mut CorrectionCache::new());
        assert_eq!(entry.category.tag(), "cc00000");
    }

    #[test]
    fn misspelled_plural_is_corrected_and_reclassified() {
        let freq = frequency(&[("mesa", "ncfs000")]);
        let parser = MapParser::new(&[]);
        let words = CountingList::new(&["mesa"]);
        let c = classifier(&freq, &parser, &words, ClassifierOptions::default());
        let mut cache = CorrectionCache::new();

        let entry = c.classify("mesas", true, &mut cache);
        assert_eq!(entry.token, "mesa");
        assert_eq!(entry.class(), WordClass::Noun);
        assert_eq!(entry.category.tag(), "ncfs000");
        assert_eq!(cache.get("mesas"), Some("mesa"));
    }

    #[test]
    fn corrections_disabled_keeps_tier_two_result() {
        let freq = frequency(&[("mesa", "ncfs000")]);
        let parser = MapParser::new(&[]);
        let words = CountingList::new(&["mesa"]);
        let c = classifier(&freq, &parser, &words, ClassifierOptions::default());

        let entry = c.classify("mesas", false, &mut CorrectionCache::new());
        assert_eq!(entry, AnalysisEntry::new("mesas", Category::noun()));
        assert_eq!(words.queries.get(), 0);
    }

    #[test]
    fn correction_recurses_at_most_once() {
        // "gato" is not in the tagged corpus and parses as a noun, so a
        // second correction round would query again.
        let freq = frequency(&[]);
        let parser = MapParser::new(&[]);
        let words = CountingList::new(&["gato", "gatos"]);
        let c = classifier(&freq, &parser, &words, ClassifierOptions::default());
        let mut cache = CorrectionCache::new();

        // Deletion outranks replacement among the suggestions.
        let entry = c.classify("gatox", true, &mut cache);
        assert_eq!(entry, AnalysisEntry::new("gato", Category::noun()));
        assert_eq!(words.queries.get(), 1);
        assert_eq!(parser.calls.get(), 2);
    }

    #[test]
    fn only_nouns_are_corrected() {
        let freq = frequency(&[]);
        let parser = MapParser::new(&[("creadas", "VBN")]);
        let words = CountingList::new(&["creada"]);
        let c = classifier(&freq, &parser, &words, ClassifierOptions::default());

        let entry = c.classify("creadas", true, &mut CorrectionCache::new());
        assert_eq!(entry, AnalysisEntry::new("creadas", Category::verb()));
        assert_eq!(words.queries.get(), 0);
    }

    #[test]
    fn tokens_without_vowels_are_not_corrected() {
        let freq = frequency(&[]);
        let parser = MapParser::new(&[]);
        let words = CountingList::new(&["brr"]);
        let c = classifier(&freq, &parser, &words, ClassifierOptions::default());

        let entry = c.classify("brrr", true, &mut CorrectionCache::new());
        assert_eq!(entry.token, "brrr");
        assert_eq!(words.queries.get(), 0);
    }

    #[test]
    fn accented_vowels_count_as_vowels() {
        let freq = frequency(&[]);
        let parser = MapParser::new(&[]);
        let words = CountingList::new(&["tan"]);
        let c = classifier(&freq, &parser, &words, ClassifierOptions::default());

        let entry = c.classify("t\u{00FA}n", true, &mut CorrectionCache::new());
        assert_eq!(entry.token, "tan");
    }

    #[test]
    fn foreign_words_are_not_corrected() {
        let freq = frequency(&[]);
        let parser = MapParser::new(&[]);
        let words = CountingList::new(&["mugre"]);
        let english = WordList::from_words(["muggle", "prison"]);
        let c = classifier(&freq, &parser, &words, ClassifierOptions::default())
            .with_foreign_dictionary(&english);

        let entry = c.classify("muggle", true, &mut CorrectionCache::new());
        assert_eq!(entry, AnalysisEntry::new("muggle", Category::noun()));
        assert_eq!(words.queries.get(), 0);
    }

    #[test]
    fn identity_correction_keeps_tier_two_entry() {
        // Known to the vocabulary but absent from the tagged corpus.
        let freq = frequency(&[]);
        let parser = MapParser::new(&[]);
        let words = CountingList::new(&["norte"]);
        let c = classifier(&freq, &parser, &words, ClassifierOptions::default());

        let entry = c.classify("norte", true, &mut CorrectionCache::new());
        assert_eq!(entry, AnalysisEntry::new("norte", Category::noun()));
        assert_eq!(parser.calls.get(), 1);
    }

    #[test]
    fn uncorrectable_noun_stays_noun() {
        let freq = frequency(&[]);
        let parser = MapParser::new(&[]);
        let words = CountingList::new(&["isla"]);
        let c = classifier(&freq, &parser, &words, ClassifierOptions::default());

        let entry = c.classify("azkaban", true, &mut CorrectionCache::new());
        assert_eq!(entry, AnalysisEntry::new("azkaban", Category::noun()));
    }

    #[test]
    fn conjunction_markers_in_fixed_mode() {
        let freq = frequency(&[]);
        let parser = MapParser::new(&[("pero", "CC"), ("ella", "PRP"), ("muy", "RB")]);
        let words = CountingList::new(&[]);
        let c = classifier(&freq, &parser, &words, ClassifierOptions::default());
        let mut cache = CorrectionCache::new();

        assert_eq!(c.classify("pero", true, &mut cache).class(), WordClass::Conjunction);
        assert_eq!(c.classify("ella", true, &mut cache).class(), WordClass::Pronoun);
        assert_eq!(c.classify("muy", true, &mut cache).class(), WordClass::Unknown);
    }

    #[test]
    fn conjunction_markers_in_legacy_mode() {
        let freq = frequency(&[]);
        let parser = MapParser::new(&[("pero", "CC"), ("ella", "PRP"), ("muy", "RB")]);
        let words = CountingList::new(&[]);
        let options = ClassifierOptions {
            legacy_conjunction_fallback: true,
            ..ClassifierOptions::default()
        };
        let c = classifier(&freq, &parser, &words, options);
        let mut cache = CorrectionCache::new();

        assert_eq!(c.classify("pero", true, &mut cache).class(), WordClass::Conjunction);
        assert_eq!(c.classify("ella", true, &mut cache).class(), WordClass::Conjunction);
        assert_eq!(c.classify("muy", true, &mut cache).class(), WordClass::Conjunction);
    }

    #[test]
    fn parser_failure_means_unknown() {
        let freq = frequency(&[]);
        let words = CountingList::new(&["mesa"]);
        let c = classifier(&freq, &BrokenParser, &words, ClassifierOptions::default());

        let entry = c.classify("mesas", true, &mut CorrectionCache::new());
        assert_eq!(entry, AnalysisEntry::new("mesas", Category::unknown()));
        assert_eq!(words.queries.get(), 0);
    }

    #[test]
    fn classification_is_deterministic() {
        let freq = frequency(&[("mesa", "ncfs000"), ("mar", "ncms000")]);
        let parser = MapParser::new(&[]);
        let words = CountingList::new(&["mesa", "mar", "meses"]);
        let c = classifier(&freq, &parser, &words, ClassifierOptions::default());

        for token in ["mesas", "mar", "azkaban"] {
            let a = c.classify(token, true, &mut CorrectionCache::new());
            let b = c.classify(token, true, &mut CorrectionCache::new());
            assert_eq!(a, b);
        }
    }
}
