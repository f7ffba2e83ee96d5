// Lexicon: the language resources a corpus session analyzes against.
//
// A lexicon owns every collaborator of the pipeline (frequency table,
// shallow parser, spelling services, foreign dictionaries, stopwords,
// lemmatizer, synonym source). Sessions borrow it; the classifier and
// corrector are lightweight views created on the fly for each analysis
// pass. The vocabulary and suggestion source are reference counted so one
// word list can serve as both.

use std::rc::Rc;

use crate::classifier::{Classifier, ClassifierOptions};
use crate::data::{DataError, parse_tagged};
use crate::lemma::{Lemmatizer, SpanishInflector};
use crate::speller::{
    CorrectorOptions, Dictionary, SpellCorrector, SuggestionSource, Vocabulary, WordList,
};
use crate::stopwords::StopWords;
use crate::synonyms::{SynonymSource, SynonymTable};
use crate::tagging::{FrequencyTable, ShallowParser, SuffixTagger};

/// Error type for lexicon construction.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// A data file could not be parsed.
    #[error("invalid data file: {0}")]
    Data(#[from] DataError),

    /// The tagged corpus has no entries.
    #[error("tagged corpus {0} is empty")]
    EmptyCorpus(String),
}

/// Language resources shared by corpus sessions.
pub struct Lexicon {
    frequency: FrequencyTable,
    parser: Box<dyn ShallowParser>,
    suggestions: Rc<dyn SuggestionSource>,
    vocabulary: Rc<dyn Vocabulary>,
    foreign: Vec<Box<dyn Dictionary>>,
    stop_words: StopWords,
    lemmatizer: Box<dyn Lemmatizer>,
    synonyms: Box<dyn SynonymSource>,
}

impl Lexicon {
    /// Lexicon over a tagged corpus, in corpus order.
    ///
    /// The distinct corpus words, in order of first appearance, become the
    /// reference vocabulary and the suggestion dictionary. Everything else
    /// starts with the built-in Spanish defaults: the suffix tagger, the
    /// rule-based inflector, no stopwords, no synonyms, no foreign
    /// dictionaries.
    pub fn from_tagged_words<I, W, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, T)>,
        W: Into<String>,
        T: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(w, t)| (w.into(), t.into()))
            .collect();
        let words = WordList::from_words(pairs.iter().map(|(w, _)| w.as_str()));
        let frequency = FrequencyTable::from_tagged_words(pairs);
        Self::new(frequency, words)
    }

    /// Parse a tagged corpus file (`word<TAB>tag` per line).
    pub fn from_tagged_text(file: &str, text: &str) -> Result<Self, LexiconError> {
        let pairs = parse_tagged(file, text)?;
        if pairs.is_empty() {
            return Err(LexiconError::EmptyCorpus(file.to_string()));
        }
        Ok(Self::from_tagged_words(pairs))
    }

    /// Lexicon with an explicit frequency table and vocabulary word list.
    pub fn new(frequency: FrequencyTable, words: WordList) -> Self {
        let words = Rc::new(words);
        Self {
            frequency,
            parser: Box::new(SuffixTagger::spanish()),
            suggestions: words.clone(),
            vocabulary: words,
            foreign: Vec::new(),
            stop_words: StopWords::new(),
            lemmatizer: Box::new(SpanishInflector::new()),
            synonyms: Box::new(SynonymTable::new()),
        }
    }

    // =========================================================================
    // Collaborator setters
    // =========================================================================

    pub fn with_parser(mut self, parser: impl ShallowParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    pub fn with_suggestion_source(mut self, source: impl SuggestionSource + 'static) -> Self {
        self.suggestions = Rc::new(source);
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: impl Vocabulary + 'static) -> Self {
        self.vocabulary = Rc::new(vocabulary);
        self
    }

    /// Use one word list as both vocabulary and suggestion source.
    pub fn with_word_list(mut self, words: WordList) -> Self {
        let words = Rc::new(words);
        self.suggestions = words.clone();
        self.vocabulary = words;
        self
    }

    /// Add a foreign-language dictionary for the correction guard.
    pub fn with_foreign_dictionary(mut self, dictionary: impl Dictionary + 'static) -> Self {
        self.foreign.push(Box::new(dictionary));
        self
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: impl Lemmatizer + 'static) -> Self {
        self.lemmatizer = Box::new(lemmatizer);
        self
    }

    pub fn with_synonyms(mut self, synonyms: impl SynonymSource + 'static) -> Self {
        self.synonyms = Box::new(synonyms);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn frequency(&self) -> &FrequencyTable {
        &self.frequency
    }

    pub fn parser(&self) -> &dyn ShallowParser {
        self.parser.as_ref()
    }

    pub fn suggestions(&self) -> &dyn SuggestionSource {
        self.suggestions.as_ref()
    }

    pub fn vocabulary(&self) -> &dyn Vocabulary {
        self.vocabulary.as_ref()
    }

    pub fn foreign_dictionary_count(&self) -> usize {
        self.foreign.len()
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn lemmatizer(&self) -> &dyn Lemmatizer {
        self.lemmatizer.as_ref()
    }

    pub fn synonyms(&self) -> &dyn SynonymSource {
        self.synonyms.as_ref()
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// A corrector over this lexicon's spelling services.
    pub fn corrector(&self, options: CorrectorOptions) -> SpellCorrector<'_> {
        SpellCorrector::new(self.suggestions(), self.vocabulary(), options)
    }

    /// A classifier over this lexicon, guarded by every foreign dictionary.
    pub fn classifier(
        &self,
        corrector_options: CorrectorOptions,
        options: ClassifierOptions,
    ) -> Classifier<'_> {
        self.foreign.iter().fold(
            Classifier::new(
                &self.frequency,
                self.parser(),
                self.corrector(corrector_options),
                options,
            ),
            |classifier, dictionary| classifier.with_foreign_dictionary(dictionary.as_ref()),
        )
    }
}
