//! Spanish clean-corpus pipeline.
//!
//! Builds a normalized, lexically classified token stream from raw Spanish
//! text: tokenize, clean, drop stopwords, classify each token by part of
//! speech (correcting misspelled nouns on the way), drop function words,
//! reduce inflected forms to lemmas and attach synonyms.
//!
//! - [`corpus`] -- the session running every pipeline stage
//! - [`lexicon`] -- the language resources a session analyzes against
//! - [`classifier`] / [`driver`] -- two-tier classification of a token sequence
//! - [`speller`] -- spelling services and the edit-distance corrector
//! - [`suggestion`] -- edit-operation suggestion search
//! - [`tagging`] -- tagged-corpus frequency table and shallow parser
//! - [`distance`] -- edit distance
//! - [`tokenizer`], [`stopwords`], [`lemma`], [`synonyms`], [`frequencies`]
//! - [`data`] -- data file parsers
//!
//! ```
//! use lexema_es::{Corpus, Lexicon};
//!
//! let lexicon = Lexicon::from_tagged_words([("mesa", "ncfs000"), ("isla", "ncfs000")]);
//! let mut corpus = Corpus::new(&lexicon, "Las mesas de la isla");
//! corpus.tokenize().unwrap();
//! corpus.clean().unwrap();
//! corpus.analyze(true).unwrap();
//! assert_eq!(corpus.return_to_text().unwrap(), "las mesa isla");
//! ```

pub mod classifier;
pub mod corpus;
pub mod data;
pub mod distance;
pub mod driver;
pub mod frequencies;
pub mod lemma;
pub mod lexicon;
pub mod speller;
pub mod stopwords;
pub mod suggestion;
pub mod synonyms;
pub mod tagging;
pub mod tokenizer;

pub use classifier::{Classifier, ClassifierOptions};
pub use corpus::{Corpus, CorpusError, CorpusOptions};
pub use data::DataError;
pub use driver::AnalysisDriver;
pub use frequencies::FrequencyDistribution;
pub use lemma::{Lemmatizer, SpanishInflector};
pub use lexicon::{Lexicon, LexiconError};
pub use speller::{
    CorrectionCache, CorrectorOptions, Dictionary, LookupError, SpellCorrector,
    SuggestionSource, Vocabulary, WordList,
};
pub use stopwords::StopWords;
pub use synonyms::{SynonymSource, SynonymTable};
pub use tagging::{FrequencyTable, ShallowParser, SuffixTagger};
