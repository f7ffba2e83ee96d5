// Corpus session: runs the clean-corpus pipeline over one text.
//
// Stages are meant to run in this order:
//   tokenize -> clean -> filter_stop_words -> analyze -> clean_post_analysis
//   -> unify_tokens -> synonymize -> calculate_frequencies
// Each stage checks that its input exists and otherwise fails with a
// sequencing error. Rebuilding the token sequence (tokenize, clean,
// filter_stop_words) discards the analysis, synonyms and frequencies
// derived from the previous sequence. The correction cache outlives all
// of it: it survives re-analysis and text changes, and can be moved to
// another session over the same lexicon.

use std::fmt;
use std::time::Instant;

use lexema_core::{AnalysisEntry, SynonymEntry, WordClass};

use crate::classifier::ClassifierOptions;
use crate::driver::AnalysisDriver;
use crate::frequencies::FrequencyDistribution;
use crate::lexicon::Lexicon;
use crate::speller::{CorrectionCache, CorrectorOptions};
use crate::tokenizer;

/// Error returned when a stage runs before its input exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorpusError {
    #[error("{stage}: no tokens, run tokenize first")]
    NotTokenized { stage: &'static str },
    #[error("{stage}: no analysis, run analyze first")]
    NotAnalyzed { stage: &'static str },
}

/// Session options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusOptions {
    /// Log each stage's wall-clock time at `info` level.
    pub timing: bool,
    pub corrector: CorrectorOptions,
    pub classifier: ClassifierOptions,
}

/// A text and everything derived from it by the pipeline stages.
pub struct Corpus<'l> {
    lexicon: &'l Lexicon,
    options: CorpusOptions,
    text: String,
    tokens: Option<Vec<String>>,
    analysis: Option<Vec<AnalysisEntry>>,
    synonyms: Option<Vec<SynonymEntry>>,
    frequencies: Option<FrequencyDistribution>,
    cache: CorrectionCache,
}

impl<'l> Corpus<'l> {
    pub fn new(lexicon: &'l Lexicon, text: impl Into<String>) -> Self {
        Self::with_options(lexicon, text, CorpusOptions::default())
    }

    pub fn with_options(
        lexicon: &'l Lexicon,
        text: impl Into<String>,
        options: CorpusOptions,
    ) -> Self {
        Self {
            lexicon,
            options,
            text: text.into(),
            tokens: None,
            analysis: None,
            synonyms: None,
            frequencies: None,
            cache: CorrectionCache::new(),
        }
    }

    /// Replace the correction cache, e.g. with one from an earlier session.
    /// The cache should come from a session over the same lexicon: its
    /// remembered misses are only valid for that vocabulary.
    pub fn with_cache(mut self, cache: CorrectionCache) -> Self {
        self.cache = cache;
        self
    }

    /// End the session, keeping its correction cache.
    pub fn into_cache(self) -> CorrectionCache {
        self.cache
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Every derived stage is reset; the correction cache
    /// is kept.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.tokens = None;
        self.reset_derived();
    }

    pub fn tokens(&self) -> Option<&[String]> {
        self.tokens.as_deref()
    }

    pub fn analysis(&self) -> Option<&[AnalysisEntry]> {
        self.analysis.as_deref()
    }

    pub fn synonyms(&self) -> Option<&[SynonymEntry]> {
        self.synonyms.as_deref()
    }

    pub fn frequencies(&self) -> Option<&FrequencyDistribution> {
        self.frequencies.as_ref()
    }

    pub fn cache(&self) -> &CorrectionCache {
        &self.cache
    }

    /// Corrections accepted so far, sorted by misspelled token.
    pub fn corrected_words(&self) -> Vec<(&str, &str)> {
        self.cache.corrections()
    }

    pub fn options(&self) -> &CorpusOptions {
        &self.options
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set whether stage timings are logged.
    pub fn set_timing(&mut self, value: bool) {
        self.options.timing = value;
    }

    /// Set the maximum edit distance of an accepted correction. Tokens that
    /// found no correction under a smaller distance are searched again.
    pub fn set_max_distance(&mut self, value: usize) {
        self.options.corrector.max_distance = value;
    }

    /// Set whether unrecognized shallow-parse markers become conjunctions.
    pub fn set_legacy_conjunction_fallback(&mut self, value: bool) {
        self.options.classifier.legacy_conjunction_fallback = value;
    }

    // =========================================================================
    // Stages
    // =========================================================================

    /// Split the text into word and punctuation tokens.
    pub fn tokenize(&mut self) -> Result<&[String], CorpusError> {
        self.timed("tokenize", |c| {
            c.tokens = Some(tokenizer::tokenize_words(&c.text));
            c.reset_derived();
            Ok(())
        })?;
        self.require_tokens("tokenize")
    }

    /// Lowercase the tokens and keep alphabetic ones longer than two
    /// characters.
    pub fn clean(&mut self) -> Result<&[String], CorpusError> {
        self.timed("clean", |c| {
            let tokens = c
                .tokens
                .take()
                .ok_or(CorpusError::NotTokenized { stage: "clean" })?;
            c.tokens = Some(tokenizer::clean(tokens));
            c.reset_derived();
            Ok(())
        })?;
        self.require_tokens("clean")
    }

    /// Drop the lexicon's stopwords.
    pub fn filter_stop_words(&mut self) -> Result<&[String], CorpusError> {
        self.timed("filter_stop_words", |c| {
            let tokens = c.tokens.take().ok_or(CorpusError::NotTokenized {
                stage: "filter_stop_words",
            })?;
            c.tokens = Some(c.lexicon.stop_words().filter(tokens));
            c.reset_derived();
            Ok(())
        })?;
        self.require_tokens("filter_stop_words")
    }

    /// Classify every token, correcting misspelled nouns if `correct` is
    /// set. Corrected tokens replace the originals.
    pub fn analyze(&mut self, correct: bool) -> Result<&[AnalysisEntry], CorpusError> {
        self.timed("analyze", |c| {
            let lexicon = c.lexicon;
            let tokens = c
                .tokens
                .as_mut()
                .ok_or(CorpusError::NotTokenized { stage: "analyze" })?;
            let classifier =
                lexicon.classifier(c.options.corrector, c.options.classifier.clone());
            let analysis = AnalysisDriver::new(&classifier).analyze(tokens, correct, &mut c.cache);
            c.analysis = Some(analysis);
            Ok(())
        })?;
        self.require_analysis("analyze")
    }

    /// Drop determiners, pronouns and conjunctions from tokens, analysis and
    /// synonyms alike. Frequencies are recomputed if they were calculated.
    pub fn clean_post_analysis(&mut self) -> Result<&[String], CorpusError> {
        const STAGE: &str = "clean_post_analysis";
        self.timed(STAGE, |c| {
            let analysis = c
                .analysis
                .take()
                .ok_or(CorpusError::NotAnalyzed { stage: STAGE })?;
            let tokens = c
                .tokens
                .take()
                .ok_or(CorpusError::NotTokenized { stage: STAGE })?;

            let keep: Vec<bool> = analysis
                .iter()
                .map(|e| !e.class().is_function_word())
                .collect();

            c.tokens = Some(retain_aligned(tokens, &keep));
            c.analysis = Some(retain_aligned(analysis, &keep));
            c.synonyms = c.synonyms.take().map(|s| retain_aligned(s, &keep));
            if c.frequencies.is_some() {
                c.frequencies = c.tokens.as_deref().map(FrequencyDistribution::from_tokens);
            }
            Ok(())
        })?;
        self.require_tokens(STAGE)
    }

    /// Replace nouns by their singular, verbs by their infinitive and
    /// adjectives by their masculine singular form.
    pub fn unify_tokens(&mut self) -> Result<&[String], CorpusError> {
        const STAGE: &str = "unify_tokens";
        self.timed(STAGE, |c| {
            let lemmatizer = c.lexicon.lemmatizer();
            let analysis = c
                .analysis
                .as_deref()
                .ok_or(CorpusError::NotAnalyzed { stage: STAGE })?;
            let tokens = c
                .tokens
                .as_mut()
                .ok_or(CorpusError::NotTokenized { stage: STAGE })?;

            for (token, entry) in tokens.iter_mut().zip(analysis) {
                let unified = match entry.class() {
                    WordClass::Noun => lemmatizer.singularize(token),
                    WordClass::Verb => lemmatizer.infinitive(token),
                    WordClass::Adjective => lemmatizer.predicative(token),
                    _ => continue,
                };
                *token = unified;
            }
            Ok(())
        })?;
        self.require_tokens(STAGE)
    }

    /// Collect synonyms for every noun and verb. Other tokens get an empty
    /// list.
    pub fn synonymize(&mut self) -> Result<&[SynonymEntry], CorpusError> {
        const STAGE: &str = "synonymize";
        self.timed(STAGE, |c| {
            let source = c.lexicon.synonyms();
            let analysis = c
                .analysis
                .as_deref()
                .ok_or(CorpusError::NotAnalyzed { stage: STAGE })?;
            let tokens = c
                .tokens
                .as_deref()
                .ok_or(CorpusError::NotTokenized { stage: STAGE })?;

            let synonyms: Vec<SynonymEntry> = tokens
                .iter()
                .zip(analysis)
                .map(|(token, entry)| {
                    let class = entry.class();
                    let mut found: Vec<String> = Vec::new();
                    if matches!(class, WordClass::Noun | WordClass::Verb) {
                        for synonym in source.synonyms(token, class) {
                            if synonym != *token && !found.contains(&synonym) {
                                found.push(synonym);
                            }
                        }
                    }
                    SynonymEntry::new(token.as_str(), found)
                })
                .collect();
            c.synonyms = Some(synonyms);
            Ok(())
        })?;
        Ok(self.synonyms.as_deref().unwrap_or_default())
    }

    /// Count token occurrences.
    pub fn calculate_frequencies(&mut self) -> Result<&FrequencyDistribution, CorpusError> {
        const STAGE: &str = "calculate_frequencies";
        self.timed(STAGE, |c| {
            let tokens = c
                .tokens
                .as_deref()
                .ok_or(CorpusError::NotTokenized { stage: STAGE })?;
            c.frequencies = Some(FrequencyDistribution::from_tokens(tokens));
            Ok(())
        })?;
        self.frequencies
            .as_ref()
            .ok_or(CorpusError::NotTokenized { stage: STAGE })
    }

    /// The tokens joined by single spaces.
    pub fn return_to_text(&self) -> Result<String, CorpusError> {
        Ok(self.require_tokens("return_to_text")?.join(" "))
    }

    /// The numbered results report. Stages that produced nothing are left
    /// out.
    pub fn report(&self) -> String {
        self.to_string()
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn reset_derived(&mut self) {
        self.analysis = None;
        self.synonyms = None;
        self.frequencies = None;
    }

    fn require_tokens(&self, stage: &'static str) -> Result<&[String], CorpusError> {
        self.tokens
            .as_deref()
            .ok_or(CorpusError::NotTokenized { stage })
    }

    fn require_analysis(&self, stage: &'static str) -> Result<&[AnalysisEntry], CorpusError> {
        self.analysis
            .as_deref()
            .ok_or(CorpusError::NotAnalyzed { stage })
    }

    /// Run a stage, logging its duration if timing is enabled.
    fn timed<F>(&mut self, stage: &'static str, run: F) -> Result<(), CorpusError>
    where
        F: FnOnce(&mut Self) -> Result<(), CorpusError>,
    {
        if !self.options.timing {
            return run(self);
        }
        let start = Instant::now();
        let result = run(self);
        log::info!(
            "{stage:<25} --- {:.6} sec",
            start.elapsed().as_secs_f64()
        );
        result
    }
}

/// Keep the items whose position is marked in `keep`.
fn retain_aligned<T>(items: Vec<T>, keep: &[bool]) -> Vec<T> {
    items
        .into_iter()
        .zip(keep)
        .filter_map(|(item, &k)| k.then_some(item))
        .collect()
}

const RULE: &str = "*******************************************";

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Corpus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "***************** RESULTS *****************")?;
        writeln!(f, "1.- Original text:")?;
        writeln!(f, "{}", self.text)?;
        writeln!(f, "{RULE}")?;
        if let Some(tokens) = self.tokens.as_deref().filter(|t| !t.is_empty()) {
            writeln!(f, "2.- Tokens:")?;
            write_list(f, tokens)?;
            writeln!(f)?;
            writeln!(f, "{RULE}")?;
        }
        if let Some(analysis) = self.analysis.as_deref().filter(|a| !a.is_empty()) {
            writeln!(f, "3.- Analysis:")?;
            write_list(f, analysis)?;
            writeln!(f)?;
            writeln!(f, "{RULE}")?;
        }
        if let Some(synonyms) = self.synonyms.as_deref().filter(|s| !s.is_empty()) {
            writeln!(f, "4.- Synonyms:")?;
            write_list(f, synonyms)?;
            writeln!(f)?;
            writeln!(f, "{RULE}")?;
        }
        if let Some(frequencies) = self.frequencies.as_ref().filter(|d| !d.is_empty()) {
            writeln!(f, "5.- Frequencies:")?;
            writeln!(f, "{frequencies}")?;
            writeln!(f, "{RULE}")?;
        }
        Ok(())
    }
}
