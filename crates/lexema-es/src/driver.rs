// Analysis pass over a token sequence

use lexema_core::AnalysisEntry;

use crate::classifier::Classifier;
use crate::speller::CorrectionCache;

/// Runs the classifier over every token in order.
///
/// After [`analyze`](Self::analyze) returns, the analysis has one entry per
/// token and `analysis[i].token == tokens[i]`: a corrected token is written
/// back into the sequence at its own position.
pub struct AnalysisDriver<'c, 'a> {
    classifier: &'c Classifier<'a>,
}

impl<'c, 'a> AnalysisDriver<'c, 'a> {
    pub fn new(classifier: &'c Classifier<'a>) -> Self {
        Self { classifier }
    }

    /// Classify `tokens` from first to last. `correct` enables spelling
    /// correction for the whole pass.
    pub fn analyze(
        &self,
        tokens: &mut [String],
        correct: bool,
        cache: &mut CorrectionCache,
    ) -> Vec<AnalysisEntry> {
        let mut analysis = Vec::with_capacity(tokens.len());
        for token in tokens.iter_mut() {
            let entry = self.classifier.classify(token, correct, cache);
            if entry.token != *token {
                token.clone_from(&entry.token);
            }
            analysis.push(entry);
        }
        analysis
    }
}
