// Stopword set

use hashbrown::HashSet;

use crate::data::parse_word_list;

/// A set of words removed before analysis.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a one-word-per-line list.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(parse_word_list(text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Keep the tokens that are not stopwords, in order.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keeps_order() {
        let stop = StopWords::from_words(["desde", "pero", "sus"]);
        let tokens = vec!["existido", "desde", "siglo", "pero", "origenes"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(stop.filter(tokens), vec!["existido", "siglo", "origenes"]);
    }

    #[test]
    fn from_text_ignores_comments() {
        let stop = StopWords::from_text("# Spanish\nde\nla\n\nque\n");
        assert_eq!(stop.len(), 3);
        assert!(stop.contains("que"));
        assert!(!stop.contains("# Spanish"));
    }

    #[test]
    fn empty_set_filters_nothing() {
        let stop = StopWords::new();
        assert!(stop.is_empty());
        assert_eq!(stop.filter(vec!["mar".to_string()]), vec!["mar"]);
    }
}
