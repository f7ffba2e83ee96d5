// Lemma unification: nouns to singular, verbs to infinitive, adjectives to
// masculine singular

use hashbrown::HashMap;

use lexema_core::character::is_vowel;

use crate::data::{DataError, parse_lemmas};

/// Produces canonical forms of inflected words.
pub trait Lemmatizer {
    /// Singular form of a noun.
    fn singularize(&self, word: &str) -> String;
    /// Infinitive of a verb form.
    fn infinitive(&self, word: &str) -> String;
    /// Masculine singular (predicative) form of an adjective.
    fn predicative(&self, word: &str) -> String;
}

/// Consonants after which a plural is formed with `-es`.
const ES_PLURAL_CONSONANTS: &[char] = &['r', 'l', 'n', 'd', 'j', 'y'];

/// Spanish lemmatizer: an irregular-form table backed by suffix rules.
///
/// The table is consulted first for every operation. Verbs have no rules:
/// a form missing from the table is returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct SpanishInflector {
    table: HashMap<String, String>,
}

impl SpanishInflector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, F, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: Into<String>,
        L: Into<String>,
    {
        Self {
            table: pairs
                .into_iter()
                .map(|(form, lemma)| (form.into(), lemma.into()))
                .collect(),
        }
    }

    /// Parse a `form<TAB>lemma` table.
    pub fn from_text(file: &str, text: &str) -> Result<Self, DataError> {
        Ok(Self::from_pairs(parse_lemmas(file, text)?))
    }

    pub fn with_lemma(mut self, form: impl Into<String>, lemma: impl Into<String>) -> Self {
        self.table.insert(form.into(), lemma.into());
        self
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn lookup(&self, word: &str) -> Option<String> {
        self.table.get(word).cloned()
    }
}

/// Plural-to-singular rules.
fn singular_by_rule(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("iones") {
        return format!("{stem}i\u{00F3}n");
    }
    if let Some(stem) = word.strip_suffix("ces") {
        if !stem.is_empty() {
            return format!("{stem}z");
        }
    }
    if word.ends_with("sis") || word.ends_with("tis") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("es") {
        if stem
            .chars()
            .last()
            .is_some_and(|c| ES_PLURAL_CONSONANTS.contains(&c))
        {
            return stem.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        if stem.chars().last().is_some_and(is_vowel) {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// Adjective-to-masculine-singular rules.
fn predicative_by_rule(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("os") {
        return format!("{stem}o");
    }
    if let Some(stem) = word.strip_suffix("as") {
        return format!("{stem}o");
    }
    if let Some(stem) = word.strip_suffix('a') {
        if !stem.is_empty() {
            return format!("{stem}o");
        }
    }
    singular_by_rule(word)
}

impl Lemmatizer for SpanishInflector {
    fn singularize(&self, word: &str) -> String {
        self.lookup(word).unwrap_or_else(|| singular_by_rule(word))
    }

    fn infinitive(&self, word: &str) -> String {
        self.lookup(word).unwrap_or_else(|| word.to_string())
    }

    fn predicative(&self, word: &str) -> String {
        self.lookup(word).unwrap_or_else(|| predicative_by_rule(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_plurals() {
        let inf = SpanishInflector::new();
        assert_eq!(inf.singularize("mesas"), "mesa");
        assert_eq!(inf.singularize("mares"), "mar");
        assert_eq!(inf.singularize("ciudades"), "ciudad");
        assert_eq!(inf.singularize("clases"), "clase");
    }

    #[test]
    fn plurals_with_spelling_changes() {
        let inf = SpanishInflector::new();
        assert_eq!(inf.singularize("luces"), "luz");
        assert_eq!(inf.singularize("prisiones"), "prisi\u{00F3}n");
    }

    #[test]
    fn singular_nouns_are_unchanged() {
        let inf = SpanishInflector::new();
        assert_eq!(inf.singularize("isla"), "isla");
        assert_eq!(inf.singularize("crisis"), "crisis");
        assert_eq!(inf.singularize("mar"), "mar");
    }

    #[test]
    fn table_overrides_rules() {
        let inf = SpanishInflector::new().with_lemma("or\u{00ED}genes", "origen");
        assert_eq!(inf.singularize("or\u{00ED}genes"), "origen");
    }

    #[test]
    fn verbs_use_table_or_identity() {
        let inf = SpanishInflector::from_pairs([("construy\u{00F3}", "construir"), ("fue", "ser")]);
        assert_eq!(inf.infinitive("construy\u{00F3}"), "construir");
        assert_eq!(inf.infinitive("documenta"), "documenta");
    }

    #[test]
    fn adjectives_become_masculine_singular() {
        let inf = SpanishInflector::new();
        assert_eq!(inf.predicative("m\u{00E1}gicas"), "m\u{00E1}gico");
        assert_eq!(inf.predicative("m\u{00E1}gicos"), "m\u{00E1}gico");
        assert_eq!(inf.predicative("agrandada"), "agrandado");
        assert_eq!(inf.predicative("m\u{00E1}gico"), "m\u{00E1}gico");
        assert_eq!(inf.predicative("azules"), "azul");
    }

    #[test]
    fn from_text_parses_table() {
        let inf = SpanishInflector::from_text("lemmas.tsv", "# irregular\nfue\tser\n").unwrap();
        assert_eq!(inf.len(), 1);
        assert_eq!(inf.infinitive("fue"), "ser");
    }

    #[test]
    fn from_text_reports_bad_lines() {
        assert!(SpanishInflector::from_text("lemmas.tsv", "fue ser\n").is_err());
    }
}
