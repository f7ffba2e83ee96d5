// Synonym sets

use hashbrown::{HashMap, HashSet};

use lexema_core::WordClass;

use crate::data::{DataError, parse_synsets};

/// A source of synonyms for a word of a given class.
pub trait SynonymSource {
    /// Lemmas sharing a sense with `word`, in source order. The result may
    /// contain `word` itself.
    fn synonyms(&self, word: &str, class: WordClass) -> Vec<String>;
}

/// One synset: a word class and the lemmas that share a sense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    pub class: WordClass,
    pub lemmas: Vec<String>,
}

/// In-memory synset collection.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    synsets: Vec<Synset>,
    /// Lemma -> indices of the synsets containing it, ascending.
    index: HashMap<String, Vec<usize>>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `class<TAB>lemma lemma ...` file.
    pub fn from_text(file: &str, text: &str) -> Result<Self, DataError> {
        let mut table = Self::new();
        for (letter, lemmas) in parse_synsets(file, text)? {
            table.add(WordClass::from_tag_char(letter), lemmas);
        }
        Ok(table)
    }

    /// Append a synset.
    pub fn add(&mut self, class: WordClass, lemmas: Vec<String>) {
        let id = self.synsets.len();
        for lemma in &lemmas {
            let ids = self.index.entry(lemma.clone()).or_default();
            if ids.last() != Some(&id) {
                ids.push(id);
            }
        }
        self.synsets.push(Synset { class, lemmas });
    }

    pub fn with_synset(mut self, class: WordClass, lemmas: &[&str]) -> Self {
        self.add(class, lemmas.iter().map(|l| l.to_string()).collect());
        self
    }

    pub fn synsets(&self) -> &[Synset] {
        &self.synsets
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }
}

impl SynonymSource for SynonymTable {
    fn synonyms(&self, word: &str, class: WordClass) -> Vec<String> {
        let Some(ids) = self.index.get(word) else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for synset in ids.iter().map(|&id| &self.synsets[id]) {
            if synset.class != class {
                continue;
            }
            for lemma in &synset.lemmas {
                if seen.insert(lemma.as_str()) {
                    out.push(lemma.clone());
                }
            }
        }
        out
    }
}
