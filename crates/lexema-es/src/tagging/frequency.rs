// Tier-1 classification source: (word, tag) pairs ranked by corpus frequency

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use lexema_core::Category;

/// One distinct `(word, tag)` pair and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub word: String,
    pub tag: String,
    pub count: usize,
}

/// Frequency table of tagged words.
///
/// Entries are ranked by descending count; equal counts keep the order in
/// which the pair first appeared. A word tagged differently in different
/// places gets the tag of its highest-ranked pair.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    ranked: Vec<TagCount>,
    /// Word -> index of its highest-ranked entry in `ranked`.
    best: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count tagged occurrences, in corpus order.
    pub fn from_tagged_words<I, W, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, T)>,
        W: Into<String>,
        T: Into<String>,
    {
        let mut index: HashMap<(String, String), usize> = HashMap::new();
        let mut ranked: Vec<TagCount> = Vec::new();

        for (word, tag) in pairs {
            match index.entry((word.into(), tag.into())) {
                Entry::Occupied(e) => ranked[*e.get()].count += 1,
                Entry::Vacant(e) => {
                    let (word, tag) = e.key().clone();
                    e.insert(ranked.len());
                    ranked.push(TagCount {
                        word,
                        tag,
                        count: 1,
                    });
                }
            }
        }

        // Stable: ties stay in first-occurrence order.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));

        let mut best = HashMap::with_capacity(ranked.len());
        for (i, entry) in ranked.iter().enumerate() {
            best.entry(entry.word.clone()).or_insert(i);
        }

        Self { ranked, best }
    }

    /// The raw tag of the highest-ranked entry for `word`.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.best.get(word).map(|&i| self.ranked[i].tag.as_str())
    }

    /// The padded category of the highest-ranked entry for `word`.
    pub fn category(&self, word: &str) -> Option<Category> {
        self.lookup(word).map(Category::from_tag)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.best.contains_key(word)
    }

    /// All entries, most common first.
    pub fn most_common(&self) -> &[TagCount] {
        &self.ranked
    }

    /// Number of distinct `(word, tag)` pairs.
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
