// Memo of accepted corrections, shared by every token of a session

use hashbrown::HashMap;

/// Remembers the outcome of every correction search.
///
/// Accepted corrections map the misspelled token to its replacement.
/// Tokens for which no acceptable correction exists are remembered
/// separately together with the distance threshold of the failed search,
/// so a repeated unknown word does not trigger a second vocabulary scan
/// unless the threshold has since been raised. Entries are never evicted; the cache lives as
/// long as the session that owns it and may be carried over to another
/// session with the same resources.
#[derive(Debug, Clone, Default)]
pub struct CorrectionCache {
    corrections: HashMap<String, String>,
    /// Token -> largest distance threshold a search failed under.
    misses: HashMap<String, usize>,
}

/// Result of a cache lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLookup<'a> {
    /// A correction was accepted earlier.
    Corrected(&'a str),
    /// A search under the same or a larger threshold ran earlier and found
    /// nothing acceptable.
    Uncorrectable,
    /// The token has not been searched yet under this threshold.
    Unseen,
}

impl CorrectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the remembered outcome for `token` when corrections may be
    /// up to `max_distance` edits away.
    pub fn lookup(&self, token: &str, max_distance: usize) -> CacheLookup<'_> {
        if let Some(corrected) = self.corrections.get(token) {
            return CacheLookup::Corrected(corrected);
        }
        match self.misses.get(token) {
            Some(&searched) if searched >= max_distance => CacheLookup::Uncorrectable,
            _ => CacheLookup::Unseen,
        }
    }

    /// The accepted correction for `token`, if any.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.corrections.get(token).map(String::as_str)
    }

    /// Record an accepted correction. Replaces a remembered miss.
    pub fn insert(&mut self, token: impl Into<String>, correction: impl Into<String>) {
        let token = token.into();
        self.misses.remove(&token);
        self.corrections.insert(token, correction.into());
    }

    /// Record that `token` has no correction within `max_distance`.
    pub fn insert_miss(&mut self, token: impl Into<String>, max_distance: usize) {
        let token = token.into();
        if self.corrections.contains_key(&token) {
            return;
        }
        let searched = self.misses.entry(token).or_insert(max_distance);
        *searched = (*searched).max(max_distance);
    }

    /// Accepted corrections as `(token, correction)` pairs, sorted by token.
    pub fn corrections(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .corrections
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    /// Number of accepted corrections.
    pub fn len(&self) -> usize {
        self.corrections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }

    /// Number of tokens remembered as uncorrectable.
    pub fn miss_count(&self) -> usize {
        self.misses.len()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.corrections.clear();
        self.misses.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cache_is_empty() {
        let cache = CorrectionCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.miss_count(), 0);
        assert_eq!(cache.lookup("mesas", 1), CacheLookup::Unseen);
    }

    #[test]
    fn insert_and_lookup_correction() {
        let mut cache = CorrectionCache::new();
        cache.insert("fortal\u{00E9}za", "fortaleza");
        assert_eq!(
            cache.lookup("fortal\u{00E9}za", 1),
            CacheLookup::Corrected("fortaleza")
        );
        assert_eq!(cache.get("fortal\u{00E9}za"), Some("fortaleza"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn misses_are_not_corrections() {
        let mut cache = CorrectionCache::new();
        cache.insert_miss("azkaban", 1);
        assert_eq!(cache.lookup("azkaban", 1), CacheLookup::Uncorrectable);
        assert_eq!(cache.get("azkaban"), None);
        assert!(cache.is_empty());
        assert_eq!(cache.miss_count(), 1);
    }

    #[test]
    fn miss_only_covers_its_threshold() {
        let mut cache = CorrectionCache::new();
        cache.insert_miss("frtalezaa", 1);
        assert_eq!(cache.lookup("frtalezaa", 0), CacheLookup::Uncorrectable);
        assert_eq!(cache.lookup("frtalezaa", 1), CacheLookup::Uncorrectable);
        assert_eq!(cache.lookup("frtalezaa", 2), CacheLookup::Unseen);

        // A later failure under a larger threshold widens the miss.
        cache.insert_miss("frtalezaa", 2);
        assert_eq!(cache.lookup("frtalezaa", 2), CacheLookup::Uncorrectable);
        cache.insert_miss("frtalezaa", 1);
        assert_eq!(cache.lookup("frtalezaa", 2), CacheLookup::Uncorrectable);
        assert_eq!(cache.miss_count(), 1);
    }

    #[test]
    fn correction_replaces_miss() {
        let mut cache = CorrectionCache::new();
        cache.insert_miss("ningun", 1);
        cache.insert("ningun", "ning\u{00FA}n");
        assert_eq!(cache.lookup("ningun", 1), CacheLookup::Corrected("ning\u{00FA}n"));
        assert_eq!(cache.miss_count(), 0);
    }

    #[test]
    fn miss_does_not_shadow_correction() {
        let mut cache = CorrectionCache::new();
        cache.insert("gatox", "gatos");
        cache.insert_miss("gatox", 1);
        assert_eq!(cache.lookup("gatox", 1), CacheLookup::Corrected("gatos"));
        assert_eq!(cache.miss_count(), 0);
    }

    #[test]
    fn corrections_are_sorted() {
        let mut cache = CorrectionCache::new();
        cache.insert("mesas", "mesa");
        cache.insert("gatox", "gatos");
        assert_eq!(
            cache.corrections(),
            vec![("gatox", "gatos"), ("mesas", "mesa")]
        );
    }

    #[test]
    fn clear_forgets_everything() {
        let mut cache = CorrectionCache::new();
        cache.insert("mesas", "mesa");
        cache.insert_miss("muggle", 1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.lookup("muggle", 1), CacheLookup::Unseen);
    }
}
