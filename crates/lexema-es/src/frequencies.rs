// Token frequency distribution

use std::fmt;

use hashbrown::HashMap;

/// Occurrence counts of tokens.
///
/// Entries are ordered by descending count, equal counts in order of first
/// appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyDistribution {
    entries: Vec<(String, usize)>,
}

impl FrequencyDistribution {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, usize)> = Vec::new();
        for token in tokens {
            let token = token.as_ref();
            match positions.get(token) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    positions.insert(token.to_string(), entries.len());
                    entries.push((token.to_string(), 1));
                }
            }
        }
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    /// Count of `token`, zero if absent.
    pub fn count(&self, token: &str) -> usize {
        self.entries
            .iter()
            .find(|(t, _)| t == token)
            .map_or(0, |(_, n)| *n)
    }

    /// `(token, count)` pairs, most frequent first.
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for FrequencyDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (token, count)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({token}, {count})")?;
        }
        f.write_str("]")
    }
}
