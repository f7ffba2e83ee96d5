// Grammatical categories: fixed-width tags and their semantic word classes

use std::fmt;
use std::str::FromStr;

/// Width every category tag is padded to.
pub const CATEGORY_WIDTH: usize = 7;

/// Character used to pad short tags up to [`CATEGORY_WIDTH`].
pub const CATEGORY_PADDING: char = '0';

/// Tag letter of the unknown category.
pub const UNKNOWN_TAG: char = '-';

/// Semantic class of a category, decoded from the first character of its tag.
///
/// Tagged-corpus tags follow the EAGLES letter scheme (`ncfp000`,
/// `vmip3s0`, ...). The shallow-parse fallback only ever produces the
/// subset noun, verb, adjective, conjunction, pronoun and unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Conjunction,
    Determiner,
    /// Pronouns. The shallow parser's `/P` marker (pronouns and
    /// prepositions) also lands here.
    Pronoun,
    Adposition,
    Interjection,
    Numeral,
    Date,
    Punctuation,
    /// Neither classification tier recognized the token.
    Unknown,
    /// A tag letter outside the known scheme, kept verbatim.
    Other(char),
}

impl WordClass {
    /// Decode the class from a tag letter.
    pub fn from_tag_char(c: char) -> Self {
        match c {
            'n' => WordClass::Noun,
            'v' => WordClass::Verb,
            'a' => WordClass::Adjective,
            'r' => WordClass::Adverb,
            'c' => WordClass::Conjunction,
            'd' => WordClass::Determiner,
            'p' => WordClass::Pronoun,
            's' => WordClass::Adposition,
            'i' => WordClass::Interjection,
            'z' => WordClass::Numeral,
            'w' => WordClass::Date,
            'f' => WordClass::Punctuation,
            UNKNOWN_TAG => WordClass::Unknown,
            other => WordClass::Other(other),
        }
    }

    /// The tag letter for this class.
    pub fn tag_char(self) -> char {
        match self {
            WordClass::Noun => 'n',
            WordClass::Verb => 'v',
            WordClass::Adjective => 'a',
            WordClass::Adverb => 'r',
            WordClass::Conjunction => 'c',
            WordClass::Determiner => 'd',
            WordClass::Pronoun => 'p',
            WordClass::Adposition => 's',
            WordClass::Interjection => 'i',
            WordClass::Numeral => 'z',
            WordClass::Date => 'w',
            WordClass::Punctuation => 'f',
            WordClass::Unknown => UNKNOWN_TAG,
            WordClass::Other(c) => c,
        }
    }

    /// Function-word classes removed by the post-analysis filter.
    pub fn is_function_word(self) -> bool {
        matches!(
            self,
            WordClass::Determiner | WordClass::Pronoun | WordClass::Conjunction
        )
    }
}

/// Error returned when a tag cannot be turned into a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("empty category tag")]
    EmptyTag,
    #[error("category tag contains whitespace: {0:?}")]
    Whitespace(String),
}

/// A grammatical category: a tag padded with `'0'` to seven characters.
///
/// Only the first character carries meaning for the analysis pipeline
/// (see [`WordClass`]); the rest is sub-category detail copied verbatim
/// from the tagged corpus. Tags longer than seven characters are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Category {
    tag: String,
}

impl Category {
    /// Build a category from a raw tag, padding it to [`CATEGORY_WIDTH`].
    ///
    /// The tag is assumed non-empty; use `str::parse` to validate
    /// untrusted input.
    pub fn from_tag(tag: &str) -> Self {
        let mut padded = String::with_capacity(CATEGORY_WIDTH.max(tag.len()));
        padded.push_str(tag);
        let len = tag.chars().count();
        for _ in len..CATEGORY_WIDTH {
            padded.push(CATEGORY_PADDING);
        }
        Self { tag: padded }
    }

    /// Build the bare category for a word class (`n000000`, `v000000`, ...).
    pub fn from_class(class: WordClass) -> Self {
        let mut buf = [0u8; 4];
        Self::from_tag(class.tag_char().encode_utf8(&mut buf))
    }

    pub fn noun() -> Self {
        Self::from_class(WordClass::Noun)
    }

    pub fn verb() -> Self {
        Self::from_class(WordClass::Verb)
    }

    pub fn adjective() -> Self {
        Self::from_class(WordClass::Adjective)
    }

    pub fn conjunction() -> Self {
        Self::from_class(WordClass::Conjunction)
    }

    pub fn pronoun() -> Self {
        Self::from_class(WordClass::Pronoun)
    }

    /// The unknown category, `-000000`.
    pub fn unknown() -> Self {
        Self::from_class(WordClass::Unknown)
    }

    /// The padded tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The semantic class (first tag character).
    pub fn class(&self) -> WordClass {
        self.tag
            .chars()
            .next()
            .map(WordClass::from_tag_char)
            .unwrap_or(WordClass::Unknown)
    }

    pub fn is_unknown(&self) -> bool {
        self.class() == WordClass::Unknown
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::unknown()
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CategoryError::EmptyTag);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(CategoryError::Whitespace(s.to_string()));
        }
        Ok(Self::from_tag(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}
