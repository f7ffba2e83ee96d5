// Rule-based shallow parser: closed-class lexicon, then suffix rules

use hashbrown::HashMap;

use crate::speller::LookupError;
use crate::tagging::ShallowParser;

/// Tag given to words that match neither the lexicon nor a suffix rule.
pub const DEFAULT_TAG: &str = "NN";

/// A shallow part-of-speech tagger.
///
/// A word is tagged by, in order: an exact lexicon entry, the longest
/// matching suffix rule, the default tag. Suffix rules only apply to words
/// strictly longer than the suffix. Output has the form `word/TAG`.
#[derive(Debug, Clone)]
pub struct SuffixTagger {
    lexicon: HashMap<String, String>,
    /// Sorted by descending suffix length.
    suffixes: Vec<(String, String)>,
    default_tag: String,
}

impl Default for SuffixTagger {
    fn default() -> Self {
        Self::new(DEFAULT_TAG)
    }
}

impl SuffixTagger {
    /// An empty tagger that tags every word with `default_tag`.
    pub fn new(default_tag: impl Into<String>) -> Self {
        Self {
            lexicon: HashMap::new(),
            suffixes: Vec::new(),
            default_tag: default_tag.into(),
        }
    }

    /// Add an exact-word entry.
    pub fn with_word(mut self, word: impl Into<String>, tag: impl Into<String>) -> Self {
        self.lexicon.insert(word.into(), tag.into());
        self
    }

    /// Add every word in `words` with the same tag.
    pub fn with_words(mut self, words: &[&str], tag: &str) -> Self {
        for word in words {
            self.lexicon.insert((*word).to_string(), tag.to_string());
        }
        self
    }

    /// Add a suffix rule. For rules of equal length the earlier one wins.
    pub fn with_suffix(mut self, suffix: impl Into<String>, tag: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let len = suffix.chars().count();
        let at = self
            .suffixes
            .iter()
            .position(|(s, _)| s.chars().count() < len)
            .unwrap_or(self.suffixes.len());
        self.suffixes.insert(at, (suffix, tag.into()));
        self
    }

    fn with_suffixes(self, suffixes: &[&str], tag: &str) -> Self {
        suffixes
            .iter()
            .fold(self, |tagger, suffix| tagger.with_suffix(*suffix, tag))
    }

    /// Tagger with Spanish function words and inflectional endings.
    pub fn spanish() -> Self {
        Self::default()
            .with_words(DETERMINERS, "DT")
            .with_words(PRONOUNS, "PRP")
            .with_words(PREPOSITIONS, "IN")
            .with_words(COORDINATORS, "CC")
            .with_words(SUBORDINATORS, "CS")
            .with_words(ADVERBS, "RB")
            .with_words(AUXILIARIES, "VB")
            .with_suffixes(&["mente"], "RB")
            .with_suffixes(&["ar", "er", "ir", "arse", "erse", "irse"], "VB")
            .with_suffixes(&["ando", "iendo", "yendo"], "VBG")
            .with_suffixes(&["ado", "ada", "ados", "adas", "ido", "ida", "idos", "idas"], "VBN")
            .with_suffixes(
                &[
                    "aba", "aban", "abamos", "aron", "ieron", "yeron", "\u{00F3}", "i\u{00F3}",
                    "amos", "emos", "imos", "\u{00ED}an",
                ],
                "VBD",
            )
            .with_suffixes(
                &[
                    "oso", "osa", "osos", "osas", "ble", "bles", "ico", "ica", "icos", "icas",
                    "ivo", "iva", "ivos", "ivas", "\u{00ED}simo", "\u{00ED}sima",
                ],
                "JJ",
            )
            .with_suffixes(
                &[
                    "ci\u{00F3}n", "si\u{00F3}n", "dad", "tad", "miento", "eza", "ismo", "ista",
                    "aje", "ura",
                ],
                "NN",
            )
            .with_suffixes(
                &["ciones", "siones", "dades", "mientos", "ezas", "ismos", "istas"],
                "NNS",
            )
    }

    /// The tag for `word`.
    pub fn tag(&self, word: &str) -> &str {
        if let Some(tag) = self.lexicon.get(word) {
            return tag;
        }
        let word_len = word.chars().count();
        self.suffixes
            .iter()
            .find(|(suffix, _)| word_len > suffix.chars().count() && word.ends_with(suffix.as_str()))
            .map(|(_, tag)| tag.as_str())
            .unwrap_or(self.default_tag.as_str())
    }
}

impl ShallowParser for SuffixTagger {
    fn parse(&self, word: &str) -> Result<String, LookupError> {
        Ok(format!("{word}/{}", self.tag(word)))
    }
}

const DETERMINERS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "este", "esta", "estos", "estas",
    "ese", "esa", "esos", "esas", "aquel", "aquella", "sus", "mis", "tus", "nuestro", "nuestra",
    "cada", "varios", "varias", "algunos", "algunas",
];

const PRONOUNS: &[&str] = &[
    "yo", "t\u{00FA}", "\u{00E9}l", "ella", "ello", "nosotros", "nosotras", "vosotros", "ellos",
    "ellas", "usted", "ustedes", "me", "te", "se", "nos", "os", "lo", "le", "les", "algo",
    "nada", "alguien", "nadie",
];

const PREPOSITIONS: &[&str] = &[
    "a", "al", "ante", "bajo", "con", "contra", "de", "del", "desde", "durante", "en", "entre",
    "hacia", "hasta", "mediante", "para", "por", "seg\u{00FA}n", "sin", "sobre", "tras",
];

const COORDINATORS: &[&str] = &["y", "e", "o", "u", "ni", "pero", "sino", "mas"];

const SUBORDINATORS: &[&str] = &[
    "que", "porque", "aunque", "si", "pues", "como", "cuando", "mientras", "donde",
];

const ADVERBS: &[&str] = &[
    "no", "s\u{00ED}", "muy", "ya", "tambi\u{00E9}n", "tampoco", "siempre", "nunca", "m\u{00E1}s",
    "menos", "bien", "mal", "aqu\u{00ED}", "all\u{00ED}", "ahora", "luego", "casi",
];

const AUXILIARIES: &[&str] = &[
    "ha", "han", "he", "hemos", "hab\u{00ED}a", "es", "son", "era", "eran", "fue", "fueron",
    "est\u{00E1}", "est\u{00E1}n",
];
