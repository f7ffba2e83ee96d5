// Character classification for Spanish text

// ---------------------------------------------------------------------------
// Spanish phonological constants
// ---------------------------------------------------------------------------

/// Spanish vowels (lowercase), accented forms included.
pub const SPANISH_VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u',
    '\u{00E1}', '\u{00E9}', '\u{00ED}', '\u{00F3}', '\u{00FA}', '\u{00FC}',
];

/// Letters of the Spanish alphabet plus accented vowels, in rough order of
/// frequency. Used as the insertion/replacement alphabet for suggestions.
pub const SPANISH_ALPHABET: &str =
    "eaosrnidlctumpbgvyqhfzj\u{00F1}xkw\u{00E1}\u{00E9}\u{00ED}\u{00F3}\u{00FA}\u{00FC}";

/// Character type classification used by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Classify a character.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

fn is_punctuation_char(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{00A1}' // ¡
                | '\u{00BF}' // ¿
                | '\u{00AB}' // «
                | '\u{00BB}' // »
                | '\u{2018}'
                | '\u{2019}'
                | '\u{201C}'
                | '\u{201D}'
                | '\u{2013}' // EN DASH
                | '\u{2014}' // EM DASH
                | '\u{2026}' // HORIZONTAL ELLIPSIS
        )
}

/// Check whether a character is a Spanish vowel (case-insensitive,
/// accented forms included).
pub fn is_vowel(c: char) -> bool {
    SPANISH_VOWELS.contains(&simple_lower(c))
}

/// Check whether a word contains at least one vowel.
pub fn has_vowel(word: &str) -> bool {
    word.chars().any(is_vowel)
}

/// Check whether every character of a non-empty word is alphabetic.
pub fn is_alphabetic_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Strip the acute accent from a vowel (`á` → `a`); other characters are
/// returned unchanged. `ü` and `ñ` are distinct letters and are kept.
pub fn strip_accent(c: char) -> char {
    match c {
        '\u{00E1}' => 'a',
        '\u{00E9}' => 'e',
        '\u{00ED}' => 'i',
        '\u{00F3}' => 'o',
        '\u{00FA}' => 'u',
        '\u{00C1}' => 'A',
        '\u{00C9}' => 'E',
        '\u{00CD}' => 'I',
        '\u{00D3}' => 'O',
        '\u{00DA}' => 'U',
        other => other,
    }
}

/// Convert a character to its simple (one-to-one) lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_type_letters() {
        assert_eq!(get_char_type('a'), CharType::Letter);
        assert_eq!(get_char_type('\u{00F1}'), CharType::Letter); // ñ
        assert_eq!(get_char_type('\u{00C1}'), CharType::Letter); // Á
    }

    #[test]
    fn char_type_other_classes() {
        assert_eq!(get_char_type('7'), CharType::Digit);
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\n'), CharType::Whitespace);
        assert_eq!(get_char_type('.'), CharType::Punctuation);
        assert_eq!(get_char_type('\u{00BF}'), CharType::Punctuation); // ¿
        assert_eq!(get_char_type('\u{20AC}'), CharType::Unknown); // €
    }

    #[test]
    fn vowels_include_accents() {
        assert!(is_vowel('a'));
        assert!(is_vowel('U'));
        assert!(is_vowel('\u{00F3}')); // ó
        assert!(is_vowel('\u{00FC}')); // ü
        assert!(!is_vowel('y'));
        assert!(!is_vowel('\u{00F1}'));
    }

    #[test]
    fn has_vowel_checks_whole_word() {
        assert!(has_vowel("mesa"));
        assert!(has_vowel("m\u{00E1}s"));
        assert!(!has_vowel("xyz"));
        assert!(!has_vowel(""));
    }

    #[test]
    fn alphabetic_words() {
        assert!(is_alphabetic_word("prisi\u{00F3}n"));
        assert!(!is_alphabetic_word("xv2"));
        assert!(!is_alphabetic_word("."));
        assert!(!is_alphabetic_word(""));
    }

    #[test]
    fn strip_accent_keeps_enye() {
        assert_eq!(strip_accent('\u{00F3}'), 'o');
        assert_eq!(strip_accent('\u{00C9}'), 'E');
        assert_eq!(strip_accent('\u{00F1}'), '\u{00F1}');
        assert_eq!(strip_accent('\u{00FC}'), '\u{00FC}');
    }

    #[test]
    fn simple_lower_basic() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('\u{00D1}'), '\u{00F1}'); // Ñ -> ñ
        assert_eq!(simple_lower('a'), 'a');
    }
}
