// Tokenizer for Spanish running text, and the token cleaning filter

use lexema_core::character::{CharType, get_char_type, is_alphabetic_word};
use lexema_core::{Token, TokenType};

/// Minimum number of characters a cleaned token must exceed.
pub const MIN_CLEAN_LEN: usize = 2;

/// Length of the word starting at `text[0]`.
///
/// A word is a run of letters and digits. An apostrophe or hyphen joins two
/// runs when it is followed by a letter or digit.
fn word_length(text: &[char]) -> usize {
    let mut wlen = 0;
    while wlen < text.len() {
        match get_char_type(text[wlen]) {
            CharType::Letter | CharType::Digit => wlen += 1,
            CharType::Punctuation if is_joiner(text[wlen]) => {
                let next = text.get(wlen + 1).copied().map(get_char_type);
                if matches!(next, Some(CharType::Letter | CharType::Digit)) {
                    wlen += 1;
                } else {
                    return wlen;
                }
            }
            _ => return wlen,
        }
    }
    wlen
}

fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '-' | '\u{2010}' | '\u{2011}')
}

/// Length of the number starting at `text[0]`: digits with inner `.` or `,`
/// separators.
fn number_length(text: &[char]) -> usize {
    let mut nlen = 0;
    while nlen < text.len() {
        let c = text[nlen];
        if c.is_ascii_digit() {
            nlen += 1;
        } else if matches!(c, '.' | ',')
            && text.get(nlen + 1).is_some_and(|n| n.is_ascii_digit())
        {
            nlen += 1;
        } else {
            break;
        }
    }
    nlen
}

/// Find the next token at or after `pos`. Whitespace is skipped.
///
/// Returns the token type, the start position and the length in
/// characters. At end of text the type is [`TokenType::None`].
pub fn next_token(text: &[char], pos: usize) -> (TokenType, usize, usize) {
    let mut start = pos;
    while start < text.len() && get_char_type(text[start]) == CharType::Whitespace {
        start += 1;
    }
    if start >= text.len() {
        return (TokenType::None, start, 0);
    }

    let slice = &text[start..];
    match get_char_type(slice[0]) {
        CharType::Digit => {
            let nlen = number_length(slice);
            let wlen = word_length(slice);
            // "2a", "3er": digits followed by letters are one word.
            if wlen > nlen {
                (TokenType::Word, start, wlen)
            } else {
                (TokenType::Number, start, nlen)
            }
        }
        CharType::Letter => (TokenType::Word, start, word_length(slice)),
        CharType::Punctuation => {
            if slice.len() >= 3 && slice[..3] == ['.', '.', '.'] {
                (TokenType::Punctuation, start, 3)
            } else {
                (TokenType::Punctuation, start, 1)
            }
        }
        // Whitespace has been skipped above.
        CharType::Whitespace | CharType::Unknown => (TokenType::Unknown, start, 1),
    }
}

/// Split `text` into word, number, punctuation and unknown tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;
    loop {
        let (token_type, start, len) = next_token(&chars, pos);
        if token_type == TokenType::None {
            break;
        }
        let token_text: String = chars[start..start + len].iter().collect();
        tokens.push(Token::new(token_type, token_text, start));
        pos = start + len;
    }
    tokens
}

/// Token texts of `text`, in order.
pub fn tokenize_words(text: &str) -> Vec<String> {
    tokenize(text).into_iter().map(|t| t.text).collect()
}

/// Lowercase the tokens and keep only purely alphabetic ones longer than
/// [`MIN_CLEAN_LEN`] characters.
pub fn clean<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|token| {
            let token = token.as_ref();
            if is_alphabetic_word(token) && token.chars().count() > MIN_CLEAN_LEN {
                Some(token.to_lowercase())
            } else {
                None
            }
        })
        .collect()
}
