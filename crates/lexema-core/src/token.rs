// Tokenizer output types

/// Token types produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// End of text.
    None,
    /// A run of letters (may contain inner apostrophes or hyphens).
    Word,
    /// A run of digits, with inner separators.
    Number,
    /// A single punctuation character.
    Punctuation,
    /// Anything else that is not whitespace.
    Unknown,
}

/// A text token with its character offset in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub text: String,
    /// Length of the token in characters.
    pub token_len: usize,
    /// Character offset of the token within the text.
    pub pos: usize,
}

impl Token {
    pub fn new(token_type: TokenType, text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            token_type,
            text,
            token_len,
            pos,
        }
    }

    /// An empty `None` token, signaling end of text.
    pub fn none() -> Self {
        Self {
            token_type: TokenType::None,
            text: String::new(),
            token_len: 0,
            pos: 0,
        }
    }

    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::none()
    }
}
