// Plain-text data file parsers
//
// All formats are line based and UTF-8. Blank lines and lines starting with
// `#` are skipped. Columns are separated by a single tab.
//
//   tagged corpus   word<TAB>tag           one corpus occurrence per line
//   word list       word                   one word per line
//   synsets         class<TAB>lemma lemma  one synset per line
//   lemma table     form<TAB>lemma

/// Error raised while parsing a data file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("{file}:{line}: expected two tab-separated columns")]
    MalformedLine { file: String, line: usize },
    #[error("{file}:{line}: empty field")]
    EmptyField { file: String, line: usize },
}

/// Content lines of a data file with their 1-based line numbers.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(i, line)| {
        let line = line.trim_end_matches('\r');
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            None
        } else {
            Some((i + 1, line))
        }
    })
}

/// Split a line into its two tab-separated columns.
fn split_pair<'t>(file: &str, number: usize, line: &'t str) -> Result<(&'t str, &'t str), DataError> {
    let Some((left, right)) = line.split_once('\t') else {
        return Err(DataError::MalformedLine {
            file: file.to_string(),
            line: number,
        });
    };
    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() || right.is_empty() {
        return Err(DataError::EmptyField {
            file: file.to_string(),
            line: number,
        });
    }
    Ok((left, right))
}

/// Parse a tagged corpus into `(word, tag)` pairs, in file order.
///
/// `file` is only used in error messages.
pub fn parse_tagged(file: &str, text: &str) -> Result<Vec<(String, String)>, DataError> {
    content_lines(text)
        .map(|(number, line)| {
            let (word, tag) = split_pair(file, number, line)?;
            Ok((word.to_string(), tag.to_string()))
        })
        .collect()
}

/// Parse a word list. Each line holds one word; surrounding whitespace is
/// trimmed.
pub fn parse_word_list(text: &str) -> Vec<String> {
    content_lines(text)
        .map(|(_, line)| line.trim().to_string())
        .collect()
}

/// Parse a synset file into `(class letter, lemmas)` records.
///
/// Lemmas are separated by spaces; multi-word lemmas use `_`.
pub fn parse_synsets(file: &str, text: &str) -> Result<Vec<(char, Vec<String>)>, DataError> {
    content_lines(text)
        .map(|(number, line)| {
            let (class, lemmas) = split_pair(file, number, line)?;
            let mut chars = class.chars();
            let (Some(letter), None) = (chars.next(), chars.next()) else {
                return Err(DataError::MalformedLine {
                    file: file.to_string(),
                    line: number,
                });
            };
            let lemmas = lemmas.split_whitespace().map(str::to_string).collect();
            Ok((letter, lemmas))
        })
        .collect()
}

/// Parse a lemma table into `(form, lemma)` pairs.
pub fn parse_lemmas(file: &str, text: &str) -> Result<Vec<(String, String)>, DataError> {
    // Same shape as the tagged corpus.
    parse_tagged(file, text)
}
