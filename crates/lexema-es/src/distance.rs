// Levenshtein edit distance over characters

/// Minimum number of single-character insertions, deletions and
/// substitutions needed to turn `a` into `b`.
///
/// Works on `char`s, so an accented letter counts as one character no
/// matter how many bytes it takes in UTF-8. Only two rows of the dynamic
/// programming table are kept, sized by the shorter string.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    char_distance(&a, &b)
}

/// [`distance`] on pre-split character slices.
///
/// The correction scan calls this once per vocabulary word, so callers
/// that already hold a `Vec<char>` for the token avoid re-collecting it.
pub fn char_distance(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current: Vec<usize> = vec![0; short.len() + 1];

    for (i, &c1) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, &c2) in short.iter().enumerate() {
            let insertion = previous[j + 1] + 1;
            let deletion = current[j] + 1;
            let substitution = previous[j] + usize::from(c1 != c2);
            current[j + 1] = insertion.min(deletion).min(substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}
