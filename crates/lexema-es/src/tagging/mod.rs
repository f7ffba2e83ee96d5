// Part-of-speech sources: the tagged-corpus frequency table (tier 1) and
// the shallow parser fallback (tier 2).

pub mod frequency;
pub mod suffix;

pub use frequency::{FrequencyTable, TagCount};
pub use suffix::SuffixTagger;

use lexema_core::{Category, WordClass};

use crate::speller::LookupError;

/// A shallow part-of-speech parser.
///
/// `parse` returns the annotated form of the word, e.g. `"mesas/NNS"`.
/// Only the presence of the Penn-style markers `/NN`, `/VB`, `/JJ`, `/CC`,
/// `/CS` and `/P` is inspected; anything else in the string is ignored.
pub trait ShallowParser {
    fn parse(&self, word: &str) -> Result<String, LookupError>;
}

/// Map a shallow-parse result to a bare category.
///
/// Markers are checked in the order noun, verb, adjective, conjunction,
/// preposition; the first one found decides. The preposition marker `/P`
/// yields the `p` category, which reads as [`WordClass::Pronoun`] in the
/// EAGLES tag set and is dropped with the other function words. With
/// `legacy_conjunction_fallback` every result that is not a noun, verb or
/// adjective becomes a conjunction, as older releases did.
pub fn category_from_marker(marker: &str, legacy_conjunction_fallback: bool) -> Category {
    Category::from_class(class_from_marker(marker, legacy_conjunction_fallback))
}

fn class_from_marker(marker: &str, legacy_conjunction_fallback: bool) -> WordClass {
    if marker.contains("/NN") {
        WordClass::Noun
    } else if marker.contains("/VB") {
        WordClass::Verb
    } else if marker.contains("/JJ") {
        WordClass::Adjective
    } else if legacy_conjunction_fallback || marker.contains("/CC") || marker.contains("/CS") {
        WordClass::Conjunction
    } else if marker.contains("/P") {
        // The `p` tag letter: prepositions under the parser's scheme,
        // pronouns under EAGLES. Either way a function word.
        WordClass::Pronoun
    } else {
        WordClass::Unknown
    }
}
