//! Word filter pipeline.
//!
//! 1. keep words spelled only from the allowed letters that contain the mandatory letter
//! 2. sort by (character count, codepoint order)
//! 3. drop `w` ending in `s` when `w` without that `s` is in the step 2 output
//! 4. keep words inside the length range
//!
//! Steps 3 and 4 only remove words, so the step 2 order is the output order.
//! The filter itself never changes letter case.

use std::collections::HashSet;

use crate::search::request::{allowed_letters, FilterRequest, LengthRange};
use crate::vocabulary::Vocabulary;

/// Runs the full pipeline for a validated request.
pub fn find_words(vocabulary: &Vocabulary, request: &FilterRequest) -> Vec<String> {
    let words = filter_words(
        vocabulary.words(),
        request.mandatory(),
        request.complementary(),
    );
    let words = remove_plural_duplicates(words);
    filter_by_length(words, request.length_range())
}

/// Steps 1 and 2: alphabet membership, then sort.
pub fn filter_words(vocabulary: &[String], mandatory: char, complementary: &[char]) -> Vec<String> {
    let allowed = allowed_letters(mandatory, complementary);

    let mut filtered: Vec<String> = vocabulary
        .iter()
        .filter(|word| word.contains(mandatory) && word.chars().all(|c| allowed.contains(&c)))
        .cloned()
        .collect();

    filtered.sort_by_cached_key(|word| (word.chars().count(), word.clone()));
    filtered
}

/// Single pass singular/plural collapse. The lookup set is the full input,
/// so a plural is dropped even when its singular is itself a dropped plural.
pub fn remove_plural_duplicates(words: Vec<String>) -> Vec<String> {
    let present: HashSet<&str> = words.iter().map(String::as_str).collect();

    let keep: Vec<bool> = words
        .iter()
        .map(|word| match word.strip_suffix('s') {
            Some(singular) => !present.contains(singular),
            None => true,
        })
        .collect();

    words
        .into_iter()
        .zip(keep)
        .filter_map(|(word, keep)| keep.then_some(word))
        .collect()
}

pub fn filter_by_length(words: Vec<String>, range: LengthRange) -> Vec<String> {
    words
        .into_iter()
        .filter(|word| range.contains(word.chars().count()))
        .collect()
}
