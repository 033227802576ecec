//! Vocabulary loader: turns a line-delimited word list into lowercase entries.
//!
//! A line is skipped when, after trimming, it
//! - contains an uppercase ASCII letter (proper nouns, acronyms),
//! - contains a hyphen joining two word characters (compounds),
//! - contains a period (abbreviations),
//! - or is shorter than `MIN_WORD_LENGTH` characters.
//!
//! The patterns are searched anywhere in the line, not matched against the
//! whole of it. Malformed lines never produce an error. `\n`, `\r\n` and a
//! lone `\r` all end a line.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

use crate::vocabulary::{Vocabulary, VocabularyError};

pub const MIN_WORD_LENGTH: usize = 4;

static UPPERCASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]+").expect("uppercase pattern is valid"));
static HYPHENATED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+-\w+").expect("hyphen pattern is valid"));
static PERIOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.").expect("period pattern is valid"));

/// Reads the word list at `path` and builds a `Vocabulary`.
/// Only the file read can fail.
pub async fn load_vocabulary(path: impl AsRef<Path>) -> Result<Vocabulary, VocabularyError> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| VocabularyError::Read {
            path: path.display().to_string(),
            source,
        })?;

    let lines_read = split_lines(&contents).len();
    let vocabulary = Vocabulary::new(parse_vocabulary(&contents), path.display().to_string())
        .with_lines_read(lines_read);

    if vocabulary.is_empty() {
        warn!("Vocabulary file {} has no usable entries", path.display());
    }

    let summary = vocabulary.summary();
    info!(
        "Vocabulary loaded from {}: {} entries kept, {} lines skipped",
        path.display(),
        summary.entries,
        summary.lines_skipped
    );

    Ok(vocabulary)
}

/// Applies the line filters to in-memory file contents, preserving order.
pub fn parse_vocabulary(contents: &str) -> Vec<String> {
    split_lines(contents)
        .into_iter()
        .map(str::trim)
        .filter(|word| !is_rejected(word))
        .filter(|word| word.chars().count() >= MIN_WORD_LENGTH)
        .map(str::to_lowercase)
        .collect()
}

/// Splits on `\r\n`, `\n` or `\r`. A trailing terminator does not start a new line.
fn split_lines(contents: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = contents
        .split("\r\n")
        .flat_map(|chunk| chunk.split(['\n', '\r']))
        .collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

fn is_rejected(word: &str) -> bool {
    UPPERCASE_RE.is_match(word) || HYPHENATED_RE.is_match(word) || PERIOD_RE.is_match(word)
}
