use std::collections::HashSet;

use thiserror::Error;

pub const COMPLEMENTARY_COUNT: usize = 6;
pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 12;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Enter exactly one mandatory letter")]
    MandatoryLetter,

    #[error("Enter exactly six complementary letters")]
    ComplementaryLetters,

    #[error("Length range must satisfy 4 <= min <= max <= 12 (got {min}..={max})")]
    LengthRange { min: usize, max: usize },
}

/// Inclusive word length bounds, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    pub fn new(min: usize, max: usize) -> Result<Self, RequestError> {
        if min < MIN_LENGTH || max > MAX_LENGTH || min > max {
            return Err(RequestError::LengthRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, length: usize) -> bool {
        self.min <= length && length <= self.max
    }
}

impl Default for LengthRange {
    fn default() -> Self {
        Self {
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        }
    }
}

/// A validated search: one mandatory letter, six complementary letters
/// (repeats allowed) and a length range. Letters are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRequest {
    mandatory: char,
    complementary: [char; COMPLEMENTARY_COUNT],
    length_range: LengthRange,
}

impl FilterRequest {
    pub fn new(
        mandatory: &str,
        complementary: &str,
        length_range: LengthRange,
    ) -> Result<Self, RequestError> {
        let mut mandatory_chars = mandatory.chars();
        let mandatory = match (mandatory_chars.next(), mandatory_chars.next()) {
            (Some(c), None) => lowercase(c),
            _ => return Err(RequestError::MandatoryLetter),
        };

        let complementary: Vec<char> = complementary.chars().map(lowercase).collect();
        let complementary: [char; COMPLEMENTARY_COUNT] = complementary
            .try_into()
            .map_err(|_| RequestError::ComplementaryLetters)?;

        Ok(Self {
            mandatory,
            complementary,
            length_range,
        })
    }

    pub fn mandatory(&self) -> char {
        self.mandatory
    }

    pub fn complementary(&self) -> &[char] {
        &self.complementary
    }

    pub fn length_range(&self) -> LengthRange {
        self.length_range
    }

    /// The mandatory letter plus the complementary letters, duplicates collapsed.
    #[cfg(test)]
    pub fn allowed_letters(&self) -> HashSet<char> {
        allowed_letters(self.mandatory, &self.complementary)
    }
}

pub(crate) fn allowed_letters(mandatory: char, complementary: &[char]) -> HashSet<char> {
    complementary
        .iter()
        .copied()
        .chain(std::iter::once(mandatory))
        .collect()
}

fn lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
