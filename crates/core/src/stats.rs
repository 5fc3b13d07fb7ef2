use serde::{Deserialize, Serialize};

/// Pure analysis result, independent of where the text came from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of characters, whitespace and newlines included.
    pub characters: usize,
    /// Number of syllables over all words.
    pub syllables: usize,
    /// Number of words (maximal runs of ASCII letters).
    pub words: usize,
    /// Number of sentences.
    pub sentences: usize,
}

impl AnalysisResult {
    /// Creates a new zeroed `AnalysisResult`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl core::ops::Add for AnalysisResult {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            characters: self.characters + rhs.characters,
            syllables: self.syllables + rhs.syllables,
            words: self.words + rhs.words,
            sentences: self.sentences + rhs.sentences,
        }
    }
}

impl core::ops::AddAssign for AnalysisResult {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::iter::Sum for AnalysisResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, r| acc + r)
    }
}
