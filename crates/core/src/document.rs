// crates/core/src/document.rs
use alloc::string::String;

use crate::config::{AnalysisConfig, CharUnit, SentenceRule};
use crate::readability;
use crate::stats::AnalysisResult;
use crate::syllables::count_syllables;
use crate::tokenizer::{Token, Tokens, tokenize};

/// A text document and its statistics.
///
/// All counts are computed once, in the constructor. A `Document` is never
/// mutated; analyse new text by constructing a new `Document`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    result: AnalysisResult,
}

impl Document {
    /// Analyse `text` with the default configuration.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_config(text, &AnalysisConfig::default())
    }

    #[must_use]
    pub fn with_config(text: impl Into<String>, config: &AnalysisConfig) -> Self {
        let text = text.into();
        let result = analyze(&text, config);
        Self { text, result }
    }

    /// The text exactly as given.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of sentences: runs ending in `.`, `!` or `?`, plus a final
    /// run of words that lacks terminal punctuation.
    #[must_use]
    pub fn num_sentences(&self) -> usize {
        self.result.sentences
    }

    /// Number of words. A word is a contiguous run of `a-z`/`A-Z`; digits
    /// and punctuation are ignored.
    #[must_use]
    pub fn num_words(&self) -> usize {
        self.result.words
    }

    #[must_use]
    pub fn num_syllables(&self) -> usize {
        self.result.syllables
    }

    #[must_use]
    pub fn num_characters(&self) -> usize {
        self.result.characters
    }

    #[must_use]
    pub fn result(&self) -> AnalysisResult {
        self.result
    }

    #[must_use]
    pub fn flesch_reading_ease(&self) -> Option<f64> {
        readability::flesch_reading_ease(&self.result)
    }

    #[must_use]
    pub fn flesch_kincaid_grade(&self) -> Option<f64> {
        readability::flesch_kincaid_grade(&self.result)
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Count characters, words, sentences and syllables in one pass over the
/// token stream.
#[must_use]
pub fn analyze(text: &str, config: &AnalysisConfig) -> AnalysisResult {
    let mut result = match config.sentence_rule {
        SentenceRule::Positional => {
            let mut tally = Tally::default();
            let mut last_is_word = false;
            for tok in Tokens::new(text) {
                tally.push(&tok);
                last_is_word = tok.is_word();
            }
            if last_is_word {
                tally.result.sentences += 1;
            }
            tally.result
        }
        SentenceRule::Legacy => {
            let tokens = tokenize(text);
            let last = tokens.last().filter(|t| t.is_word()).map(|t| t.text);
            let mut tally = Tally::default();
            for tok in &tokens {
                tally.push(tok);
                if tok.is_word() && Some(tok.text) == last {
                    tally.result.sentences += 1;
                }
            }
            tally.result
        }
    };

    result.characters = count_chars(text, config.char_unit);
    result
}

fn count_chars(text: &str, unit: CharUnit) -> usize {
    match unit {
        CharUnit::Scalar => bytecount::num_chars(text.as_bytes()),
        CharUnit::Utf16 => text.encode_utf16().count(),
    }
}

#[derive(Default)]
struct Tally {
    result: AnalysisResult,
}

impl Tally {
    fn push(&mut self, tok: &Token<'_>) {
        if tok.is_word() {
            self.result.words += 1;
            self.result.syllables += count_syllables(tok.text);
        } else {
            self.result.sentences += 1;
        }
    }
}
