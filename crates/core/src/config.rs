use serde::{Deserialize, Serialize};

/// How a trailing word without terminal punctuation closes a sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentenceRule {
    /// Only the positionally-last token counts as an extra sentence end.
    #[default]
    Positional,
    /// Every word equal to the final word counts as an extra sentence end.
    ///
    /// Kept for compatibility with counts produced by older versions of the
    /// tool; it over-counts when the final word repeats earlier in the text.
    Legacy,
}

/// Unit used for the character count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharUnit {
    /// UTF-16 code units.
    #[default]
    Utf16,
    /// Unicode scalar values (`char`s).
    Scalar,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub sentence_rule: SentenceRule,
    pub char_unit: CharUnit,
}
