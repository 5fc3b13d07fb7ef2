//! Readability scores derived from word, sentence and syllable counts.

use crate::stats::AnalysisResult;

#[allow(clippy::cast_precision_loss)]
fn ratios(result: &AnalysisResult) -> Option<(f64, f64)> {
    if result.words == 0 || result.sentences == 0 {
        return None;
    }
    let words = result.words as f64;
    let words_per_sentence = words / result.sentences as f64;
    let syllables_per_word = result.syllables as f64 / words;
    Some((words_per_sentence, syllables_per_word))
}

/// Flesch reading ease. Higher is easier; `None` without words or sentences.
#[must_use]
pub fn flesch_reading_ease(result: &AnalysisResult) -> Option<f64> {
    ratios(result).map(|(wps, spw)| 206.835 - 1.015 * wps - 84.6 * spw)
}

/// Flesch-Kincaid grade level; `None` without words or sentences.
#[must_use]
pub fn flesch_kincaid_grade(result: &AnalysisResult) -> Option<f64> {
    ratios(result).map(|(wps, spw)| 0.39 * wps + 11.8 * spw - 15.59)
}
