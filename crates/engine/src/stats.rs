use crate::error::EngineError;
use crate::source::TextSource;
use serde::Serialize;
use word_count_core::{AnalysisResult, Document};

/// Statistics for one analysed source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceStats {
    pub source: String,
    #[serde(flatten)]
    pub counts: AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_ease: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<f64>,
}

impl SourceStats {
    #[must_use]
    pub fn from_document(source: &TextSource, document: &Document, readability: bool) -> Self {
        let (reading_ease, grade_level) = if readability {
            (
                document.flesch_reading_ease(),
                document.flesch_kincaid_grade(),
            )
        } else {
            (None, None)
        };
        Self {
            source: source.to_string(),
            counts: document.result(),
            reading_ease,
            grade_level,
        }
    }
}

/// Outcome of a run over several sources.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Sources analysed successfully, in input order.
    pub stats: Vec<SourceStats>,
    /// Sources that could not be read.
    pub errors: Vec<(TextSource, EngineError)>,
}

impl RunResult {
    #[must_use]
    pub fn total(&self) -> AnalysisResult {
        self.stats.iter().map(|s| s.counts).sum()
    }
}
