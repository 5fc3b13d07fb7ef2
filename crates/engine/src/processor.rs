use crate::error::Result;
use crate::source::TextSource;
use word_count_core::{AnalysisConfig, Document};

/// Read one source and analyse its text.
///
/// # Errors
///
/// Propagates the read error of the source.
pub fn process_source(source: &TextSource, config: &AnalysisConfig) -> Result<Document> {
    let text = source.read()?;
    let document = Document::with_config(text, config);
    log::debug!(
        "{source}: {} chars, {} words, {} sentences, {} syllables",
        document.num_characters(),
        document.num_words(),
        document.num_sentences(),
        document.num_syllables()
    );
    Ok(document)
}
