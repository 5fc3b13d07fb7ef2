// crates/engine/src/session.rs
//! Application state for an interactive front end.
//!
//! A `Session` owns the text being edited and its latest analysis. Front ends
//! hold one and pass it to their event handlers.

use crate::error::{EngineError, Result};
use crate::filesystem;
use crate::options::WriteMode;
use crate::source::TextSource;
use std::path::Path;
use word_count_core::{AnalysisConfig, Document};

/// Monotonic counter identifying one accepted text.
pub type Generation = u64;

#[derive(Debug, Clone)]
pub struct Session {
    config: AnalysisConfig,
    source: Option<TextSource>,
    document: Document,
    generation: Generation,
}

impl Session {
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            source: None,
            document: Document::with_config(String::new(), &config),
            generation: 0,
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.document.text()
    }

    /// Source of the current text, if it was loaded rather than typed.
    #[must_use]
    pub fn source(&self) -> Option<&TextSource> {
        self.source.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether a result computed for `generation` still describes the
    /// current text.
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.generation
    }

    /// Replace the text after an edit and re-analyse it.
    pub fn set_text(&mut self, text: impl Into<String>) -> Generation {
        self.document = Document::with_config(text, &self.config);
        self.generation += 1;
        self.generation
    }

    /// Load text from `source`.
    ///
    /// # Errors
    ///
    /// Returns the read error. The current text, source and generation are
    /// left untouched.
    pub fn load(&mut self, source: TextSource) -> Result<Generation> {
        let text = source.read().inspect_err(|e| {
            log::warn!("failed to load {source}: {e}");
        })?;
        log::debug!("loaded {source}");
        self.source = Some(source);
        Ok(self.set_text(text))
    }

    /// Load the current source again.
    ///
    /// # Errors
    ///
    /// Fails if there is no source or it can no longer be read.
    pub fn reload(&mut self) -> Result<Generation> {
        let source = self
            .source
            .clone()
            .ok_or_else(|| EngineError::Config("nothing to reload".to_string()))?;
        self.load(source)
    }

    /// Write the current text verbatim.
    ///
    /// # Errors
    ///
    /// Returns `FileWrite` on failure; the session itself is unchanged.
    pub fn save(&self, path: &Path, mode: WriteMode) -> Result<()> {
        filesystem::write_text(path, self.text(), mode)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::default();
        assert_eq!(session.text(), "");
        assert_eq!(session.document().num_words(), 0);
        assert_eq!(session.generation(), 0);
        assert!(session.source().is_none());
    }

    #[test]
    fn test_set_text_bumps_generation() {
        let mut session = Session::default();
        let g1 = session.set_text("Hello there.");
        let g2 = session.set_text("Hello there. General");
        assert!(g2 > g1);
        assert!(!session.is_current(g1));
        assert!(session.is_current(g2));
        assert_eq!(session.document().num_sentences(), 2);
    }

    #[test]
    fn test_failed_load_keeps_state() {
        let mut session = Session::default();
        let generation = session.set_text("Keep me.");
        let before = session.document().result();

        let dir = tempdir().unwrap();
        let missing = TextSource::Path(dir.path().join("missing.txt"));
        assert!(session.load(missing).is_err());

        assert_eq!(session.text(), "Keep me.");
        assert_eq!(session.document().result(), before);
        assert!(session.is_current(generation));
        assert!(session.source().is_none());
    }

    #[test]
    fn test_load_and_reload() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "One two.").unwrap();
        let source = TextSource::Path(file.path().to_path_buf());

        let mut session = Session::default();
        session.load(source.clone()).unwrap();
        assert_eq!(session.text(), "One two.\n");
        assert_eq!(session.source(), Some(&source));

        std::fs::write(file.path(), "One two. Three four.").unwrap();
        session.reload().unwrap();
        assert_eq!(session.document().num_sentences(), 2);
    }

    #[test]
    fn test_reload_without_source() {
        let mut session = Session::default();
        assert!(matches!(session.reload(), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_save_writes_text_verbatim() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.txt");
        let mut session = Session::default();
        session.set_text("Line one\nLine two");
        session.save(&path, WriteMode::Truncate).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Line one\nLine two");
    }
}
