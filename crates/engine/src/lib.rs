// crates/engine/src/lib.rs
use rayon::prelude::*;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod session;
pub mod source;
pub mod stats;
pub mod watch;

use crate::config::Config;
use crate::error::Result;
use crate::stats::{RunResult, SourceStats};

/// Analyse every configured source.
///
/// Sources are read and analysed in parallel; the result keeps input order.
/// When `save_as` is set, the text of the single source is written there
/// after a successful read.
///
/// # Errors
///
/// Returns an error for an invalid configuration, a failed save, or, in
/// strict mode, the first source that cannot be read. Otherwise unreadable
/// sources are collected in `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    config.validate()?;

    let outcomes: Vec<_> = config
        .sources
        .par_iter()
        .map(|source| processor::process_source(source, &config.analysis))
        .collect();

    let mut result = RunResult::default();
    let mut last_document = None;

    for (source, outcome) in config.sources.iter().zip(outcomes) {
        match outcome {
            Ok(document) => {
                result.stats.push(SourceStats::from_document(
                    source,
                    &document,
                    config.readability,
                ));
                last_document = Some(document);
            }
            Err(e) if config.strict => return Err(e),
            Err(e) => {
                log::warn!("skipping {source}: {e}");
                result.errors.push((source.clone(), e));
            }
        }
    }

    if let (Some(path), Some(document)) = (&config.save_as, &last_document) {
        filesystem::write_text(path, document.text(), config.write_mode)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::source::TextSource;
    use tempfile::tempdir;

    #[test]
    fn test_run_keeps_order_and_collects_errors() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.txt");
        std::fs::write(&a, "One. Two.").unwrap();

        let config = Config {
            sources: vec![
                TextSource::Literal("Hi".into()),
                TextSource::Path(dir.path().join("missing.txt")),
                TextSource::Path(a),
            ],
            ..Config::default()
        };
        let result = run(&config).unwrap();
        assert_eq!(result.stats.len(), 2);
        assert_eq!(result.stats[0].source, "<text>");
        assert_eq!(result.stats[1].counts.sentences, 2);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.total().words, 3);
    }

    #[test]
    fn test_run_strict_fails_fast() {
        let dir = tempdir().unwrap();
        let config = Config {
            sources: vec![TextSource::Path(dir.path().join("missing.txt"))],
            strict: true,
            ..Config::default()
        };
        assert!(matches!(run(&config), Err(EngineError::FileRead { .. })));
    }

    #[test]
    fn test_run_saves_single_source() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.txt");
        let config = Config {
            sources: vec![TextSource::Literal("Saved as is".into())],
            save_as: Some(out.clone()),
            ..Config::default()
        };
        run(&config).unwrap();
        assert_eq!(std::fs::read_to_string(out).unwrap(), "Saved as is");
    }

    #[test]
    fn test_readability_is_optional() {
        let mut config = Config {
            sources: vec![TextSource::Literal("The cat sat. The dog ran.".into())],
            ..Config::default()
        };
        let plain = run(&config).unwrap();
        assert!(plain.stats[0].reading_ease.is_none());

        config.readability = true;
        let scored = run(&config).unwrap();
        assert!(scored.stats[0].reading_ease.is_some());
        assert!(scored.stats[0].grade_level.is_some());
    }
}
