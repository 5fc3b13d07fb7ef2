use crate::error::{EngineError, Result};
use crate::options::{OutputFormat, WatchOutput, WriteMode};
use crate::source::TextSource;
use derive_builder::Builder;
use std::path::PathBuf;
use std::time::Duration;
use word_count_core::AnalysisConfig;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub sources: Vec<TextSource>,
    #[builder(default)]
    pub analysis: AnalysisConfig,

    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    #[builder(default)]
    pub readability: bool,

    #[builder(default)]
    pub strict: bool,
    #[builder(default)]
    pub save_as: Option<PathBuf>,
    #[builder(default)]
    pub write_mode: WriteMode,

    #[builder(default)]
    pub watch: bool,
    #[builder(default = "Duration::from_secs(1)")]
    pub watch_interval: Duration,
    #[builder(default = "WatchOutput::Full")]
    pub watch_output: WatchOutput,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: vec![],
            analysis: AnalysisConfig::default(),
            format: OutputFormat::Table,
            readability: false,
            strict: false,
            save_as: None,
            write_mode: WriteMode::Truncate,
            watch: false,
            watch_interval: Duration::from_secs(1),
            watch_output: WatchOutput::Full,
        }
    }
}

impl Config {
    /// Check option combinations that cannot be expressed in the builder.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` describing the first conflict found.
    pub fn validate(&self) -> Result<()> {
        if self.save_as.is_some() && self.sources.len() != 1 {
            return Err(EngineError::Config(
                "--save-as needs exactly one input".to_string(),
            ));
        }
        if self.watch && !matches!(self.sources.as_slice(), [TextSource::Path(_)]) {
            return Err(EngineError::Config(
                "--watch needs exactly one file path".to_string(),
            ));
        }
        let stdin_inputs = self
            .sources
            .iter()
            .filter(|s| matches!(s, TextSource::Stdin))
            .count();
        if stdin_inputs > 1 {
            return Err(EngineError::Config(
                "standard input can only be read once".to_string(),
            ));
        }
        Ok(())
    }
}
