// src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
pub use word_count_engine::config::{Config, ConfigBuilder};
use word_count_core::{AnalysisConfig, CharUnit, SentenceRule};
use word_count_engine::options as engine_options;
use word_count_engine::source::TextSource;
use std::time::Duration;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let sources = sources_from_args(&args);

        let analysis = AnalysisConfig {
            sentence_rule: if args.legacy_sentences {
                SentenceRule::Legacy
            } else {
                SentenceRule::Positional
            },
            char_unit: if args.scalar_chars {
                CharUnit::Scalar
            } else {
                CharUnit::Utf16
            },
        };

        let write_mode = if args.append {
            engine_options::WriteMode::Append
        } else {
            engine_options::WriteMode::Truncate
        };

        let format: engine_options::OutputFormat = args.format.into();
        let watch_output: engine_options::WatchOutput = args.watch_output.into();

        let config = ConfigBuilder::default()
            .sources(sources)
            .analysis(analysis)
            .format(format)
            .readability(args.readability)
            .strict(args.strict)
            .save_as(args.save_as)
            .write_mode(write_mode)
            .watch(args.watch)
            .watch_interval(Duration::from_secs(args.watch_interval.unwrap_or(1)))
            .watch_output(watch_output)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }
}

/// Positional paths first, then resources, then `--text`. No input at all
/// means standard input.
fn sources_from_args(args: &Args) -> Vec<TextSource> {
    let mut sources: Vec<TextSource> = args
        .paths
        .iter()
        .map(|p| TextSource::from_arg(p))
        .collect();
    sources.extend(args.resource.iter().cloned().map(TextSource::Resource));
    if let Some(text) = &args.text {
        sources.push(TextSource::Literal(text.clone()));
    }
    if sources.is_empty() {
        sources.push(TextSource::Stdin);
    }
    sources
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::OutputFormat,
    engine_options::OutputFormat,
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Md,
    Jsonl
);
map_enum!(
    options::WatchOutput,
    engine_options::WatchOutput,
    Full,
    Jsonl
);
