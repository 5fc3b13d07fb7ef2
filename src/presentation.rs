// src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use std::fmt::Write as _;
use std::io::Write;
use word_count_core::AnalysisResult;
use word_count_engine::options::{OutputFormat, WatchOutput};
use word_count_engine::session::Session;
use word_count_engine::stats::SourceStats;

pub fn print_clear_screen(output: WatchOutput) {
    if matches!(output, WatchOutput::Full) {
        print!("\x1B[2J\x1B[1;1H");
    }
}

/// Print the report for `stats` to stdout in the configured format.
///
/// # Errors
///
/// Fails if serialization or writing to stdout fails.
pub fn print_results(stats: &[SourceStats], config: &Config) -> Result<()> {
    let rendered = render_results(stats, config)?;
    let mut out = std::io::stdout().lock();
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Render the report for `stats` in the configured format.
///
/// # Errors
///
/// Fails if JSON or YAML serialization fails.
pub fn render_results(stats: &[SourceStats], config: &Config) -> Result<String> {
    Ok(match config.format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(stats)?),
        OutputFormat::Yaml => serde_yaml::to_string(stats)?,
        OutputFormat::Jsonl => render_jsonl(stats)?,
        OutputFormat::Md => render_markdown(stats, config),
        OutputFormat::Csv => render_sv(stats, config, ","),
        OutputFormat::Tsv => render_sv(stats, config, "\t"),
        OutputFormat::Table => render_table(stats, config),
    })
}

/// Print one watch-mode update.
///
/// # Errors
///
/// Fails if serialization or writing to stdout fails.
pub fn print_watch_update(session: &Session, config: &Config) -> Result<()> {
    match config.watch_output {
        WatchOutput::Full => {
            print_clear_screen(config.watch_output);
            let source = session
                .source()
                .cloned()
                .unwrap_or(word_count_engine::source::TextSource::Stdin);
            let stats =
                SourceStats::from_document(&source, session.document(), config.readability);
            print_results(std::slice::from_ref(&stats), config)
        }
        WatchOutput::Jsonl => {
            let counts = session.document().result();
            let record = serde_json::json!({
                "type": "update",
                "generation": session.generation(),
                "timestamp": chrono::Local::now().to_rfc3339(),
                "source": session.source().map(ToString::to_string),
                "characters": counts.characters,
                "syllables": counts.syllables,
                "words": counts.words,
                "sentences": counts.sentences,
            });
            let mut out = std::io::stdout().lock();
            writeln!(out, "{record}")?;
            out.flush()?;
            Ok(())
        }
    }
}

fn total(stats: &[SourceStats]) -> AnalysisResult {
    stats.iter().map(|s| s.counts).sum()
}

fn score(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

fn render_table(stats: &[SourceStats], config: &Config) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "word_count v{}", crate::VERSION);
    let _ = writeln!(out);

    if config.readability {
        let _ = writeln!(
            out,
            "CHARACTERS  SYLLABLES      WORDS  SENTENCES      EASE     GRADE     SOURCE"
        );
    } else {
        let _ = writeln!(out, "CHARACTERS  SYLLABLES      WORDS  SENTENCES     SOURCE");
    }
    let _ = writeln!(out, "------------------------------------------------------");

    for s in stats {
        let c = &s.counts;
        if config.readability {
            let _ = writeln!(
                out,
                "{:>10}{:>11}{:>11}{:>11}{:>10}{:>10}     {}",
                c.characters,
                c.syllables,
                c.words,
                c.sentences,
                score(s.reading_ease),
                score(s.grade_level),
                s.source
            );
        } else {
            let _ = writeln!(
                out,
                "{:>10}{:>11}{:>11}{:>11}     {}",
                c.characters, c.syllables, c.words, c.sentences, s.source
            );
        }
    }

    if stats.len() > 1 {
        let t = total(stats);
        let count = stats.len();
        let _ = writeln!(out, "---");
        let _ = writeln!(
            out,
            "{:>10}{:>11}{:>11}{:>11}     TOTAL ({count} inputs)",
            t.characters, t.syllables, t.words, t.sentences
        );
    }

    out
}

fn render_jsonl(stats: &[SourceStats]) -> Result<String> {
    let mut out = String::new();
    for s in stats {
        let mut v = serde_json::to_value(s)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "source".into());
        }
        let _ = writeln!(out, "{v}");
    }

    let t = total(stats);
    let total_obj = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "inputs": stats.len(),
        "characters": t.characters,
        "syllables": t.syllables,
        "words": t.words,
        "sentences": t.sentences,
    });
    let _ = writeln!(out, "{total_obj}");
    Ok(out)
}

fn render_markdown(stats: &[SourceStats], config: &Config) -> String {
    let mut out = String::from("### Text Statistics\n\n");
    let mut header = String::from("| Characters | Syllables | Words | Sentences |");
    let mut separator = String::from("|---:|---:|---:|---:|");
    if config.readability {
        header.push_str(" Ease | Grade |");
        separator.push_str("---:|---:|");
    }
    header.push_str(" Source |");
    separator.push_str(":---|");
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{separator}");

    for s in stats {
        let c = &s.counts;
        let mut row = format!(
            "| {} | {} | {} | {} |",
            c.characters, c.syllables, c.words, c.sentences
        );
        if config.readability {
            let _ = write!(row, " {} | {} |", score(s.reading_ease), score(s.grade_level));
        }
        let _ = write!(row, " {} |", s.source.replace('|', "\\|"));
        let _ = writeln!(out, "{row}");
    }
    out
}

fn render_sv(stats: &[SourceStats], config: &Config, delimiter: &str) -> String {
    let mut columns = vec!["characters", "syllables", "words", "sentences"];
    if config.readability {
        columns.extend(["reading_ease", "grade_level"]);
    }
    columns.push("source");

    let mut out = columns.join(delimiter);
    out.push('\n');

    for s in stats {
        let c = &s.counts;
        let mut fields = vec![
            c.characters.to_string(),
            c.syllables.to_string(),
            c.words.to_string(),
            c.sentences.to_string(),
        ];
        if config.readability {
            fields.push(s.reading_ease.map(|v| format!("{v:.2}")).unwrap_or_default());
            fields.push(s.grade_level.map(|v| format!("{v:.2}")).unwrap_or_default());
        }
        let source = &s.source;
        if delimiter == "," && (source.contains(',') || source.contains('"') || source.contains('\n'))
        {
            fields.push(format!("\"{}\"", source.replace('"', "\"\"")));
        } else {
            fields.push(source.clone());
        }
        out.push_str(&fields.join(delimiter));
        out.push('\n');
    }
    out
}
