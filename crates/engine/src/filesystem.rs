// crates/engine/src/filesystem.rs
use crate::error::{EngineError, Result};
use crate::options::WriteMode;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Read a UTF-8 text file, normalizing line endings.
///
/// # Errors
///
/// Returns `FileRead` if the file cannot be opened or read and `InvalidUtf8`
/// if its contents are not UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| EngineError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(normalize_lines(&text))
}

/// Re-terminate every line with `\n`.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Every line, including the
/// last one, is followed by exactly one `\n` in the output; empty input stays
/// empty.
#[must_use]
pub fn normalize_lines(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 1);
    let mut rest = input;

    while !rest.is_empty() {
        let Some(i) = rest.find(['\r', '\n']) else {
            out.push_str(rest);
            out.push('\n');
            break;
        };
        out.push_str(&rest[..i]);
        out.push('\n');
        let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[i + skip..];
    }

    out
}

/// Persist `text` to `path` exactly as given.
///
/// # Errors
///
/// Returns `FileWrite` if the file cannot be created, opened or written.
pub fn write_text(path: &Path, text: &str, mode: WriteMode) -> Result<()> {
    let map_err = |e: std::io::Error| EngineError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let mut file = match mode {
        WriteMode::Truncate => OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path),
        WriteMode::Append => OpenOptions::new().append(true).create(true).open(path),
    }
    .map_err(map_err)?;

    file.write_all(text.as_bytes()).map_err(map_err)?;
    file.flush().map_err(map_err)?;

    log::info!("saved {} bytes to {}", text.len(), path.display());
    Ok(())
}
