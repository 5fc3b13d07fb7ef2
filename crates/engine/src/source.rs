// crates/engine/src/source.rs
//! Where analysed text comes from.
//!
//! The caller picks the source explicitly. A path is never looked up among
//! the embedded resources and a resource name is never tried on disk.

use crate::error::{EngineError, Result};
use crate::filesystem;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;

/// Texts bundled into the binary, by name.
const RESOURCES: &[(&str, &str)] = &[
    ("pangrams", include_str!("../resources/pangrams.txt")),
    ("sample", include_str!("../resources/sample.txt")),
];

/// Look up an embedded text by name.
#[must_use]
pub fn resource(name: &str) -> Option<&'static str> {
    RESOURCES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, text)| *text)
}

/// Names of all embedded texts, in declaration order.
pub fn resource_names() -> impl Iterator<Item = &'static str> {
    RESOURCES.iter().map(|(name, _)| *name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// A file on disk, read as UTF-8 with line endings normalized.
    Path(PathBuf),
    /// A text embedded in the binary.
    Resource(String),
    /// Standard input, read to the end.
    Stdin,
    /// Text given directly, analysed verbatim.
    Literal(String),
}

impl TextSource {
    /// Interpret a positional CLI argument: `-` is stdin, anything else a path.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }

    /// Load the text this source refers to.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not UTF-8, if stdin cannot be
    /// read, or if the resource name is unknown.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Path(path) => filesystem::read_text(path),
            Self::Resource(name) => resource(name)
                .map(filesystem::normalize_lines)
                .ok_or_else(|| EngineError::UnknownResource(name.clone())),
            Self::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(EngineError::Stdin)?;
                Ok(filesystem::normalize_lines(&buf))
            }
            Self::Literal(text) => Ok(text.clone()),
        }
    }
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Resource(name) => write!(f, "resource:{name}"),
            Self::Stdin => f.write_str("<stdin>"),
            Self::Literal(_) => f.write_str("<text>"),
        }
    }
}
