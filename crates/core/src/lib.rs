#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod config;
pub mod document;
pub mod readability;
pub mod stats;
pub mod syllables;
pub mod tokenizer;

pub use config::{AnalysisConfig, CharUnit, SentenceRule};
pub use document::Document;
pub use stats::AnalysisResult;
