//! Command handlers for the `aggen` CLI.
//!
//! Handlers return `CliResult` instead of exiting so they can be driven from
//! tests; `main` turns errors into a message and exit code 1. Shared pieces
//! (facts loading, the error type) live here in the module root.

use std::path::{Path, PathBuf};

use aggen_build::RawFacts;
use serde::Deserialize;
use thiserror::Error;

mod generate;
mod model;
mod options;

pub use generate::{generate_files, GenerateReport};
pub use model::model_json;
pub use options::{parse_generate_options, GenerateOptions};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid facts in '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("{} generated unit(s) out of date: {}", .units.len(), .units.join(", "))]
    Stale { units: Vec<String> },
}

pub type CliResult<T> = Result<T, CliError>;

/// A facts file holds one declaration or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum FactsFile {
    Many(Vec<RawFacts>),
    One(Box<RawFacts>),
}

/// Read a facts file.
pub fn load_facts(path: &Path) -> CliResult<Vec<RawFacts>> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: FactsFile = serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let facts = match file {
        FactsFile::Many(facts) => facts,
        FactsFile::One(facts) => vec![*facts],
    };
    tracing::debug!(path = %path.display(), declarations = facts.len(), "loaded facts");
    Ok(facts)
}

/// Stable declaration key: file path plus position in the file.
///
/// The position is padded to the width of `usize::MAX` so keys sort in
/// position order.
pub(crate) fn declaration_key(path: &Path, index: usize) -> String {
    format!("{}#{index:020}", path.display())
}
