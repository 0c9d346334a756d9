//! Input loading for the command line.
//!
//! Reads files (relative to the working directory) and standard input into
//! memory. The summarization engine itself never touches the filesystem.

use crate::summary::FileInput;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest input accepted, in characters.
pub const MAX_INPUT_CHARS: usize = 100_000;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read standard input: {0}")]
    StdinError(#[from] std::io::Error),
    #[error("input is {0} characters long, the limit is {MAX_INPUT_CHARS}")]
    TooLarge(usize),
}

/// Resolve `path` against the current working directory.
pub fn resolve_path(path: &Path) -> Result<PathBuf, SourceError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|source| SourceError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(path))
}

/// Read a UTF-8 file into memory, keeping the path as given for reporting.
pub fn load_file(path: &Path) -> Result<FileInput, SourceError> {
    let resolved = resolve_path(path)?;
    let content = std::fs::read_to_string(&resolved).map_err(|source| SourceError::ReadError {
        path: resolved.clone(),
        source,
    })?;
    check_size(&content)?;

    Ok(FileInput {
        path: path.to_path_buf(),
        content,
    })
}

/// Read all of standard input.
pub fn read_stdin() -> Result<String, SourceError> {
    read_from(std::io::stdin().lock())
}

/// Read all of `reader` as UTF-8 text.
pub fn read_from<R: Read>(mut reader: R) -> Result<String, SourceError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    check_size(&text)?;
    Ok(text)
}

fn check_size(text: &str) -> Result<(), SourceError> {
    let chars = text.chars().count();
    if chars > MAX_INPUT_CHARS {
        return Err(SourceError::TooLarge(chars));
    }
    Ok(())
}
