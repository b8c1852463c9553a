//! Command implementations for the `tomlctl` binary.
//!
//! Each command is a pure function over a file path: load, operate, and (for
//! the mutating commands) save. The binary entry point only dispatches and
//! maps results to exit statuses.

use std::path::Path;

use thiserror::Error;
use tomlctl_core::{delete, infer, lookup, parse, set, NavigateError, PathError};

use crate::codec;
use crate::file;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Path(#[from] PathError),
    #[error("{0}")]
    Navigate(#[from] NavigateError),
    #[error("path not found")]
    NotFound,
    #[error("{0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("{0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("cannot write to '{0}'")]
    InvalidTarget(String),
    #[error("{0}")]
    Usage(String),
}

/// Outcome of `has`, mapped to the process exit status by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Found,
    NotFound,
}

/// `tomlctl get <file> <path>` — render the value at `path`.
///
/// An absence marker left behind by array growth reads as "not found", the
/// same as a missing path.
pub fn get(file: &Path, path: &str) -> Result<String, CliError> {
    let tree = file::load(file)?;
    let tokens = parse(path)?;
    match lookup(&tree, &tokens) {
        Some(value) if !value.is_absent() => Ok(value.to_string()),
        _ => Err(CliError::NotFound),
    }
}

/// `tomlctl set <file> <path> <value>` — infer the value's type, write it,
/// and save the file.
pub fn set_value(file: &Path, path: &str, raw: &str) -> Result<(), CliError> {
    let mut tree = file::load(file)?;
    let tokens = parse(path)?;
    set(&mut tree, &tokens, infer(raw))?;
    file::save(file, &tree)
}

/// `tomlctl has <file> <path>` — presence check.
///
/// Path syntax errors are still surfaced as errors; only a well-formed path
/// with nothing at it reports [`Presence::NotFound`].
pub fn has(file: &Path, path: &str) -> Result<Presence, CliError> {
    let tree = file::load(file)?;
    let tokens = parse(path)?;
    match lookup(&tree, &tokens) {
        Some(value) if !value.is_absent() => Ok(Presence::Found),
        _ => Ok(Presence::NotFound),
    }
}

/// `tomlctl del <file> <path>` — remove the value and save the file.
/// Deleting a path that does not exist is a success.
pub fn del(file: &Path, path: &str) -> Result<(), CliError> {
    let mut tree = file::load(file)?;
    let tokens = parse(path)?;
    delete(&mut tree, &tokens);
    file::save(file, &tree)
}

/// `tomlctl list <file> [path] [--json]` — render the whole tree, or the
/// subtree at `path`.
pub fn list(file: &Path, path: Option<&str>, json: bool) -> Result<String, CliError> {
    let tree = file::load(file)?;
    let value = match path {
        None => &tree,
        Some(path) => {
            let tokens = parse(path)?;
            match lookup(&tree, &tokens) {
                Some(value) if !value.is_absent() => value,
                _ => return Err(CliError::NotFound),
            }
        }
    };
    if json {
        Ok(serde_json::to_string_pretty(&codec::to_json(value))?)
    } else {
        Ok(value.to_string())
    }
}
