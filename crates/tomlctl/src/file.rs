//! Loading and atomically saving the backing TOML file.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use tomlctl_core::Value;

use crate::cli::CliError;
use crate::codec;

/// Read and deserialize a TOML file into a document tree.
pub fn load(path: &Path) -> Result<Value, CliError> {
    let text = fs::read_to_string(path)?;
    let table: toml::Table = text.parse()?;
    Ok(codec::from_toml(toml::Value::Table(table)))
}

/// Serialize a document tree back to `path`.
///
/// The document is written to a dot-prefixed unique temp file in the same
/// directory, then renamed over the original, so readers never observe a
/// half-written file.
pub fn save(path: &Path, tree: &Value) -> Result<(), CliError> {
    let text = toml::to_string_pretty(&codec::to_toml(tree))?;

    let file_name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return Err(CliError::InvalidTarget(path.display().to_string())),
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let tmp = dir.join(format!(".{file_name}.{nanos}.tmp"));

    fs::write(&tmp, text)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
