//! Loading of line-delimited pattern and identifier files.

use crate::error::{ConfigError, Result};
use std::path::Path;

/// Read a flat file into its non-empty, trimmed lines.
///
/// Order is preserved and lines that are empty after trimming are dropped;
/// there is no comment syntax. A missing or unreadable path is a fatal
/// `FileAccess` error that aborts the whole load.
pub fn load_flat_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
