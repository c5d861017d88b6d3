//! Output-file naming and writing.

use std::path::Path;

use crate::error::{ConfgenError, Result};

/// Extension appended to output filenames that lack it.
const OUTPUT_EXTENSION: &str = ".txt";

/// Derive the output filename from a raw filename-field value.
///
/// Surrounding whitespace is trimmed; a value that is empty after trimming
/// yields `None` (the row is skipped). `.txt` is appended unless the value
/// already ends with it, comparing case-sensitively. The value may contain
/// path separators to target a subdirectory.
pub fn output_filename(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.ends_with(OUTPUT_EXTENSION) {
        Some(trimmed.to_string())
    } else {
        Some(format!("{trimmed}{OUTPUT_EXTENSION}"))
    }
}

/// Write `content` to `path` as UTF-8, overwriting any existing file.
///
/// Missing parent directories are created first. Failures here are reported
/// per row by the caller and do not abort the batch.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tracing::debug!("creating directory {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| ConfgenError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }
    std::fs::write(path, content).map_err(|e| ConfgenError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
