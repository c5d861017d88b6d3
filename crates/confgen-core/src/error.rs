//! Unified error types for confgen.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while generating files.
///
/// Template and table errors are fatal: the run aborts before any output is
/// written. Output errors are raised per row and the batch loop decides
/// whether to continue (it does).
#[derive(Error, Debug)]
pub enum ConfgenError {
    // --- Template ---

    /// The template file does not exist.
    #[error("template file not found at {path}")]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template file exists but could not be read as UTF-8 text.
    #[error("failed to read template at {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Table ---

    /// The table file does not exist.
    #[error("table file not found at {path}")]
    TableNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table file exists but could not be opened for reading.
    #[error("failed to read table at {path}")]
    TableRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited data: a row whose field count differs from the
    /// header, broken quoting, invalid UTF-8, or an I/O failure mid-read.
    #[error("failed to parse table at {path}")]
    TableParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header has no columns, or there are no data rows.
    #[error("table at {path} has no columns or no data rows")]
    EmptyTable { path: PathBuf },

    // --- Output ---

    /// Creating a parent directory for an output file failed.
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing an output file failed.
    #[error("failed to write {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Alias for `Result<T, ConfgenError>`.
pub type Result<T> = std::result::Result<T, ConfgenError>;
