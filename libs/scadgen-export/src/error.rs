//! Error types for script-file writing and viewer launching.

use thiserror::Error;

/// Errors surfaced by the export path.
///
/// Failures are immediate and local; nothing is retried.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing the script file failed.
    #[error("failed to write script file: {0}")]
    Io(#[from] std::io::Error),

    /// Spawning the external viewer process failed.
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        /// The program that could not be started.
        program: String,
        /// The underlying OS error.
        source: std::io::Error,
    },
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
