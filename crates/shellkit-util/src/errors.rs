use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all shellkit operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ToolError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A directory could not be read during a tree walk.
    #[error("Cannot read directory {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },

    /// An archive could not be opened or extracted.
    #[error("Archive error in {}: {message}", path.display())]
    #[diagnostic(help("Check that the file is a valid zip or jar archive"))]
    Archive { path: PathBuf, message: String },

    /// An external command could not be spawned or exited unsuccessfully.
    #[error("Process error: {message}")]
    Process { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ToolResult<T> = miette::Result<T>;
