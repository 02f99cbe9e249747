//! Error types for textree

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias for textree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Everything that can abort a run. Nothing is retried or recovered from.
#[derive(Error, Debug)]
pub enum TreeError {
    /// A directory could not be listed (missing, not a directory, permission denied)
    #[error("cannot read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The intermediate graph description could not be written
    #[error("cannot write graph source '{path}': {source}")]
    WriteSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The layout program could not be started (usually: Graphviz is not installed)
    #[error("cannot run '{program}' (is Graphviz installed?): {source}")]
    RendererUnavailable {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The layout program ran but reported failure
    #[error("rendering failed ({status}): {stderr}")]
    RenderFailed { status: ExitStatus, stderr: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TreeError {
    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }
}
