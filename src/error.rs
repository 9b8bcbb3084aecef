//! Application error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open input file {path}: {source}")]
    InputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create output file {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn input_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputOpen {
            path: path.into(),
            source,
        }
    }

    pub fn output_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputCreate {
            path: path.into(),
            source,
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
