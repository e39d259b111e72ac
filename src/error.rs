//! Error types for scanning

use std::path::PathBuf;

use thiserror::Error;

use crate::scan::MAX_LIMIT;

#[derive(Error, Debug)]
pub enum HogsError {
    /// The scan root is missing or is not a directory.
    #[error("{}: no such directory", .0.display())]
    NoSuchDirectory(PathBuf),

    /// The requested result count is outside `1..MAX_LIMIT`.
    #[error("count must be between 1 and {} (got {count})", MAX_LIMIT - 1)]
    InvalidCount { count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
