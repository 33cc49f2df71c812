//! Error types for gentree.

use std::path::PathBuf;

use thiserror::Error;

/// Shared `Result` alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Directory '{}' does not exist.", path.display())]
    RootNotFound { path: PathBuf },

    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("error writing output: {0}")]
    Output(#[from] std::io::Error),
}
