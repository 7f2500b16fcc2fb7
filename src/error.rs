// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("could not create {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("could not write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Reasons a chart spec cannot be mounted.
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("chart '{0}' has no data")]
    Empty(String),

    #[error("chart '{title}' has {labels} labels but {values} values")]
    LengthMismatch { title: String, labels: usize, values: usize },

    #[error("chart '{title}' value #{index} is not finite")]
    NonFinite { title: String, index: usize },

    #[error("chart '{title}' has an invalid colour {colour:?}")]
    BadColour { title: String, colour: String },
}
