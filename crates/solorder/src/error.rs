//! Error types for Solorder operations.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for Solorder operations.
///
/// Classification itself cannot fail; these are the ways the surrounding
/// file handling and configuration can.
#[derive(Debug, Error)]
pub enum SolorderError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("project root not found: {}", .0.display())]
    ProjectRootNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),
}
