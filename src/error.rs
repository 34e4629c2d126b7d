//! Error types for paraseg library.

use std::io;
use thiserror::Error;

/// Result type alias for paraseg operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while segmenting text.
///
/// Only fatal conditions are represented here. Odd page content (empty
/// pages, whitespace, oversize sentences) is absorbed by the packer.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid segmentation thresholds.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The sentence splitter could not be resolved or initialised.
    #[error("Sentence splitter unavailable: {0}")]
    CollaboratorUnavailable(String),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Error during rendering (JSON, JSON Lines).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
