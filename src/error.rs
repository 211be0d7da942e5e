//! Error types for the typeflow library.

use std::io;
use thiserror::Error;

/// Result type alias for typeflow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during pagination.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The page geometry leaves no printable area.
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    /// The measurer failed or returned an unusable width.
    #[error("Measurement failed for {text:?}: {reason}")]
    Measurement {
        /// The text being measured when the failure occurred.
        text: String,
        /// What went wrong.
        reason: String,
    },

    /// Error serializing or formatting a layout result.
    #[error("Rendering error: {0}")]
    Render(String),
}
