//! Error types for G-code emission.

use std::io;
use thiserror::Error;

/// Errors that can occur while emitting G-code.
///
/// Emission is not transactional: a failure mid-stream leaves a truncated
/// file behind, and no recovery is attempted.
#[derive(Error, Debug)]
pub enum EmitError {
    /// The output sink could not be written.
    #[error("I/O error writing G-code: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for emission.
pub type EmitResult<T> = Result<T, EmitError>;
