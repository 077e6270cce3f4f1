//! Error handling for the packsmith application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for packsmith operations.
///
/// This enum represents all possible errors that can occur while building an
/// addon. It implements the standard Error trait through thiserror's derive
/// macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    Io(#[from] io::Error),

    /// Represents errors that occur during configuration loading or validation
    #[error("Configuration error: {0}.")]
    Config(String),

    /// Represents errors in manifest template rendering
    #[error("Manifest template error: {0}.")]
    Template(String),

    /// Represents invalid compilation ignore patterns
    #[error("Ignore pattern error: {0}.")]
    IgnorePattern(String),

    /// Represents an unrecognized release stage string
    #[error("'{0}' is not a valid release stage (expected one of: prealpha, alpha, beta, rc, stable).")]
    InvalidReleaseStage(String),

    /// The external script compiler exited with a non-zero status
    #[error("Failed to compile scripts.\n{output}")]
    Compilation { output: String },

    /// The external script bundler exited with a non-zero status
    #[error("Failed to bundle scripts.\n{output}")]
    Bundling { output: String },
}

/// Convenience type alias for Results with packsmith's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
