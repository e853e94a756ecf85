//! Error types for the cedula-core library.

use thiserror::Error;

/// Main error type for the cedula library.
///
/// The parse path itself is total and never surfaces an error; these
/// variants cover the load-time edges around it (surname files,
/// configuration files).
#[derive(Error, Debug)]
pub enum CedulaError {
    /// Surname dictionary could not be built.
    #[error("dictionary error: {0}")]
    Dictionary(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the cedula library.
pub type Result<T> = std::result::Result<T, CedulaError>;
