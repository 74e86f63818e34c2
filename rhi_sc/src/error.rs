//! Error types for the shader compiler infrastructure
//!
//! Compile outcomes (missing source file, invalid stage, compiler diagnostics)
//! are reported through `CompilationResult`, never through this type. `Error`
//! covers the surrounding machinery: creating a backend, decoding containers
//! and writing output files.

use std::fmt;

/// Result type for shader compiler infrastructure operations
pub type Result<T> = std::result::Result<T, Error>;

/// Shader compiler infrastructure errors
#[derive(Debug, Clone)]
pub enum Error {
    /// The native compiler library could not be loaded or instantiated
    BackendUnavailable(String),

    /// Backend-specific error (DXC, shaderc)
    BackendError(String),

    /// A byte buffer is not a well-formed bytecode container
    InvalidContainer(String),

    /// File system error
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendUnavailable(msg) => write!(f, "Backend unavailable: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidContainer(msg) => write!(f, "Invalid container: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
