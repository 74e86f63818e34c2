/// Compilation outcome types

use std::fmt;

/// Status of a single compile call
///
/// `None` is the only success value; every other variant is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompilationError {
    /// Compilation and encoding succeeded
    #[default]
    None,
    /// A path-based source does not exist
    NonExistentFile,
    /// The compiler rejected the shader, or an internal step failed
    Error,
    /// The requested output is not available for the target API
    APINotAvailable,
    /// The stage has no target profile in the backend
    InvalidStage,
}

impl fmt::Display for CompilationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CompilationError::None => "success",
            CompilationError::NonExistentFile => "source file not found",
            CompilationError::Error => "compilation failed",
            CompilationError::APINotAvailable => "API not available",
            CompilationError::InvalidStage => "invalid shader stage",
        };
        f.write_str(text)
    }
}

/// Result of a compile call
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompilationResult {
    /// Number of warnings reported by the backend
    pub warning_count: u32,
    /// Compiler output, formatted by the backend
    pub messages: String,
    /// Status
    pub error: CompilationError,
}

impl CompilationResult {
    /// Successful result carrying backend diagnostics (warnings)
    pub fn success(warning_count: u32, messages: impl Into<String>) -> Self {
        Self {
            warning_count,
            messages: messages.into(),
            error: CompilationError::None,
        }
    }

    /// Failed result with a message
    pub fn failure(error: CompilationError, messages: impl Into<String>) -> Self {
        Self {
            warning_count: 0,
            messages: messages.into(),
            error,
        }
    }

    /// `true` when `error` is `CompilationError::None`
    pub fn is_success(&self) -> bool {
        self.error == CompilationError::None
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
