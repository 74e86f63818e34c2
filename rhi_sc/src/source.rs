/// Shader source descriptor: what to compile and for which stage

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::stage::ShaderStage;

/// Where the shader text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    /// Read from disk at compile time
    File(PathBuf),
    /// Already in memory; `filename` is only used in diagnostics
    Memory {
        /// Shader text
        shader: String,
        /// Virtual file name reported by the compiler
        filename: String,
    },
}

/// Shader source plus target stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    /// Source text location
    pub input: SourceInput,
    /// Pipeline stage to compile for
    pub stage: ShaderStage,
}

impl ShaderSource {
    /// Source read from `path` when compiled
    pub fn from_file(path: impl Into<PathBuf>, stage: ShaderStage) -> Self {
        Self {
            input: SourceInput::File(path.into()),
            stage,
        }
    }

    /// In-memory source with a virtual file name for diagnostics
    pub fn from_memory(shader: impl Into<String>, filename: impl Into<String>, stage: ShaderStage) -> Self {
        Self {
            input: SourceInput::Memory {
                shader: shader.into(),
                filename: filename.into(),
            },
            stage,
        }
    }

    /// Name shown in diagnostics and logs
    pub fn display_name(&self) -> Cow<'_, str> {
        match &self.input {
            SourceInput::File(path) => path.to_string_lossy(),
            SourceInput::Memory { filename, .. } => Cow::Borrowed(filename.as_str()),
        }
    }

    /// Resolve the shader text
    ///
    /// In-memory sources are borrowed as-is without any existence check.
    /// File sources must be UTF-8; anything else is `Unreadable`.
    pub(crate) fn load(&self) -> Result<LoadedSource<'_>, LoadFailure> {
        match &self.input {
            SourceInput::File(path) => {
                if !path.exists() {
                    return Err(LoadFailure::NotFound);
                }
                let text = std::fs::read_to_string(path)
                    .map_err(|e| LoadFailure::Unreadable(e.to_string()))?;
                Ok(LoadedSource {
                    text: Cow::Owned(text),
                    file_name: path.to_string_lossy().into_owned(),
                    include_dir: path.parent().map(Path::to_path_buf),
                })
            }
            SourceInput::Memory { shader, filename } => Ok(LoadedSource {
                text: Cow::Borrowed(shader.as_str()),
                file_name: filename.clone(),
                include_dir: None,
            }),
        }
    }
}

/// Shader text ready to hand to a backend
#[derive(Debug)]
pub(crate) struct LoadedSource<'a> {
    pub text: Cow<'a, str>,
    pub file_name: String,
    /// Directory `#include` directives are resolved against
    pub include_dir: Option<PathBuf>,
}

/// Why a source could not be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoadFailure {
    NotFound,
    Unreadable(String),
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
