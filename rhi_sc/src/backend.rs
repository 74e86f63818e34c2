//! Backend trait implemented by each native compiler adapter
//!
//! A backend owns its native compiler handles for its whole lifetime and
//! turns one `BackendRequest` into one `BackendOutput`. Input validation,
//! source loading and output encoding are done by `Compiler`, so a backend
//! only ever sees requests for stages it reported as supported.

use std::fmt;
use std::path::Path;

use crate::options::CompileOptions;
use crate::stage::{GraphicsApi, ShaderStage};

/// The closed set of backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// DirectX Shader Compiler, driven by an argument list
    Dxc,
    /// shaderc, driven by a native options object
    Shaderc,
}

impl BackendKind {
    /// Lowercase name, as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            BackendKind::Dxc => "dxc",
            BackendKind::Shaderc => "shaderc",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a backend needs for one native compile
#[derive(Debug, Clone, Copy)]
pub struct BackendRequest<'a> {
    /// Full shader text
    pub source: &'a str,
    /// File name reported in diagnostics
    pub file_name: &'a str,
    /// Stage to compile for; always one the backend supports
    pub stage: ShaderStage,
    /// Caller options, translated by the backend
    pub options: &'a CompileOptions,
    /// API the bytecode is for, when the caller named one
    pub target_api: Option<GraphicsApi>,
    /// Directory `#include` directives are resolved against
    pub include_dir: Option<&'a Path>,
}

/// Native compile outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Success,
    Failure,
}

/// Normalized result of a native compile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOutput {
    pub status: BackendStatus,
    /// Compiled bytecode; empty on failure
    pub bytecode: Vec<u8>,
    /// Error and warning text from the compiler
    pub diagnostics: String,
    pub warning_count: u32,
}

impl BackendOutput {
    /// Successful compile
    pub fn success(bytecode: Vec<u8>, diagnostics: String, warning_count: u32) -> Self {
        Self {
            status: BackendStatus::Success,
            bytecode,
            diagnostics,
            warning_count,
        }
    }

    /// Failed compile; no bytecode is carried
    pub fn failure(diagnostics: String) -> Self {
        Self {
            status: BackendStatus::Failure,
            bytecode: Vec::new(),
            diagnostics,
            warning_count: 0,
        }
    }
}

/// Shader compiler backend
///
/// Compiles are sequential: `compile` takes `&mut self`, so one backend
/// instance never runs two compiles at once. Create one backend per thread
/// to compile in parallel. No state may leak from one compile to the next.
pub trait Backend {
    /// Which backend this is
    fn kind(&self) -> BackendKind;

    /// Whether `stage` maps to a native target profile
    ///
    /// `ShaderStage::None` is never supported.
    fn supports_stage(&self, stage: ShaderStage) -> bool;

    /// Run the native compiler synchronously
    fn compile(&mut self, request: &BackendRequest<'_>) -> BackendOutput;
}

/// Count lines that a compiler reported as warnings
///
/// Both DXC and glslang print `<file>:<line>:<col>: warning: <text>` style
/// diagnostics.
pub fn count_warnings(diagnostics: &str) -> u32 {
    let count = diagnostics
        .lines()
        .filter(|line| line.contains("warning:"))
        .count();
    saturating_count(count)
}

/// Clamp a line count to the `u32` warning counter
pub(crate) fn saturating_count(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
