/*!
# RHI Shader Compiler

Backend-agnostic shader compilation for the RHI.

This crate provides one stable compile contract over several native shader
compilers. Callers describe *what* to compile (`ShaderSource`) and *how*
(`CompileOptions`); a backend implementing the `Backend` trait does the
actual compilation, and the `Compiler` facade normalizes the outcome into a
`CompilationResult` and encodes the bytecode.

## Architecture

- **CompileOptions**: macros, optimization level, debug symbols, entry point
- **ShaderSource**: file or in-memory source plus pipeline stage
- **Backend**: trait implemented by native compiler adapters
  (`rhi_sc_dxc`, `rhi_sc_shaderc`)
- **Compiler**: `compile_to_file` / `compile_to_buffer`
- **container**: raw and length-prefixed output layouts
*/

// Internal modules
mod error;
mod backend;
mod compiler;
mod options;
mod result;
mod source;
mod stage;
pub mod container;
pub mod log;

#[cfg(test)]
mod mock_backend;

// Error types
pub use error::{Error, Result};

// Backend interface
pub use backend::{
    Backend, BackendKind, BackendOutput, BackendRequest, BackendStatus,
    count_warnings,
};

// Facade and data model
pub use compiler::Compiler;
pub use container::OutputRepresentation;
pub use options::{CompileOptions, MacroDefinition, OptimizationLevel};
pub use result::{CompilationError, CompilationResult};
pub use source::{ShaderSource, SourceInput};
pub use stage::{GraphicsApi, ShaderStage};
