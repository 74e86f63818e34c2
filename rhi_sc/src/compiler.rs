//! Compiler facade
//!
//! `Compiler` sequences one compile: validate the request, load the source,
//! run the backend, encode the bytecode. The first failing step decides the
//! returned status and nothing after it runs. Nothing is retried.

use std::path::Path;

use crate::backend::{Backend, BackendKind, BackendRequest, BackendStatus};
use crate::container::{self, OutputRepresentation};
use crate::options::CompileOptions;
use crate::result::{CompilationError, CompilationResult};
use crate::source::{LoadFailure, ShaderSource};
use crate::stage::GraphicsApi;
use crate::{sc_debug, sc_trace};

const LOG_SOURCE: &str = "rhi_sc::Compiler";

/// Bytecode plus the result that produced it
struct Compiled {
    bytecode: Vec<u8>,
    result: CompilationResult,
}

/// Shader compiler bound to one backend
///
/// The backend is constructed once and reused for every compile. A
/// `Compiler` is not meant to be shared between threads; create one per
/// worker instead.
///
/// # Example
///
/// ```no_run
/// use rhi_sc::{Backend, Compiler, CompileOptions, ShaderSource, ShaderStage};
/// use std::path::Path;
///
/// fn build(backend: impl Backend + 'static) {
///     let mut compiler = Compiler::new(backend);
///     let mut options = CompileOptions::new();
///     options.add_macro_definition("USE_FOG", Some("1"));
///
///     let source = ShaderSource::from_file("shaders/sky.hlsl", ShaderStage::Pixel);
///     let result = compiler.compile_to_file(&source, &options, Path::new("sky.spv"));
///     if !result.is_success() {
///         eprintln!("{}", result.messages);
///     }
/// }
/// ```
pub struct Compiler {
    backend: Box<dyn Backend>,
}

impl Compiler {
    /// Create a compiler that owns `backend`
    pub fn new<B: Backend + 'static>(backend: B) -> Self {
        Self::from_boxed(Box::new(backend))
    }

    /// Create a compiler from an already boxed backend
    pub fn from_boxed(backend: Box<dyn Backend>) -> Self {
        sc_debug!(LOG_SOURCE, "Using {} backend", backend.kind());
        Self { backend }
    }

    /// Backend this compiler drives
    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Compile `source` and write it to `output` as a container
    ///
    /// `output` is only created (or truncated) once the backend produced
    /// bytecode, and is written completely or not at all.
    pub fn compile_to_file(
        &mut self,
        source: &ShaderSource,
        options: &CompileOptions,
        output: &Path,
    ) -> CompilationResult {
        let compiled = match self.compile(source, options, None) {
            Ok(compiled) => compiled,
            Err(result) => return result,
        };

        if let Err(e) = container::write_container_file(output, &compiled.bytecode) {
            return CompilationResult::failure(CompilationError::Error, e.to_string());
        }

        sc_debug!(
            LOG_SOURCE,
            "Wrote {} bytes of bytecode to '{}'",
            compiled.bytecode.len(),
            output.display()
        );
        compiled.result
    }

    /// Compile `source` for `api` and return the encoded bytes
    ///
    /// `OutputRepresentation::Memory` is only available for Vulkan; asking
    /// for it with any other API fails with `APINotAvailable` before the
    /// backend is invoked. On failure the returned buffer is empty.
    pub fn compile_to_buffer(
        &mut self,
        api: GraphicsApi,
        source: &ShaderSource,
        options: &CompileOptions,
        representation: OutputRepresentation,
    ) -> (CompilationResult, Vec<u8>) {
        if representation == OutputRepresentation::Memory && api != GraphicsApi::Vulkan {
            return (
                CompilationResult::failure(
                    CompilationError::APINotAvailable,
                    format!("Memory representation is only available for Vulkan, not {}", api),
                ),
                Vec::new(),
            );
        }

        let compiled = match self.compile(source, options, Some(api)) {
            Ok(compiled) => compiled,
            Err(result) => return (result, Vec::new()),
        };

        match container::encode(&compiled.bytecode, representation) {
            Ok(bytes) => (compiled.result, bytes),
            Err(e) => (
                CompilationResult::failure(CompilationError::Error, e.to_string()),
                Vec::new(),
            ),
        }
    }

    /// Validate, load and run the backend
    fn compile(
        &mut self,
        source: &ShaderSource,
        options: &CompileOptions,
        target_api: Option<GraphicsApi>,
    ) -> Result<Compiled, CompilationResult> {
        let kind = self.backend.kind();

        if !self.backend.supports_stage(source.stage) {
            return Err(CompilationResult::failure(
                CompilationError::InvalidStage,
                format!("Invalid shader stage '{}' for the {} backend", source.stage, kind),
            ));
        }

        let loaded = source.load().map_err(|failure| match failure {
            LoadFailure::NotFound => CompilationResult::failure(
                CompilationError::NonExistentFile,
                format!("Source file '{}' was not found", source.display_name()),
            ),
            LoadFailure::Unreadable(reason) => CompilationResult::failure(
                CompilationError::Error,
                format!("Cannot read '{}': {}", source.display_name(), reason),
            ),
        })?;

        sc_debug!(LOG_SOURCE, "Compiling '{}' ({}) with {}", loaded.file_name, source.stage, kind);

        let output = self.backend.compile(&BackendRequest {
            source: &loaded.text,
            file_name: &loaded.file_name,
            stage: source.stage,
            options,
            target_api,
            include_dir: loaded.include_dir.as_deref(),
        });

        if output.status == BackendStatus::Failure {
            return Err(CompilationResult::failure(CompilationError::Error, output.diagnostics));
        }

        sc_trace!(
            LOG_SOURCE,
            "'{}' produced {} bytes, {} warning(s)",
            loaded.file_name,
            output.bytecode.len(),
            output.warning_count
        );

        Ok(Compiled {
            bytecode: output.bytecode,
            result: CompilationResult::success(output.warning_count, output.diagnostics),
        })
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
