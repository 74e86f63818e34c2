//! shaderc backend
//!
//! Drives shaderc through its native options object: the backend-neutral
//! options are copied field by field into a fresh `shaderc::CompileOptions`
//! for every compile, and the stage selects a typed shader kind.

use rhi_sc::{
    Backend, BackendKind, BackendOutput, BackendRequest, Result, ShaderStage,
    sc_bail, sc_debug, sc_trace,
};

use crate::shaderc_config::ShadercConfig;
use crate::shaderc_options::{native_options, shader_kind};

const LOG_SOURCE: &str = "rhi_sc::shaderc";

/// Backend over a shaderc compiler instance
///
/// The compiler is created once and reused; it is released on drop.
pub struct ShadercBackend {
    compiler: shaderc::Compiler,
    config: ShadercConfig,
}

impl ShadercBackend {
    /// Create a backend with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::BackendUnavailable` if shaderc cannot create a compiler.
    pub fn new(config: ShadercConfig) -> Result<Self> {
        let Some(compiler) = shaderc::Compiler::new() else {
            sc_bail!(BackendUnavailable, LOG_SOURCE, "Failed to create shaderc compiler");
        };

        Ok(Self { compiler, config })
    }

    /// Active configuration
    pub fn config(&self) -> &ShadercConfig {
        &self.config
    }
}

impl Backend for ShadercBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Shaderc
    }

    fn supports_stage(&self, stage: ShaderStage) -> bool {
        shader_kind(stage).is_some()
    }

    fn compile(&mut self, request: &BackendRequest<'_>) -> BackendOutput {
        let Some(kind) = shader_kind(request.stage) else {
            return BackendOutput::failure(format!("Invalid shader stage '{}'", request.stage));
        };

        let Some(options) = native_options(request.options, &self.config, request.include_dir) else {
            sc_debug!(LOG_SOURCE, "shaderc could not allocate compile options");
            return BackendOutput::failure("Failed to create shaderc compile options".to_string());
        };

        sc_trace!(
            LOG_SOURCE,
            "compile_into_spirv '{}' as {:?}, entry '{}'",
            request.file_name,
            kind,
            request.options.entry_point()
        );

        let artifact = self.compiler.compile_into_spirv(
            request.source,
            kind,
            request.file_name,
            request.options.entry_point(),
            Some(&options),
        );

        match artifact {
            Ok(artifact) => BackendOutput::success(
                artifact.as_binary_u8().to_vec(),
                artifact.get_warning_messages(),
                artifact.get_num_warnings(),
            ),
            Err(shaderc::Error::CompilationError(_, messages)) => BackendOutput::failure(messages),
            Err(e) => BackendOutput::failure(e.to_string()),
        }
    }
}
