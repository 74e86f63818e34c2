//! DXC backend
//!
//! Loads the `dxcompiler` dynamic library once and keeps a compiler and a
//! utility library instance for every compile. Options reach DXC only as
//! an argument list built by `DxcArguments`.

use hassle_rs::{Dxc, DxcCompiler, DxcIncludeHandler, DxcLibrary, DxcOperationResult};
use rhi_sc::{
    count_warnings, Backend, BackendKind, BackendOutput, BackendRequest, Result, ShaderStage,
    sc_bail, sc_debug, sc_err, sc_trace,
};

use crate::dxc_arguments::{profile_for_stage, DxcArguments};
use crate::dxc_config::DxcConfig;
use crate::dxc_include::FileIncludeHandler;

const LOG_SOURCE: &str = "rhi_sc::dxc";

/// Backend over the DirectX Shader Compiler
pub struct DxcBackend {
    // Field order is drop order: instances go before the library that
    // created them is unloaded.
    compiler: DxcCompiler,
    library: DxcLibrary,
    _dxc: Dxc,
    config: DxcConfig,
}

impl DxcBackend {
    /// Load DXC and create its compiler and utility library
    ///
    /// # Errors
    ///
    /// Returns `Error::BackendUnavailable` if the library cannot be loaded,
    /// and `Error::BackendError` if it loads but an instance cannot be created.
    pub fn new(config: DxcConfig) -> Result<Self> {
        let dxc = match Dxc::new(config.library_path.clone()) {
            Ok(dxc) => dxc,
            Err(e) => sc_bail!(BackendUnavailable, LOG_SOURCE, "Failed to load dxcompiler: {}", e),
        };

        let compiler = dxc.create_compiler().map_err(|e| {
            sc_err!(BackendError, LOG_SOURCE, "Failed to create DXC compiler: {}", e)
        })?;

        let library = dxc.create_library().map_err(|e| {
            sc_err!(BackendError, LOG_SOURCE, "Failed to create DXC library: {}", e)
        })?;

        sc_debug!(
            LOG_SOURCE,
            "DXC loaded, shader model {}, {:?} output",
            config.shader_model.profile_suffix(),
            config.output
        );

        Ok(Self { compiler, library, _dxc: dxc, config })
    }

    /// Active configuration
    pub fn config(&self) -> &DxcConfig {
        &self.config
    }

    /// Text of the result's diagnostic buffer, empty if there is none
    fn diagnostics(&self, result: &DxcOperationResult) -> String {
        result
            .get_error_buffer()
            .and_then(|blob| self.library.get_blob_as_string(&blob.into()))
            .unwrap_or_default()
    }
}

impl Backend for DxcBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Dxc
    }

    fn supports_stage(&self, stage: ShaderStage) -> bool {
        profile_for_stage(stage, self.config.shader_model).is_some()
    }

    fn compile(&mut self, request: &BackendRequest<'_>) -> BackendOutput {
        let Some(arguments) = DxcArguments::translate(
            request.stage,
            request.options,
            self.config.shader_model,
            self.config.output,
            request.target_api,
        ) else {
            return BackendOutput::failure(format!("Invalid shader stage '{}'", request.stage));
        };

        let blob = match self.library.create_blob_with_encoding_from_str(request.source) {
            Ok(blob) => blob,
            Err(e) => {
                let message = format!("Failed to create source blob: {}", e);
                sc_debug!(LOG_SOURCE, "{}", message);
                return BackendOutput::failure(message);
            }
        };

        sc_trace!(
            LOG_SOURCE,
            "dxc {} {}",
            arguments.command_line().join(" "),
            request.file_name
        );

        let mut include_handler = FileIncludeHandler::new(request.include_dir);
        let compiled = self.compiler.compile(
            &blob,
            request.file_name,
            &arguments.entry_point,
            &arguments.profile,
            &arguments.flag_refs(),
            Some(&mut include_handler as &mut dyn DxcIncludeHandler),
            &[],
        );

        match compiled {
            Ok(result) => {
                let diagnostics = self.diagnostics(&result);
                match result.get_result() {
                    Ok(bytecode) => {
                        let warning_count = count_warnings(&diagnostics);
                        BackendOutput::success(bytecode.to_vec::<u8>(), diagnostics, warning_count)
                    }
                    Err(e) => {
                        let message = format!("Failed to read DXC output: {}", e);
                        sc_debug!(LOG_SOURCE, "{}", message);
                        BackendOutput::failure(message)
                    }
                }
            }
            Err((result, _)) => BackendOutput::failure(self.diagnostics(&result)),
        }
    }
}
