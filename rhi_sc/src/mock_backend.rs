/// Mock backend for unit tests (no native compiler required)
///
/// Records every request it receives so tests can check what the facade
/// handed over, and answers with a canned success or failure.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::backend::{Backend, BackendKind, BackendOutput, BackendRequest};
use crate::stage::{GraphicsApi, ShaderStage};

// ============================================================================
// Recorded call
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub source: String,
    pub file_name: String,
    pub stage: ShaderStage,
    pub macros: Vec<String>,
    pub entry_point: String,
    pub target_api: Option<GraphicsApi>,
    pub include_dir: Option<PathBuf>,
}

// ============================================================================
// Mock backend
// ============================================================================

pub struct MockBackend {
    response: BackendOutput,
    unsupported: Vec<ShaderStage>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockBackend {
    /// Backend that always succeeds with `bytecode`
    pub fn new(bytecode: Vec<u8>) -> Self {
        Self {
            response: BackendOutput::success(bytecode, String::new(), 0),
            unsupported: vec![ShaderStage::None],
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Backend that always fails with `diagnostics`
    pub fn failing(diagnostics: &str) -> Self {
        Self {
            response: BackendOutput::failure(diagnostics.to_string()),
            ..Self::new(Vec::new())
        }
    }

    /// Succeed but report warnings
    pub fn with_warnings(mut self, diagnostics: &str, warning_count: u32) -> Self {
        self.response.diagnostics = diagnostics.to_string();
        self.response.warning_count = warning_count;
        self
    }

    /// Reject `stage` in `supports_stage`
    pub fn without_stage(mut self, stage: ShaderStage) -> Self {
        self.unsupported.push(stage);
        self
    }

    /// Shared handle on the recorded calls, usable after the backend is moved
    pub fn calls(&self) -> Arc<Mutex<Vec<RecordedCall>>> {
        self.calls.clone()
    }
}

impl Backend for MockBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Shaderc
    }

    fn supports_stage(&self, stage: ShaderStage) -> bool {
        !self.unsupported.contains(&stage)
    }

    fn compile(&mut self, request: &BackendRequest<'_>) -> BackendOutput {
        self.calls.lock().unwrap().push(RecordedCall {
            source: request.source.to_string(),
            file_name: request.file_name.to_string(),
            stage: request.stage,
            macros: request
                .options
                .macro_definitions()
                .iter()
                .map(|m| m.to_string())
                .collect(),
            entry_point: request.options.entry_point().to_string(),
            target_api: request.target_api,
            include_dir: request.include_dir.map(|dir| dir.to_path_buf()),
        });
        self.response.clone()
    }
}
