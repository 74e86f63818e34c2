//! DXC backend configuration

use std::path::PathBuf;

/// HLSL shader model used to build target profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderModel {
    pub major: u32,
    pub minor: u32,
}

impl ShaderModel {
    /// Shader model 6.0, the lowest DXC targets
    pub const SM_6_0: ShaderModel = ShaderModel { major: 6, minor: 0 };

    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Profile suffix, e.g. `6_0`
    pub fn profile_suffix(&self) -> String {
        format!("{}_{}", self.major, self.minor)
    }
}

impl Default for ShaderModel {
    fn default() -> Self {
        Self::SM_6_0
    }
}

/// Bytecode DXC produces when no target API forces SPIR-V
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DxcOutput {
    #[default]
    Dxil,
    Spirv,
}

/// DXC backend configuration
#[derive(Debug, Clone, Default)]
pub struct DxcConfig {
    /// Explicit `dxcompiler` library; `None` uses the system search path
    pub library_path: Option<PathBuf>,
    pub shader_model: ShaderModel,
    pub output: DxcOutput,
}
