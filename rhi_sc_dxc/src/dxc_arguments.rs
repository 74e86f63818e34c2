//! Translation from backend-neutral options to a DXC argument list
//!
//! DXC is configured entirely through command-line style arguments. The
//! profile and entry point are passed to the compile call separately; every
//! other setting becomes a flag, in a fixed order.

use rhi_sc::{CompileOptions, GraphicsApi, OptimizationLevel, ShaderStage};

use crate::dxc_config::{DxcOutput, ShaderModel};

/// Target profile for a stage, e.g. `vs_6_0`
///
/// Returns `None` for stages DXC cannot compile.
pub fn profile_for_stage(stage: ShaderStage, shader_model: ShaderModel) -> Option<String> {
    let prefix = match stage {
        ShaderStage::Vertex => "vs",
        ShaderStage::Pixel => "ps",
        ShaderStage::Geometry => "gs",
        ShaderStage::Domain => "ds",
        ShaderStage::Hull => "hs",
        ShaderStage::Compute => "cs",
        ShaderStage::None => return None,
    };
    Some(format!("{}_{}", prefix, shader_model.profile_suffix()))
}

/// DXC optimization flag
pub fn optimization_flag(level: OptimizationLevel) -> &'static str {
    match level {
        OptimizationLevel::None => "-Od",
        OptimizationLevel::Level1 => "-O1",
        OptimizationLevel::Level2 => "-O2",
        OptimizationLevel::Level3 => "-O3",
    }
}

/// Rank of a DXC optimization flag, higher optimizes more
pub fn optimization_rank(flag: &str) -> Option<u32> {
    match flag {
        "-Od" => Some(0),
        "-O1" => Some(1),
        "-O2" => Some(2),
        "-O3" => Some(3),
        _ => None,
    }
}

/// Arguments for one DXC compile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DxcArguments {
    pub profile: String,
    pub entry_point: String,
    pub flags: Vec<String>,
}

impl DxcArguments {
    /// Translate caller options for `stage`
    ///
    /// `-spirv` is emitted when the bytecode is destined for Vulkan or the
    /// backend is configured for SPIR-V output.
    pub fn translate(
        stage: ShaderStage,
        options: &CompileOptions,
        shader_model: ShaderModel,
        output: DxcOutput,
        target_api: Option<GraphicsApi>,
    ) -> Option<Self> {
        let profile = profile_for_stage(stage, shader_model)?;
        let mut flags = Vec::new();

        if options.debugging_symbols() {
            flags.push("-Zi".to_string());
            flags.push("-Qembed_debug".to_string());
        }

        flags.push(optimization_flag(options.optimization_level()).to_string());

        for definition in options.macro_definitions() {
            flags.push("-D".to_string());
            flags.push(definition.to_string());
        }

        if output == DxcOutput::Spirv || target_api == Some(GraphicsApi::Vulkan) {
            flags.push("-spirv".to_string());
        }

        Some(Self {
            profile,
            entry_point: options.entry_point().to_string(),
            flags,
        })
    }

    /// Whether SPIR-V output was requested
    pub fn emits_spirv(&self) -> bool {
        self.flags.iter().any(|f| f == "-spirv")
    }

    /// Flags as borrowed strings, ready for the compile call
    pub fn flag_refs(&self) -> Vec<&str> {
        self.flags.iter().map(String::as_str).collect()
    }

    /// Full argument list as the `dxc` command line would read it
    pub fn command_line(&self) -> Vec<&str> {
        let mut args = vec!["-T", self.profile.as_str(), "-E", self.entry_point.as_str()];
        args.extend(self.flag_refs());
        args
    }
}

#[cfg(test)]
#[path = "dxc_arguments_tests.rs"]
mod tests;
