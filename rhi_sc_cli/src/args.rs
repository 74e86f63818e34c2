//! Command line arguments

use std::path::PathBuf;

use clap::Parser;
use rhi_sc::{BackendKind, CompileOptions, MacroDefinition, OptimizationLevel, ShaderStage};

#[derive(Parser, Debug)]
#[command(name = "rhi_sc")]
#[command(about = "Compile HLSL shaders to SPIR-V or DXIL containers")]
#[command(version)]
pub struct Cli {
    /// Shader source files
    #[arg(short, long, value_name = "FILES", num_args = 1.., required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output files, one per input
    #[arg(short, long, value_name = "FILES", num_args = 1.., required = true)]
    pub outputs: Vec<PathBuf>,

    /// Pipeline stage: pixel, vertex, compute, hull, domain or geometry
    #[arg(short = 't', long = "target", value_name = "STAGE", value_parser = parse_stage)]
    pub stage: ShaderStage,

    /// Embed debugging symbols
    #[arg(short = 'g', long)]
    pub embed_debug: bool,

    /// Preprocessor definition, repeatable
    #[arg(short = 'D', value_name = "NAME[=VALUE]", value_parser = parse_macro)]
    pub defines: Vec<MacroDefinition>,

    /// Optimization level: none, 1, 2, 3 or fast
    #[arg(short = 'O', value_name = "LEVEL", value_parser = parse_optimization, default_value = "none")]
    pub optimization: OptimizationLevel,

    /// Compiler backend
    #[arg(long, value_name = "dxc|shaderc", value_parser = parse_backend, default_value_t = default_backend())]
    pub backend: BackendKind,

    /// dxcompiler library to load instead of the system one
    #[arg(long, value_name = "PATH", env = "RHI_SC_DXC_PATH")]
    pub dxc_path: Option<PathBuf>,

    /// Make DXC emit SPIR-V instead of DXIL
    #[arg(long)]
    pub spirv: bool,

    /// Log compiler activity
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Options shared by every input
    pub fn compile_options(&self) -> CompileOptions {
        let mut options = CompileOptions::new();
        for definition in &self.defines {
            options.add_macro_definition(&definition.name, definition.value.as_deref());
        }
        options.set_optimization_level(self.optimization);
        if self.embed_debug {
            options.enable_debugging_symbols();
        }
        options
    }
}

/// Unknown names are kept as `ShaderStage::None` and rejected by the compiler
fn parse_stage(value: &str) -> Result<ShaderStage, String> {
    Ok(ShaderStage::from_name(value))
}

/// Names are not validated here; the backend rejects what it cannot use
fn parse_macro(value: &str) -> Result<MacroDefinition, String> {
    Ok(MacroDefinition::parse(value))
}

pub fn parse_optimization(value: &str) -> Result<OptimizationLevel, String> {
    match value.to_ascii_lowercase().as_str() {
        "none" | "0" | "d" => Ok(OptimizationLevel::None),
        "1" => Ok(OptimizationLevel::Level1),
        "2" => Ok(OptimizationLevel::Level2),
        "3" | "fast" => Ok(OptimizationLevel::Level3),
        _ => Err(format!("unknown optimization level '{}' (expected none, 1, 2, 3 or fast)", value)),
    }
}

pub fn parse_backend(value: &str) -> Result<BackendKind, String> {
    match value.to_ascii_lowercase().as_str() {
        "dxc" => Ok(BackendKind::Dxc),
        "shaderc" => Ok(BackendKind::Shaderc),
        _ => Err(format!("unknown backend '{}' (expected dxc or shaderc)", value)),
    }
}

/// shaderc when it was built in, DXC otherwise
pub fn default_backend() -> BackendKind {
    if cfg!(feature = "shaderc") {
        BackendKind::Shaderc
    } else {
        BackendKind::Dxc
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
