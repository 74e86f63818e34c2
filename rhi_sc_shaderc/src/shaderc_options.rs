//! Translation from backend-neutral options to shaderc's native options
//!
//! Everything here is pure: a fresh native options object is built for every
//! compile, so nothing set for one compile can leak into the next.

use std::path::{Path, PathBuf};

use rhi_sc::{CompileOptions, OptimizationLevel, ShaderStage};
use shaderc::{IncludeType, ResolvedInclude};

use crate::shaderc_config::{ShadercConfig, SourceLanguage, VulkanVersion};

/// shaderc shader kind for a stage, `None` when the stage has no mapping
pub fn shader_kind(stage: ShaderStage) -> Option<shaderc::ShaderKind> {
    match stage {
        ShaderStage::Vertex => Some(shaderc::ShaderKind::Vertex),
        ShaderStage::Pixel => Some(shaderc::ShaderKind::Fragment),
        ShaderStage::Geometry => Some(shaderc::ShaderKind::Geometry),
        ShaderStage::Hull => Some(shaderc::ShaderKind::TessControl),
        ShaderStage::Domain => Some(shaderc::ShaderKind::TessEvaluation),
        ShaderStage::Compute => Some(shaderc::ShaderKind::Compute),
        ShaderStage::None => None,
    }
}

/// shaderc optimization level
///
/// shaderc only knows three levels, so levels 1 and 2 both optimize for size.
pub fn optimization_level(level: OptimizationLevel) -> shaderc::OptimizationLevel {
    match level {
        OptimizationLevel::None => shaderc::OptimizationLevel::Zero,
        OptimizationLevel::Level1 | OptimizationLevel::Level2 => shaderc::OptimizationLevel::Size,
        OptimizationLevel::Level3 => shaderc::OptimizationLevel::Performance,
    }
}

/// Relative optimization effort of a shaderc level
pub fn optimization_effort(level: shaderc::OptimizationLevel) -> u32 {
    match level {
        shaderc::OptimizationLevel::Zero => 0,
        shaderc::OptimizationLevel::Size => 1,
        shaderc::OptimizationLevel::Performance => 2,
    }
}

fn source_language(language: SourceLanguage) -> shaderc::SourceLanguage {
    match language {
        SourceLanguage::Hlsl => shaderc::SourceLanguage::HLSL,
        SourceLanguage::Glsl => shaderc::SourceLanguage::GLSL,
    }
}

fn env_version(version: VulkanVersion) -> u32 {
    match version {
        VulkanVersion::V1_0 => shaderc::EnvVersion::Vulkan1_0 as u32,
        VulkanVersion::V1_1 => shaderc::EnvVersion::Vulkan1_1 as u32,
        VulkanVersion::V1_2 => shaderc::EnvVersion::Vulkan1_2 as u32,
        VulkanVersion::V1_3 => shaderc::EnvVersion::Vulkan1_3 as u32,
    }
}

/// Resolve an `#include` request to a file on disk
///
/// Relative includes are looked up next to the including file first, then in
/// `include_dir`. Standard (`<...>`) includes only use `include_dir`.
pub fn resolve_include(
    requested: &str,
    include_type: IncludeType,
    requesting: &str,
    include_dir: Option<&Path>,
) -> Result<ResolvedInclude, String> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let IncludeType::Relative = include_type {
        if let Some(parent) = Path::new(requesting).parent() {
            candidates.push(parent.join(requested));
        }
    }
    if let Some(dir) = include_dir {
        candidates.push(dir.join(requested));
    }

    for candidate in candidates {
        if candidate.is_file() {
            let content = std::fs::read_to_string(&candidate)
                .map_err(|e| format!("Cannot read include '{}': {}", candidate.display(), e))?;
            return Ok(ResolvedInclude {
                resolved_name: candidate.to_string_lossy().into_owned(),
                content,
            });
        }
    }

    Err(format!("Cannot find include '{}' requested by '{}'", requested, requesting))
}

/// Build the native options object for one compile
///
/// Returns `None` if shaderc cannot allocate an options object.
pub fn native_options(
    options: &CompileOptions,
    config: &ShadercConfig,
    include_dir: Option<&Path>,
) -> Option<shaderc::CompileOptions<'static>> {
    let mut native = shaderc::CompileOptions::new()?;

    native.set_source_language(source_language(config.source_language));
    native.set_target_env(shaderc::TargetEnv::Vulkan, env_version(config.vulkan_version));

    for definition in options.macro_definitions() {
        native.add_macro_definition(&definition.name, definition.value.as_deref());
    }

    native.set_optimization_level(optimization_level(options.optimization_level()));

    if options.debugging_symbols() {
        native.set_generate_debug_info();
    }

    let include_dir = include_dir.map(Path::to_path_buf);
    native.set_include_callback(move |requested, include_type, requesting, _depth| {
        resolve_include(requested, include_type, requesting, include_dir.as_deref())
    });

    Some(native)
}

#[cfg(test)]
#[path = "shaderc_options_tests.rs"]
mod tests;
