/// Pipeline stages and target graphics APIs

use std::fmt;

/// Pipeline stage a shader is written for
///
/// `None` is never compiled: every backend rejects it with
/// `CompilationError::InvalidStage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShaderStage {
    /// No stage selected
    #[default]
    None,
    /// Vertex shader
    Vertex,
    /// Pixel/Fragment shader
    Pixel,
    /// Geometry shader
    Geometry,
    /// Domain shader (tessellation evaluation)
    Domain,
    /// Hull shader (tessellation control)
    Hull,
    /// Compute shader
    Compute,
}

impl ShaderStage {
    /// Every stage that maps to a real pipeline stage
    pub const ALL: [ShaderStage; 6] = [
        ShaderStage::Vertex,
        ShaderStage::Pixel,
        ShaderStage::Geometry,
        ShaderStage::Domain,
        ShaderStage::Hull,
        ShaderStage::Compute,
    ];

    /// Lowercase stage name, as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::None => "none",
            ShaderStage::Vertex => "vertex",
            ShaderStage::Pixel => "pixel",
            ShaderStage::Geometry => "geometry",
            ShaderStage::Domain => "domain",
            ShaderStage::Hull => "hull",
            ShaderStage::Compute => "compute",
        }
    }

    /// Parse a stage name, ignoring case
    ///
    /// Unknown names yield `ShaderStage::None` so that the compiler, not the
    /// caller, reports the invalid stage.
    pub fn from_name(name: &str) -> ShaderStage {
        let lower = name.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|stage| stage.name() == lower)
            .unwrap_or(ShaderStage::None)
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Graphics API that consumes the compiled bytecode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphicsApi {
    /// Vulkan (SPIR-V)
    Vulkan,
    /// Direct3D 12 (DXIL)
    Direct3D12,
}

impl fmt::Display for GraphicsApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsApi::Vulkan => f.write_str("Vulkan"),
            GraphicsApi::Direct3D12 => f.write_str("Direct3D 12"),
        }
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
