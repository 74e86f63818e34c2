//! shaderc backend configuration

/// Language of the shader text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceLanguage {
    #[default]
    Hlsl,
    Glsl,
}

/// Vulkan environment the SPIR-V targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VulkanVersion {
    #[default]
    V1_0,
    V1_1,
    V1_2,
    V1_3,
}

impl VulkanVersion {
    pub const ALL: [VulkanVersion; 4] = [
        VulkanVersion::V1_0,
        VulkanVersion::V1_1,
        VulkanVersion::V1_2,
        VulkanVersion::V1_3,
    ];
}

/// shaderc backend configuration
#[derive(Debug, Clone, Default)]
pub struct ShadercConfig {
    /// Source language (HLSL by default)
    pub source_language: SourceLanguage,
    /// Target Vulkan version (1.0 by default)
    pub vulkan_version: VulkanVersion,
}
