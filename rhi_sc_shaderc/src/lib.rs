/*!
# RHI Shader Compiler - shaderc Backend

shaderc implementation of the `rhi_sc::Backend` trait.

Compile options are translated into a native `shaderc::CompileOptions`
object and the pipeline stage into a typed shader kind. Output is always
SPIR-V.

```no_run
use rhi_sc::{Compiler, CompileOptions, GraphicsApi, OutputRepresentation, ShaderSource, ShaderStage};
use rhi_sc_shaderc::{ShadercBackend, ShadercConfig};

let mut compiler = Compiler::new(ShadercBackend::new(ShadercConfig::default())?);
let source = ShaderSource::from_memory(
    "float4 main(): SV_Position { return float4(0,0,0,1); }",
    "inline.hlsl",
    ShaderStage::Vertex,
);
let (result, spirv) = compiler.compile_to_buffer(
    GraphicsApi::Vulkan,
    &source,
    &CompileOptions::new(),
    OutputRepresentation::Memory,
);
# Ok::<(), rhi_sc::Error>(())
```
*/

mod shaderc_backend;
mod shaderc_config;
pub mod shaderc_options;

pub use shaderc_backend::ShadercBackend;
pub use shaderc_config::{ShadercConfig, SourceLanguage, VulkanVersion};
