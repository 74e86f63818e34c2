/*!
# RHI Shader Compiler - DXC Backend

DirectX Shader Compiler implementation of the `rhi_sc::Backend` trait.

Compile options are translated into a flat argument list (`-T`, `-E`,
`-Zi -Qembed_debug`, `-Od..-O3`, `-D`, `-spirv`). The backend emits
SPIR-V whenever the caller targets Vulkan or the backend is configured
for it, and DXIL otherwise.

The `dxcompiler` dynamic library must be available at runtime, either on
the system search path or at `DxcConfig::library_path`.

```no_run
use rhi_sc::{Compiler, CompileOptions, ShaderSource, ShaderStage};
use rhi_sc_dxc::{DxcBackend, DxcConfig};

let mut compiler = Compiler::new(DxcBackend::new(DxcConfig::default())?);
let source = ShaderSource::from_file("shaders/triangle.vs.hlsl", ShaderStage::Vertex);
let result = compiler.compile_to_file(&source, &CompileOptions::new(), "triangle.vs.bin".as_ref());
# Ok::<(), rhi_sc::Error>(())
```
*/

mod dxc_backend;
mod dxc_config;
mod dxc_include;
pub mod dxc_arguments;

pub use dxc_backend::DxcBackend;
pub use dxc_config::{DxcConfig, DxcOutput, ShaderModel};
