//! Integration tests for the shaderc backend
//!
//! These compile real HLSL through shaderc and inspect the SPIR-V with spirq.
//!
//! Run with: cargo test -p rhi_sc_shaderc --test shaderc_backend_tests

use rhi_sc::container::{decode_container, CONTAINER_OVERHEAD};
use rhi_sc::{
    BackendKind, CompilationError, CompileOptions, Compiler, GraphicsApi, OptimizationLevel,
    OutputRepresentation, ShaderSource, ShaderStage,
};
use rhi_sc::log::{Log, LogEntry, LogSeverity, Logger};
use rhi_sc_shaderc::{ShadercBackend, ShadercConfig};
use serial_test::serial;
use std::fs;
use std::sync::{Arc, Mutex};

const VERTEX_SHADER: &str = "float4 main(): SV_Position { return float4(0,0,0,1); }";
const PIXEL_SHADER: &str = "float4 main(): SV_Target { return float4(1,0,0,1); }";
const COMPUTE_SHADER: &str = "[numthreads(1,1,1)] void main() {}";
const SPIRV_MAGIC: u32 = 0x0723_0203;

fn compiler() -> Compiler {
    Compiler::new(ShadercBackend::new(ShadercConfig::default()).unwrap())
}

fn compile_memory(compiler: &mut Compiler, shader: &str, stage: ShaderStage, options: &CompileOptions) -> (rhi_sc::CompilationResult, Vec<u8>) {
    let source = ShaderSource::from_memory(shader, "inline.hlsl", stage);
    compiler.compile_to_buffer(GraphicsApi::Vulkan, &source, options, OutputRepresentation::Memory)
}

fn words(bytes: &[u8]) -> Vec<u32> {
    assert_eq!(bytes.len() % 4, 0, "SPIR-V must be a whole number of words");
    bytes
        .chunks_exact(4)
        .map(|w| u32::from_le_bytes([w[0], w[1], w[2], w[3]]))
        .collect()
}

/// Reflect the entry points and return (name, execution model) pairs
fn entry_points(bytes: &[u8]) -> Vec<(String, String)> {
    let spv = words(bytes);
    spirq::ReflectConfig::new()
        .spv(spv.as_slice())
        .ref_all_rscs(true)
        .reflect()
        .unwrap()
        .into_iter()
        .map(|ep| (ep.name.clone(), format!("{:?}", ep.exec_model)))
        .collect()
}

/// Captures every entry so severities can be checked
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// BACKEND
// ============================================================================

#[test]
fn test_backend_reports_kind() {
    assert_eq!(compiler().backend_kind(), BackendKind::Shaderc);
}

// ============================================================================
// STAGES
// ============================================================================

#[test]
fn test_vertex_shader_compiles_to_spirv() {
    let mut compiler = compiler();
    let (result, spirv) = compile_memory(&mut compiler, VERTEX_SHADER, ShaderStage::Vertex, &CompileOptions::new());

    assert!(result.is_success(), "{}", result.messages);
    assert_eq!(words(&spirv)[0], SPIRV_MAGIC);
    assert_eq!(entry_points(&spirv), vec![("main".to_string(), "Vertex".to_string())]);
}

#[test]
fn test_vertex_container_adds_fixed_overhead() {
    let mut compiler = compiler();
    let source = ShaderSource::from_memory(VERTEX_SHADER, "inline.hlsl", ShaderStage::Vertex);
    let options = CompileOptions::new();

    let (raw_result, raw) = compiler.compile_to_buffer(
        GraphicsApi::Vulkan, &source, &options, OutputRepresentation::Memory);
    let (framed_result, framed) = compiler.compile_to_buffer(
        GraphicsApi::Vulkan, &source, &options, OutputRepresentation::Container);

    assert!(raw_result.is_success());
    assert!(framed_result.is_success());
    assert_eq!(framed.len(), raw.len() + CONTAINER_OVERHEAD);
    assert_eq!(decode_container(&framed).unwrap(), raw.as_slice());
}

#[test]
fn test_pixel_shader_compiles_to_fragment() {
    let mut compiler = compiler();
    let (result, spirv) = compile_memory(&mut compiler, PIXEL_SHADER, ShaderStage::Pixel, &CompileOptions::new());

    assert!(result.is_success(), "{}", result.messages);
    assert_eq!(entry_points(&spirv), vec![("main".to_string(), "Fragment".to_string())]);
}

#[test]
fn test_compute_shader_compiles() {
    let mut compiler = compiler();
    let (result, spirv) = compile_memory(&mut compiler, COMPUTE_SHADER, ShaderStage::Compute, &CompileOptions::new());

    assert!(result.is_success(), "{}", result.messages);
    assert_eq!(entry_points(&spirv), vec![("main".to_string(), "GLCompute".to_string())]);
}

#[test]
fn test_none_stage_is_invalid() {
    let mut compiler = compiler();
    let (result, bytes) = compile_memory(&mut compiler, VERTEX_SHADER, ShaderStage::None, &CompileOptions::new());

    assert_eq!(result.error, CompilationError::InvalidStage);
    assert!(bytes.is_empty());
}

// ============================================================================
// OPTIONS
// ============================================================================

#[test]
fn test_custom_entry_point() {
    let mut compiler = compiler();
    let mut options = CompileOptions::new();
    options.set_entry_point("VSMain");
    let shader = "float4 VSMain(): SV_Position { return float4(0,0,0,1); }";

    let (result, spirv) = compile_memory(&mut compiler, shader, ShaderStage::Vertex, &options);

    assert!(result.is_success(), "{}", result.messages);
    assert_eq!(entry_points(&spirv)[0].0, "VSMain");
}

#[test]
fn test_macro_definitions_reach_the_preprocessor() {
    let shader = "\
#if !defined(FOO) || BAR != 1
#error macros missing
#endif
float4 main(): SV_Position { return float4(0,0,0,1); }
";
    let mut compiler = compiler();

    let (without, _) = compile_memory(&mut compiler, shader, ShaderStage::Vertex, &CompileOptions::new());
    assert_eq!(without.error, CompilationError::Error);

    let mut options = CompileOptions::new();
    options
        .add_macro_definition("FOO", None)
        .add_macro_definition("BAR", Some("1"));
    let (with, spirv) = compile_memory(&mut compiler, shader, ShaderStage::Vertex, &options);
    assert!(with.is_success(), "{}", with.messages);
    assert!(!spirv.is_empty());
}

#[test]
fn test_every_optimization_level_compiles() {
    let mut compiler = compiler();
    for level in OptimizationLevel::ALL {
        let mut options = CompileOptions::new();
        options.set_optimization_level(level);
        let (result, spirv) = compile_memory(&mut compiler, VERTEX_SHADER, ShaderStage::Vertex, &options);
        assert!(result.is_success(), "{:?}: {}", level, result.messages);
        assert_eq!(words(&spirv)[0], SPIRV_MAGIC);
    }
}

#[test]
fn test_debugging_symbols_compile() {
    let mut compiler = compiler();
    let mut options = CompileOptions::new();
    options.enable_debugging_symbols();

    let (result, spirv) = compile_memory(&mut compiler, VERTEX_SHADER, ShaderStage::Vertex, &options);
    assert!(result.is_success(), "{}", result.messages);
    assert!(!spirv.is_empty());
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_syntax_error_reports_diagnostics() {
    let mut compiler = compiler();
    let (result, bytes) = compile_memory(
        &mut compiler,
        "float4 main(): SV_Position { return float4(0,0,0,1) }",
        ShaderStage::Vertex,
        &CompileOptions::new(),
    );

    assert_eq!(result.error, CompilationError::Error);
    assert!(!result.messages.is_empty());
    assert!(bytes.is_empty());
}

#[test]
#[serial]
fn test_syntax_error_is_not_logged_as_warning() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Log::set_logger(CaptureLogger { entries: entries.clone() });

    let mut compiler = compiler();
    let (result, _) = compile_memory(&mut compiler, "not hlsl", ShaderStage::Vertex, &CompileOptions::new());

    Log::reset_logger();

    assert_eq!(result.error, CompilationError::Error);
    let entries = entries.lock().unwrap();
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|e| e.severity < LogSeverity::Warn));
}

#[test]
fn test_failure_does_not_poison_next_compile() {
    let mut compiler = compiler();
    let (bad, _) = compile_memory(&mut compiler, "not hlsl", ShaderStage::Vertex, &CompileOptions::new());
    let (good, spirv) = compile_memory(&mut compiler, VERTEX_SHADER, ShaderStage::Vertex, &CompileOptions::new());

    assert_eq!(bad.error, CompilationError::Error);
    assert!(good.is_success(), "{}", good.messages);
    assert!(!spirv.is_empty());
}

#[test]
fn test_missing_file_is_reported() {
    let mut compiler = compiler();
    let source = ShaderSource::from_file("does/not/exist.hlsl", ShaderStage::Vertex);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.spv");

    let result = compiler.compile_to_file(&source, &CompileOptions::new(), &output);

    assert_eq!(result.error, CompilationError::NonExistentFile);
    assert!(!output.exists());
}

// ============================================================================
// FILES AND INCLUDES
// ============================================================================

#[test]
fn test_include_next_to_source_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("common.hlsli"), "#define CLIP_W 1.0\n").unwrap();
    fs::write(
        dir.path().join("shader.hlsl"),
        "#include \"common.hlsli\"\nfloat4 main(): SV_Position { return float4(0,0,0,CLIP_W); }\n",
    )
    .unwrap();

    let mut compiler = compiler();
    let source = ShaderSource::from_file(dir.path().join("shader.hlsl"), ShaderStage::Vertex);
    let output = dir.path().join("shader.spv");
    let result = compiler.compile_to_file(&source, &CompileOptions::new(), &output);

    assert!(result.is_success(), "{}", result.messages);
    let bytes = fs::read(&output).unwrap();
    let spirv = decode_container(&bytes).unwrap();
    assert_eq!(words(spirv)[0], SPIRV_MAGIC);

}

#[test]
fn test_compile_is_deterministic() {
    let mut compiler = compiler();
    let (_, first) = compile_memory(&mut compiler, VERTEX_SHADER, ShaderStage::Vertex, &CompileOptions::new());
    let (_, second) = compile_memory(&mut compiler, VERTEX_SHADER, ShaderStage::Vertex, &CompileOptions::new());

    assert!(!first.is_empty());
    assert_eq!(first, second);
}
