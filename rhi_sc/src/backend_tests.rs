/// Tests for backend helpers

use super::*;

#[test]
fn test_backend_kind_names() {
    assert_eq!(BackendKind::Dxc.name(), "dxc");
    assert_eq!(BackendKind::Shaderc.to_string(), "shaderc");
}

#[test]
fn test_failure_output_has_no_bytecode() {
    let out = BackendOutput::failure("error: boom".to_string());
    assert_eq!(out.status, BackendStatus::Failure);
    assert!(out.bytecode.is_empty());
    assert_eq!(out.warning_count, 0);
}

#[test]
fn test_count_warnings() {
    let text = "\
shader.hlsl:3:5: warning: implicit truncation of vector type
shader.hlsl:9:1: warning: unused variable
shader.hlsl:12:2: error: undeclared identifier 'x'
";
    assert_eq!(count_warnings(text), 2);
    assert_eq!(count_warnings(""), 0);
}

#[test]
fn test_warning_count_saturates() {
    assert_eq!(saturating_count(7), 7);
    assert_eq!(saturating_count(u32::MAX as usize), u32::MAX);
    assert_eq!(saturating_count(usize::MAX), u32::MAX);
}
