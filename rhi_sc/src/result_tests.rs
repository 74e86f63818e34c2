/// Tests for CompilationResult and CompilationError

use super::*;

#[test]
fn test_default_result_is_success() {
    let result = CompilationResult::default();
    assert!(result.is_success());
    assert_eq!(result.warning_count, 0);
    assert!(result.messages.is_empty());
}

#[test]
fn test_success_keeps_warnings() {
    let result = CompilationResult::success(2, "shader.hlsl:3: warning: unused");
    assert!(result.is_success());
    assert_eq!(result.warning_count, 2);
    assert!(result.messages.contains("warning"));
}

#[test]
fn test_failure_is_not_success() {
    for error in [
        CompilationError::NonExistentFile,
        CompilationError::Error,
        CompilationError::APINotAvailable,
        CompilationError::InvalidStage,
    ] {
        let result = CompilationResult::failure(error, "x");
        assert!(!result.is_success());
        assert_eq!(result.error, error);
        assert_eq!(result.warning_count, 0);
    }
}

#[test]
fn test_error_display() {
    assert_eq!(CompilationError::None.to_string(), "success");
    assert_eq!(CompilationError::InvalidStage.to_string(), "invalid shader stage");
    assert_eq!(CompilationError::APINotAvailable.to_string(), "API not available");
}
