//! Integration tests for Error types
//!
//! Tests error construction, display, context, and recoverability.

use apidelta_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn syntax_error_display() {
    let err = Error::syntax("expected `{`", 4, 12, "public struct S".to_string());
    assert!(matches!(err.kind, ErrorKind::Syntax { line: 4, column: 12, .. }));
    assert_eq!(err.to_string(), "syntax error at 4:12: expected `{`");
}

#[test]
fn unbalanced_scope_display() {
    let err = Error::unbalanced_scope("2 scopes left open");
    assert!(err.to_string().contains("2 scopes left open"));
}

#[test]
fn io_error_names_the_path() {
    let err = Error::io("old.swiftinterface", "No such file or directory");
    let msg = err.to_string();
    assert!(msg.contains("old.swiftinterface"));
    assert!(msg.contains("No such file"));
}

#[test]
fn internal_error_display() {
    assert_eq!(Error::internal("boom").to_string(), "internal error: boom");
}

// =============================================================================
// Recoverability
// =============================================================================

#[test]
fn only_syntax_errors_are_recoverable() {
    assert!(Error::syntax("x", 1, 1, String::new()).is_recoverable());
    assert!(!Error::unbalanced_scope("x").is_recoverable());
    assert!(!Error::io("p", "m").is_recoverable());
    assert!(!Error::internal("x").is_recoverable());
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_is_attached() {
    let err = Error::unbalanced_scope("open type")
        .with_context(ErrorContext::new().with_source("Lib").with_position(7, 3));
    let context = err.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("Lib"));
    assert_eq!(context.line, Some(7));
    assert_eq!(context.column, Some(3));
}

#[test]
fn display_includes_context() {
    let err = Error::unbalanced_scope("1 scopes still open at end of input")
        .with_context(ErrorContext::new().with_source("Lib").with_position(7, 3));
    assert_eq!(
        err.to_string(),
        "unbalanced declaration scope: 1 scopes still open at end of input (at Lib:7:3)"
    );

    let err = Error::internal("boom").with_context(ErrorContext::new().with_source("Lib"));
    assert_eq!(err.to_string(), "internal error: boom (at Lib)");
}

#[test]
fn empty_context_is_not_displayed() {
    let err = Error::internal("boom").with_context(ErrorContext::new());
    assert_eq!(err.to_string(), "internal error: boom");
}
