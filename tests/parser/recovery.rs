//! Integration tests for recovery from malformed declarations

use apidelta_parser::{Parser, parse};
use apidelta_runtime::logging::capture::capture;
use tracing::Level;

#[test]
fn skipped_declaration_logs_a_warning() {
    let source = "public struct S {\n  public func broken(\n  public var ok: Int\n}\npublic var after: Int";
    let (root, captured) = capture(|| parse(source, "Lib").unwrap());

    assert_eq!(root.members.len(), 2);
    assert_eq!(root.members[0].members().len(), 1);
    assert_eq!(root.members[0].members()[0].name(), "ok");

    let warnings: Vec<_> = captured.at_level(Level::WARN).collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].fields.get("module").map(String::as_str), Some("Lib"));
    assert!(warnings[0].fields.contains_key("line"));
    assert!(warnings[0].fields.contains_key("column"));
    assert_eq!(
        warnings[0].message.as_deref(),
        Some("skipping malformed declaration")
    );
}

#[test]
fn every_malformed_declaration_is_counted() {
    let mut parser = Parser::new("var : Int\nfunc (x: Int)\nvar ok: Int\ncase\n");
    let root = parser.parse_module("Lib").unwrap();
    assert_eq!(root.members.len(), 1);
    assert_eq!(parser.skipped(), 3);
}

#[test]
fn garbage_never_fails_the_module() {
    let source = "}}} {{ @@ -> ( ] public var x: Int";
    assert!(parse(source, "Lib").is_ok());
}

#[test]
fn stray_closing_brace_logs_a_warning() {
    let (root, captured) = capture(|| parse("}\npublic var x: Int", "Lib").unwrap());

    assert_eq!(root.members.len(), 1);
    let warnings: Vec<_> = captured.at_level(Level::WARN).collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message.as_deref(), Some("ignoring unmatched '}'"));
    assert_eq!(warnings[0].fields.get("line").map(String::as_str), Some("1"));
}
