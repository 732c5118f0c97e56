//! Integration tests for declaration metrics

use apidelta_engine::Metrics;
use apidelta_model::ElementKind;
use apidelta_parser::parse_interface;

use crate::diff;

#[test]
fn counts_nested_declarations_without_root() {
    let interface = parse_interface(
        "public struct S {\n  public var a: Int, b: Int\n  public func f()\n  public enum E {\n    case x, y\n  }\n}",
        "Lib",
    )
    .unwrap();
    let metrics = Metrics::collect(&interface);
    assert_eq!(metrics.count(ElementKind::Root), 0);
    assert_eq!(metrics.count(ElementKind::Struct), 1);
    assert_eq!(metrics.count(ElementKind::Property), 2);
    assert_eq!(metrics.count(ElementKind::EnumCase), 2);
    assert_eq!(metrics.total(), 7);
}

#[test]
fn deltas_list_only_changed_kinds() {
    let report = diff(
        "public func f()\npublic var x: Int",
        "public func f()\npublic func g()\npublic var x: Int",
    );
    let deltas = report.metrics.deltas();
    assert_eq!(deltas.len(), 1);
    assert_eq!(deltas[0].kind, ElementKind::Function);
    assert_eq!((deltas[0].old, deltas[0].new), (1, 2));
    assert_eq!(deltas[0].delta(), 1);
}

#[test]
fn merged_extensions_are_not_counted_as_extensions() {
    let report = diff(
        "public struct S {\n}\nextension S {\n  public func f()\n}",
        "public struct S {\n}\nextension S {\n  public func f()\n}",
    );
    assert_eq!(report.metrics.new.count(ElementKind::Extension), 0);
    assert_eq!(report.metrics.new.count(ElementKind::Function), 1);
}
