//! Integration tests for extension merging

use apidelta_model::ElementKind;
use apidelta_parser::{parse_interface, parse_interface_with};

use crate::SAMPLE;

#[test]
fn unconstrained_extensions_are_folded_in() {
    let interface = parse_interface(SAMPLE, "Geometry").unwrap();
    let kinds: Vec<_> = interface.members().iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ElementKind::Struct,
            ElementKind::Enum,
            ElementKind::Protocol,
            ElementKind::Extension,
        ]
    );

    let point = interface.members()[0].as_type().unwrap();
    assert_eq!(point.members.len(), 5);
    assert_eq!(point.members[4].name(), "distance");
}

#[test]
fn conformances_are_appended() {
    let interface = parse_interface(SAMPLE, "Geometry").unwrap();
    let shape = interface.members()[1].as_type().unwrap();
    assert_eq!(shape.inheritance, Some(vec!["Swift.Hashable".to_string()]));
    let names: Vec<_> = shape.members.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["circle", "polygon", "area", "hash", "render"]);
}

#[test]
fn foreign_constrained_extension_stays() {
    let interface = parse_interface(SAMPLE, "Geometry").unwrap();
    let ext = interface.members()[3].as_extension().unwrap();
    assert_eq!(ext.extended_type_name, "Swift.Array");
    assert!(ext.is_constrained());
}

#[test]
fn constrained_extension_of_own_type_stays() {
    let source = "public struct Box {\n}\nextension Box where T: Equatable {\n  public func same() -> Bool\n}";
    let interface = parse_interface(source, "Lib").unwrap();
    assert_eq!(interface.members().len(), 2);
    assert!(interface.members()[0].members().is_empty());
}

#[test]
fn nested_type_target() {
    let source = "public enum Outer {\n  public struct Inner {\n  }\n}\nextension Lib.Outer.Inner {\n  public var value: Int { get }\n}";
    let interface = parse_interface(source, "Lib").unwrap();
    assert_eq!(interface.members().len(), 1);
    let index = interface.index();
    let (id, _) = index
        .descendants()
        .find(|(_, node)| node.element.name() == "value")
        .unwrap();
    assert_eq!(index.path(id), "Outer.Inner");
}

#[test]
fn prefix_needs_a_dot_boundary() {
    let source = "public struct Point {\n}\nextension Lib.PointSet {\n  public func f()\n}";
    let interface = parse_interface(source, "Lib").unwrap();
    assert_eq!(interface.members().len(), 2);
}

#[test]
fn merging_off_keeps_everything() {
    let interface = parse_interface_with(SAMPLE, "Geometry", false).unwrap();
    assert_eq!(interface.members().len(), 7);
}
