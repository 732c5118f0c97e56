//! Integration tests for parsing whole interface files

use apidelta_model::ElementKind;
use apidelta_parser::{parse, parse_interface};

use crate::SAMPLE;

#[test]
fn top_level_declarations() {
    let root = parse(SAMPLE, "Geometry").unwrap();
    let kinds: Vec<_> = root.members.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ElementKind::Struct,
            ElementKind::Enum,
            ElementKind::Protocol,
            ElementKind::Extension,
            ElementKind::Extension,
            ElementKind::Extension,
            ElementKind::Extension,
        ]
    );
}

#[test]
fn struct_members_and_signatures() {
    let root = parse(SAMPLE, "Geometry").unwrap();
    let point = &root.members[0];
    assert_eq!(
        point.description(),
        "@frozen\npublic struct Point: Swift.Equatable"
    );
    let signatures: Vec<_> = point
        .members()
        .iter()
        .map(|m| m.diffable_signature())
        .collect();
    assert_eq!(signatures, vec!["x", "y", "init(x:y:)", "==(a:b:)"]);
}

#[test]
fn enum_cases_and_computed_property() {
    let root = parse(SAMPLE, "Geometry").unwrap();
    let shape = &root.members[1];
    let descriptions: Vec<_> = shape.members().iter().map(|m| m.description()).collect();
    assert_eq!(
        descriptions,
        vec![
            "case circle(center: Geometry.Point, radius: Swift.Double)",
            "case polygon([Geometry.Point])",
            "public var area: Swift.Double { get }",
        ]
    );
}

#[test]
fn parsing_is_deterministic() {
    let first = parse_interface(SAMPLE, "Geometry").unwrap();
    let second = parse_interface(SAMPLE, "Geometry").unwrap();
    assert_eq!(first.root(), second.root());
}
