//! Integration tests for structural alignment

use apidelta_engine::{Side, align};
use apidelta_parser::parse_interface;

use crate::diff;

#[test]
fn changed_label_signature_is_unmatched() {
    let old = parse_interface("public struct T {\n  public func f(x: Int)\n}", "Lib").unwrap();
    let new =
        parse_interface("public struct T {\n  public func f(x: Int, y: Int)\n}", "Lib").unwrap();
    let (old_index, new_index) = (old.index(), new.index());
    let alignment = align(&old_index, &new_index);

    assert!(alignment.modifications.is_empty());
    assert_eq!(alignment.pending.len(), 2);
    assert_eq!(alignment.pending[0].side, Side::Old);
    assert_eq!(alignment.pending[0].element.diffable_signature(), "f(x:)");
    assert_eq!(alignment.pending[1].side, Side::New);
    assert_eq!(alignment.pending[1].element.diffable_signature(), "f(x:y:)");
    assert_eq!(alignment.pending[1].path, "T");
}

#[test]
fn same_labels_match_directly() {
    let report = diff("public func f(x: Int)", "public func f(x: String)");
    assert_eq!(report.changes.len(), 1);
    let change = &report.changes[0];
    assert!(change.is_modification());
    assert_eq!(change.parent_path, "");
    if let apidelta_engine::ChangeKind::Modification { field_diffs, .. } = &change.kind {
        assert_eq!(
            field_diffs,
            &vec!["Changed parameter `x: Int` to `x: String`".to_string()]
        );
    }
}

#[test]
fn type_level_match_takes_priority() {
    let report = diff(
        "public struct S {\n  public var a: Int\n}",
        "public struct S {\n  public var a: Int, b: String\n}",
    );
    assert_eq!(report.changes.len(), 1);
    assert!(report.changes[0].is_addition());
    assert_eq!(report.changes[0].parent_path, "S");
    assert_eq!(report.changes[0].description(), "public var b: String");
}

#[test]
fn reordered_associated_values_are_a_modification() {
    let report = diff(
        "public enum E {\n  case pair(first: Int, second: Int)\n}",
        "public enum E {\n  case pair(second: Int, first: Int)\n}",
    );
    assert_eq!(report.changes.len(), 1);
    let change = &report.changes[0];
    assert_eq!(change.parent_path, "E");
    let apidelta_engine::ChangeKind::Modification { field_diffs, .. } = &change.kind else {
        panic!("expected a modification, got {change:?}");
    };
    assert_eq!(
        field_diffs,
        &vec![
            "Reordered parameters from `(first: Int, second: Int)` to `(second: Int, first: Int)`"
                .to_string()
        ]
    );
}

#[test]
fn struct_to_class_is_remove_and_add() {
    let report = diff("public struct P {\n}", "public class P {\n}");
    let counts = report.counts();
    assert_eq!(counts.removals, 1);
    assert_eq!(counts.additions, 1);
    assert_eq!(counts.modifications, 0);
}

#[test]
fn extension_members_keep_the_extended_path() {
    let report = diff(
        "extension Swift.Array {\n}",
        "extension Swift.Array {\n  public var second: Element? { get }\n}",
    );
    assert_eq!(report.changes.len(), 1);
    assert_eq!(report.changes[0].parent_path, "Swift.Array");
}

#[test]
fn module_named_nested_type_is_kept_in_path() {
    let report = diff(
        "public enum Outer {\n  public struct Lib {\n  }\n}",
        "public enum Outer {\n  public struct Lib {\n    public var x: Int\n  }\n}",
    );
    assert_eq!(report.changes.len(), 1);
    assert_eq!(report.changes[0].parent_path, "Outer.Lib");
}
