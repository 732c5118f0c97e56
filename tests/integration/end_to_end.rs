//! End-to-end diffs of realistic interface pairs

use apidelta_engine::{
    ChangeKind, ChangeRecord, DiffConfig, ModuleInput, ModuleReport, diff_module, diff_modules,
};
use apidelta_model::ElementKind;

const OLD: &str = r"
@frozen public struct Point : Swift.Equatable {
  public var x: Swift.Double
  public var y: Swift.Double
  public func g(a: Swift.Int) -> Swift.Void
  public init(x: Swift.Double, y: Swift.Double)
}
public enum Shape {
  case circle(radius: Swift.Double)
  case square(side: Swift.Double)
}
extension Kit.Point {
  public func distance(to other: Kit.Point) -> Swift.Double
}
";

const NEW: &str = r"
@frozen public struct Point : Swift.Equatable, Swift.Hashable {
  public var x: Swift.Double
  public var y: Swift.Double
  public init(x: Swift.Double, y: Swift.Double, z: Swift.Double = 0)
}
public enum Shape {
  case circle(radius: Swift.Double)
  case square(side: Swift.Float)
  case triangle
}
extension Kit.Point {
  @discardableResult
  public func distance(to other: Kit.Point) -> Swift.Double
}
";

fn report() -> ModuleReport {
    diff_module(
        &ModuleInput::new("Kit", OLD),
        &ModuleInput::new("Kit", NEW),
        &DiffConfig::default(),
    )
    .unwrap()
}

fn find<'a>(changes: &'a [ChangeRecord], needle: &str) -> &'a ChangeRecord {
    changes
        .iter()
        .find(|c| c.description().contains(needle))
        .unwrap_or_else(|| panic!("no change mentioning {needle}: {changes:#?}"))
}

#[test]
fn added_property_is_the_only_change() {
    let old = ModuleInput::new("Lib", "public class C {\n  public var x: Int\n}");
    let new = ModuleInput::new(
        "Lib",
        "public class C {\n  public var x: Int\n  public var y: String\n}",
    );
    let report = diff_module(&old, &new, &DiffConfig::default()).unwrap();
    assert_eq!(
        report.changes,
        vec![ChangeRecord::addition("C", ElementKind::Property, "public var y: String")]
    );
}

#[test]
fn removed_function_has_the_type_path() {
    let report = report();
    let removal = report.changes.iter().find(|c| c.is_removal()).unwrap();
    assert_eq!(removal.parent_path, "Point");
    assert_eq!(removal.element_kind, ElementKind::Function);
    assert_eq!(removal.description(), "public func g(a: Swift.Int) -> Swift.Void");
    assert_eq!(report.counts().removals, 1);
}

#[test]
fn conformance_change_is_a_type_modification() {
    let report = report();
    let point = report
        .changes
        .iter()
        .find(|c| c.element_kind == ElementKind::Struct)
        .unwrap();
    let ChangeKind::Modification { field_diffs, .. } = &point.kind else {
        panic!("expected a modification: {point:?}");
    };
    assert_eq!(field_diffs, &vec!["Added inheritance `Swift.Hashable`".to_string()]);
    assert_eq!(point.parent_path, "");
}

#[test]
fn initializer_with_new_parameter_is_consolidated() {
    let report = report();
    let init = find(&report.changes, "init(");
    let ChangeKind::Modification { field_diffs, .. } = &init.kind else {
        panic!("expected a modification: {init:?}");
    };
    assert_eq!(
        field_diffs,
        &vec!["Added parameter `z: Swift.Double = 0`".to_string()]
    );
}

#[test]
fn merged_extension_member_changes_under_the_type() {
    let report = report();
    let distance = find(&report.changes, "distance");
    assert_eq!(distance.parent_path, "Point");
    let ChangeKind::Modification { field_diffs, .. } = &distance.kind else {
        panic!("expected a modification: {distance:?}");
    };
    assert_eq!(
        field_diffs,
        &vec!["Added attribute `@discardableResult`".to_string()]
    );
}

#[test]
fn enum_case_changes() {
    let report = report();
    let square = find(&report.changes, "square");
    assert!(square.is_modification());
    assert_eq!(square.parent_path, "Shape");
    let triangle = find(&report.changes, "triangle");
    assert!(triangle.is_addition());
}

#[test]
fn totals_and_metrics() {
    let report = report();
    let counts = report.counts();
    assert_eq!(counts.additions, 1);
    assert_eq!(counts.removals, 1);
    assert_eq!(counts.modifications, 4);

    let deltas = report.metrics.deltas();
    let kinds: Vec<_> = deltas.iter().map(|d| (d.kind, d.delta())).collect();
    assert_eq!(
        kinds,
        vec![(ElementKind::Function, -1), (ElementKind::EnumCase, 1)]
    );
}

#[test]
fn self_diff_of_a_realistic_module() {
    let input = ModuleInput::new("Kit", NEW);
    let report = diff_module(&input, &input, &DiffConfig::default()).unwrap();
    assert!(report.is_empty());
    assert!(report.metrics.deltas().is_empty());
}

#[test]
fn several_modules() {
    let kit = (ModuleInput::new("Kit", OLD), ModuleInput::new("Kit", NEW));
    let empty = (ModuleInput::new("Empty", ""), ModuleInput::new("Empty", ""));
    let reports = diff_modules(
        [(&kit.0, &kit.1), (&empty.0, &empty.1)],
        &DiffConfig::default(),
    )
    .unwrap();
    assert_eq!(reports.len(), 2);
    assert!(!reports[0].is_empty());
    assert!(reports[1].is_empty());
}
