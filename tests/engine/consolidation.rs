//! Integration tests for change consolidation

use apidelta_engine::{ChangeKind, DiffConfig, ModuleInput, Pending, Side, consolidate, diff_module};
use apidelta_model::{Declaration, Property};
use apidelta_runtime::logging::capture::capture;

use crate::diff;

#[test]
fn relabeled_function_is_one_modification() {
    let report = diff(
        "public struct T {\n  public func f(x: Int)\n}",
        "public struct T {\n  public func f(x: Int, y: Int)\n}",
    );
    assert_eq!(report.changes.len(), 1);
    let change = &report.changes[0];
    assert_eq!(change.parent_path, "T");
    let ChangeKind::Modification {
        old_description,
        new_description,
        field_diffs,
    } = &change.kind
    else {
        panic!("expected a modification, got {change:?}");
    };
    assert_eq!(old_description, "public func f(x: Int)");
    assert_eq!(new_description, "public func f(x: Int, y: Int)");
    assert_eq!(field_diffs, &vec!["Added parameter `y: Int`".to_string()]);
}

#[test]
fn relabeled_initializer_pairs_by_keyword() {
    let report = diff(
        "public struct T {\n  public init(a: Int)\n}",
        "public struct T {\n  public init(b: Int)\n}",
    );
    assert_eq!(report.counts().modifications, 1);
}

#[test]
fn unrelated_names_stay_apart() {
    let report = diff("public func f(x: Int)", "public func g(x: Int)");
    let counts = report.counts();
    assert_eq!((counts.removals, counts.additions), (1, 1));
}

#[test]
fn first_fit_pairs_with_the_earliest_candidate() {
    let report = diff(
        "public func f(a: Int)\npublic func f(b: Int)",
        "public func f(c: Int)",
    );
    assert_eq!(report.counts().modifications, 1);
    assert_eq!(report.counts().removals, 1);
    let modification = report.changes.iter().find(|c| c.is_modification()).unwrap();
    let ChangeKind::Modification {
        old_description, ..
    } = &modification.kind
    else {
        unreachable!();
    };
    assert_eq!(old_description, "public func f(a: Int)");
}

#[test]
fn reordered_parameters_are_explained() {
    let old = ModuleInput::new("Lib", "public func f(a: Int, b: Int)");
    let new = ModuleInput::new("Lib", "public func f(b: Int, a: Int)");
    let (report, captured) =
        capture(|| diff_module(&old, &new, &DiffConfig::sequential()).unwrap());

    assert_eq!(report.changes.len(), 1);
    let ChangeKind::Modification { field_diffs, .. } = &report.changes[0].kind else {
        panic!("expected a modification, got {:?}", report.changes[0]);
    };
    assert_eq!(
        field_diffs,
        &vec!["Reordered parameters from `(a: Int, b: Int)` to `(b: Int, a: Int)`".to_string()]
    );
    assert!(!captured.has_event("consolidation_defect"));
}

#[test]
fn textually_identical_pair_is_a_logged_defect() {
    let a = Declaration::Property(Property::var("x", "Int"));
    let b = a.clone();
    let (records, captured) = capture(|| {
        consolidate(vec![
            Pending::new(Side::Old, &a, "S"),
            Pending::new(Side::New, &b, "S"),
        ])
    });

    assert_eq!(records.len(), 1);
    assert!(records[0].is_modification());
    assert!(captured.has_event("consolidation_defect"));
}

#[test]
fn disabled_consolidation_leaves_pairs_split() {
    let old = ModuleInput::new("Lib", "public func f(x: Int)");
    let new = ModuleInput::new("Lib", "public func f(y: Int)");
    let config = DiffConfig::sequential().with_consolidate(false);
    let report = diff_module(&old, &new, &config).unwrap();
    assert_eq!(report.counts().removals, 1);
    assert_eq!(report.counts().additions, 1);
    assert!(report.changes[0].is_removal());
}
