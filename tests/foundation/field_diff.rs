//! Integration tests for field-level diff helpers

use apidelta_foundation::{FieldDiff, diff_set, diff_value};
use proptest::prelude::*;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn set_collapses_duplicates() {
    let old = strings(&["@objc", "@objc"]);
    let new = strings(&[]);
    assert_eq!(diff_set("attribute", &old, &new), vec!["Removed attribute `@objc`"]);
}

#[test]
fn optional_set_treats_missing_as_empty() {
    let new = strings(&["Hashable"]);
    let lines = FieldDiff::new()
        .optional_set("inheritance", None, Some(&new))
        .finish();
    assert_eq!(lines, vec!["Added inheritance `Hashable`"]);
}

#[test]
fn value_equal_is_silent() {
    assert!(diff_value("type", Some("Int"), Some("Int")).is_none());
}

fn token() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["public", "final", "static", "@objc", "open", "mutating"])
        .prop_map(str::to_string)
}

proptest! {
    #[test]
    fn set_diff_is_symmetric(
        old in prop::collection::vec(token(), 0..6),
        new in prop::collection::vec(token(), 0..6),
    ) {
        let forward = diff_set("modifier", &old, &new);
        let backward = diff_set("modifier", &new, &old);
        prop_assert_eq!(forward.len(), backward.len());

        let flipped: Vec<String> = backward
            .iter()
            .map(|line| match line.strip_prefix("Added ") {
                Some(rest) => format!("Removed {rest}"),
                None => line.replacen("Removed ", "Added ", 1),
            })
            .collect();
        let mut forward_sorted = forward.clone();
        let mut flipped_sorted = flipped;
        forward_sorted.sort();
        flipped_sorted.sort();
        prop_assert_eq!(forward_sorted, flipped_sorted);
    }

    #[test]
    fn set_diff_ignores_order(tokens in prop::collection::vec(token(), 0..6)) {
        let mut shuffled = tokens.clone();
        shuffled.reverse();
        prop_assert!(diff_set("modifier", &tokens, &shuffled).is_empty());
    }
}
