//! Field-level change descriptions.
//!
//! A modified declaration is explained by a list of short lines such as
//! ``Added attribute `@discardableResult` `` or
//! ``Changed return type from `Int` to `String` ``. The helpers here produce
//! those lines for optional scalar fields and for order-insensitive sets.

use std::collections::HashSet;

/// Describes the change of an optional scalar field.
///
/// Returns `None` when both sides are equal.
#[must_use]
pub fn diff_value(label: &str, old: Option<&str>, new: Option<&str>) -> Option<String> {
    match (old, new) {
        (Some(old), None) => Some(format!("Removed {label} `{old}`")),
        (None, Some(new)) => Some(format!("Added {label} `{new}`")),
        (Some(old), Some(new)) if old != new => {
            Some(format!("Changed {label} from `{old}` to `{new}`"))
        }
        _ => None,
    }
}

/// Describes the difference between two token sets.
///
/// Order is not significant for comparison. Removals are listed in old order,
/// followed by additions in new order; duplicates are reported once.
#[must_use]
pub fn diff_set(label: &str, old: &[String], new: &[String]) -> Vec<String> {
    let old_set: HashSet<&str> = old.iter().map(String::as_str).collect();
    let new_set: HashSet<&str> = new.iter().map(String::as_str).collect();

    let mut seen = HashSet::new();
    let mut lines = Vec::new();

    for token in old {
        if !new_set.contains(token.as_str()) && seen.insert(("-", token.as_str())) {
            lines.push(format!("Removed {label} `{token}`"));
        }
    }
    for token in new {
        if !old_set.contains(token.as_str()) && seen.insert(("+", token.as_str())) {
            lines.push(format!("Added {label} `{token}`"));
        }
    }

    lines
}

/// Accumulates the field-level change lines of one declaration pair.
#[derive(Debug, Default)]
pub struct FieldDiff {
    lines: Vec<String>,
}

impl FieldDiff {
    /// Creates an empty diff.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the change of an optional scalar field.
    #[must_use]
    pub fn value(mut self, label: &str, old: Option<&str>, new: Option<&str>) -> Self {
        self.lines.extend(diff_value(label, old, new));
        self
    }

    /// Records the change of a required scalar field.
    #[must_use]
    pub fn required(self, label: &str, old: &str, new: &str) -> Self {
        self.value(label, Some(old), Some(new))
    }

    /// Records the change of an order-insensitive set.
    #[must_use]
    pub fn set(mut self, label: &str, old: &[String], new: &[String]) -> Self {
        self.lines.extend(diff_set(label, old, new));
        self
    }

    /// Records an optional set; an absent set compares like an empty one.
    #[must_use]
    pub fn optional_set(self, label: &str, old: Option<&[String]>, new: Option<&[String]>) -> Self {
        self.set(label, old.unwrap_or_default(), new.unwrap_or_default())
    }

    /// Appends already formatted lines.
    #[must_use]
    pub fn lines(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.lines.extend(lines);
        self
    }

    /// Returns the collected lines.
    #[must_use]
    pub fn finish(self) -> Vec<String> {
        self.lines
    }
}
