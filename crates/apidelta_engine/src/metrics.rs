//! Declaration counts per kind.

use std::collections::BTreeMap;

use apidelta_model::{ElementKind, Interface};
use serde::Serialize;

/// Number of elements of each kind in one interface, root excluded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Metrics {
    counts: BTreeMap<ElementKind, usize>,
}

impl Metrics {
    /// Counts every element below the root, nested ones included.
    #[must_use]
    pub fn collect(interface: &Interface) -> Self {
        let mut metrics = Self::default();
        for (_, node) in interface.index().descendants() {
            metrics.record(node.element.kind());
        }
        metrics
    }

    /// Adds one element of `kind`.
    pub fn record(&mut self, kind: ElementKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    /// Number of elements of `kind`.
    #[must_use]
    pub fn count(&self, kind: ElementKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Number of elements of all kinds.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Non-zero counts in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementKind, usize)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }

    /// Renders `3 structs, 12 functions` style text.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.counts.is_empty() {
            return "no declarations".to_string();
        }
        self.iter()
            .map(|(kind, count)| {
                let noun = if count == 1 { kind.name() } else { kind.plural() };
                format!("{count} {noun}")
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A kind whose count differs between versions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MetricDelta {
    /// The kind.
    pub kind: ElementKind,
    /// Count in the old interface.
    pub old: usize,
    /// Count in the new interface.
    pub new: usize,
}

impl MetricDelta {
    /// Signed change from old to new.
    #[must_use]
    pub fn delta(&self) -> i64 {
        let old = i64::try_from(self.old).unwrap_or(i64::MAX);
        let new = i64::try_from(self.new).unwrap_or(i64::MAX);
        new - old
    }
}

/// Old and new counts for one module.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MetricsPair {
    /// Counts for the old interface.
    pub old: Metrics,
    /// Counts for the new interface.
    pub new: Metrics,
}

impl MetricsPair {
    /// Kinds whose count changed, in kind order.
    #[must_use]
    pub fn deltas(&self) -> Vec<MetricDelta> {
        ElementKind::ALL
            .iter()
            .map(|&kind| MetricDelta {
                kind,
                old: self.old.count(kind),
                new: self.new.count(kind),
            })
            .filter(|delta| delta.old != delta.new)
            .collect()
    }
}
