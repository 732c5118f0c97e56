//! The full diff pipeline for one module.
//!
//! ```text
//! text ──parse──▶ raw tree ──merge──▶ frozen tree ┐
//!                                                 ├─ align ─▶ consolidate ─▶ records
//! text ──parse──▶ raw tree ──merge──▶ frozen tree ┘
//! ```
//!
//! The two trees are independent until alignment, so they may be built on two
//! threads.

use apidelta_foundation::Result;
use apidelta_model::Interface;
use apidelta_parser::parse_interface_with;
use serde::Serialize;
use tracing::debug;

use crate::align::align;
use crate::change::ChangeRecord;
use crate::config::DiffConfig;
use crate::consolidate::consolidate;
use crate::metrics::{Metrics, MetricsPair};

/// Interface text for one version of a module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleInput {
    /// The module name.
    pub module_name: String,
    /// The interface text.
    pub text: String,
}

impl ModuleInput {
    /// Creates a module input.
    #[must_use]
    pub fn new(module_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            text: text.into(),
        }
    }

    /// Parses this input into a frozen interface.
    ///
    /// # Errors
    /// Returns an error if the parser's scope stack goes out of balance.
    pub fn build(&self, config: &DiffConfig) -> Result<Interface> {
        parse_interface_with(&self.text, &self.module_name, config.merge_extensions)
    }
}

/// Number of records per change direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChangeCounts {
    /// Elements only in the new interface.
    pub additions: usize,
    /// Elements only in the old interface.
    pub removals: usize,
    /// Elements present in both with different content.
    pub modifications: usize,
}

/// All changes found in one module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModuleReport {
    /// The module name (taken from the new side).
    pub module_name: String,
    /// Change records: modifications of matched pairs first, then the
    /// consolidated remainder.
    pub changes: Vec<ChangeRecord>,
    /// Declaration counts of both versions.
    pub metrics: MetricsPair,
}

impl ModuleReport {
    /// Returns true if no change was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Counts records per change direction.
    #[must_use]
    pub fn counts(&self) -> ChangeCounts {
        let mut counts = ChangeCounts::default();
        for change in &self.changes {
            if change.is_addition() {
                counts.additions += 1;
            } else if change.is_removal() {
                counts.removals += 1;
            } else {
                counts.modifications += 1;
            }
        }
        counts
    }
}

/// Diffs two frozen interfaces.
#[must_use]
pub fn diff_interfaces(old: &Interface, new: &Interface, config: &DiffConfig) -> ModuleReport {
    let old_index = old.index();
    let new_index = new.index();
    let alignment = align(&old_index, &new_index);

    let mut changes = alignment.modifications;
    if config.consolidate {
        changes.extend(consolidate(alignment.pending));
    } else {
        changes.extend(alignment.pending.into_iter().map(|p| p.into_record()));
    }

    ModuleReport {
        module_name: new.module_name().to_string(),
        changes,
        metrics: MetricsPair {
            old: Metrics::collect(old),
            new: Metrics::collect(new),
        },
    }
}

/// Parses, normalizes and diffs one module.
///
/// # Errors
/// Returns an error if either side cannot be parsed into a balanced tree.
pub fn diff_module(
    old: &ModuleInput,
    new: &ModuleInput,
    config: &DiffConfig,
) -> Result<ModuleReport> {
    debug!(
        module = new.module_name.as_str(),
        parallel = config.parallel,
        "diffing module"
    );

    let (old_tree, new_tree) = if config.parallel {
        rayon::join(|| old.build(config), || new.build(config))
    } else {
        (old.build(config), new.build(config))
    };
    let report = diff_interfaces(&old_tree?, &new_tree?, config);

    debug!(
        module = report.module_name.as_str(),
        changes = report.changes.len(),
        "module diffed"
    );
    Ok(report)
}

/// Diffs several modules, returning the reports in input order.
///
/// # Errors
/// Returns the first error encountered.
pub fn diff_modules<'a>(
    pairs: impl IntoIterator<Item = (&'a ModuleInput, &'a ModuleInput)>,
    config: &DiffConfig,
) -> Result<Vec<ModuleReport>> {
    pairs
        .into_iter()
        .map(|(old, new)| diff_module(old, new, config))
        .collect()
}
