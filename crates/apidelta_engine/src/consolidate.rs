//! Re-pairing of leftover additions and removals.
//!
//! A declaration whose identity changed (different labels, different
//! signature) shows up after alignment as an unrelated removal and addition.
//! Consolidation pairs them back up by kind, parent path and consolidatable
//! name. Pairing is first-fit in pending order.

use std::collections::VecDeque;

use tracing::{debug, error};

use crate::align::{Pending, Side};
use crate::change::ChangeRecord;

/// Consolidates pending changes into the final records.
///
/// A pending change with a partner becomes a modification at the position of
/// the earlier of the two; the rest stay additions or removals.
#[must_use]
pub fn consolidate(pending: Vec<Pending<'_>>) -> Vec<ChangeRecord> {
    let total = pending.len();
    let mut queue: VecDeque<Pending<'_>> = pending.into();
    let mut records = Vec::with_capacity(total);
    let mut paired = 0usize;

    while let Some(first) = queue.pop_front() {
        let position = queue.iter().position(|other| is_partner(&first, other));
        let Some(second) = position.and_then(|p| queue.remove(p)) else {
            records.push(first.into_record());
            continue;
        };

        let (old, new) = match first.side {
            Side::Old => (first, second),
            Side::New => (second, first),
        };
        let field_diffs = old.element.differences(new.element);
        if field_diffs.is_empty() {
            error!(
                event = "consolidation_defect",
                path = old.path.as_str(),
                kind = %old.element.kind(),
                name = old.element.consolidatable_name(),
                "consolidated pair has no field differences"
            );
        }
        paired += 1;
        records.push(ChangeRecord::modification(
            old.path,
            old.element.kind(),
            old.element.description(),
            new.element.description(),
            field_diffs,
        ));
    }

    debug!(pending = total, paired, records = records.len(), "consolidated changes");
    records
}

fn is_partner(first: &Pending<'_>, other: &Pending<'_>) -> bool {
    other.side == first.side.opposite()
        && other.element.kind() == first.element.kind()
        && other.path == first.path
        && other.element.consolidatable_name() == first.element.consolidatable_name()
}
