//! Structural alignment of two interface trees.
//!
//! Both trees are flattened depth-first. An old element and a new element are
//! the same declaration when their kind, parent path and diffable signature
//! are all equal. Duplicates are matched in encounter order: the first
//! unmatched candidate wins.

use std::collections::{HashMap, VecDeque};

use apidelta_model::{Declaration, ElementKind, TreeIndex};
use tracing::debug;

use crate::change::ChangeRecord;

/// Which interface a pending change comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Only in the old interface: a removal.
    Old,
    /// Only in the new interface: an addition.
    New,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Old => Self::New,
            Self::New => Self::Old,
        }
    }
}

/// An element left unmatched by alignment.
#[derive(Clone, Debug)]
pub struct Pending<'a> {
    /// Where the element lives.
    pub side: Side,
    /// The element.
    pub element: &'a Declaration,
    /// Module-stripped parent path.
    pub path: String,
}

impl<'a> Pending<'a> {
    /// Creates a pending change.
    #[must_use]
    pub fn new(side: Side, element: &'a Declaration, path: impl Into<String>) -> Self {
        Self {
            side,
            element,
            path: path.into(),
        }
    }

    /// Converts into a standalone addition or removal.
    #[must_use]
    pub fn into_record(self) -> ChangeRecord {
        let kind = self.element.kind();
        let description = self.element.description();
        match self.side {
            Side::Old => ChangeRecord::removal(self.path, kind, description),
            Side::New => ChangeRecord::addition(self.path, kind, description),
        }
    }
}

/// Result of aligning two trees.
#[derive(Debug, Default)]
pub struct Alignment<'a> {
    /// Matched pairs whose content differs.
    pub modifications: Vec<ChangeRecord>,
    /// Unmatched elements: removals in old order, then additions in new order.
    pub pending: Vec<Pending<'a>>,
}

type Key = (ElementKind, String, String);

fn key(index: &TreeIndex<'_>, id: usize) -> Key {
    let element = index.node(id).element;
    (element.kind(), index.path(id), element.diffable_signature())
}

/// Aligns the elements of `old` with those of `new`.
#[must_use]
pub fn align<'a>(old: &TreeIndex<'a>, new: &TreeIndex<'a>) -> Alignment<'a> {
    let mut candidates: HashMap<Key, VecDeque<usize>> = HashMap::new();
    for (id, _) in new.descendants() {
        candidates.entry(key(new, id)).or_default().push_back(id);
    }

    let mut matched_new = vec![false; new.len()];
    let mut alignment = Alignment::default();
    let mut removals = Vec::new();

    for (id, node) in old.descendants() {
        let (kind, path, signature) = key(old, id);
        let found = candidates
            .get_mut(&(kind, path.clone(), signature))
            .and_then(VecDeque::pop_front);
        match found {
            Some(new_id) => {
                matched_new[new_id] = true;
                let new_element = new.node(new_id).element;
                let field_diffs = node.element.differences(new_element);
                if !field_diffs.is_empty() {
                    alignment.modifications.push(ChangeRecord::modification(
                        path,
                        kind,
                        node.element.description(),
                        new_element.description(),
                        field_diffs,
                    ));
                }
            }
            None => removals.push(Pending::new(Side::Old, node.element, path)),
        }
    }

    let additions: Vec<Pending<'a>> = new
        .descendants()
        .filter(|(id, _)| !matched_new[*id])
        .map(|(id, node)| Pending::new(Side::New, node.element, new.path(id)))
        .collect();

    debug!(
        module = old.module_name(),
        modifications = alignment.modifications.len(),
        removals = removals.len(),
        additions = additions.len(),
        "aligned interfaces"
    );

    alignment.pending = removals;
    alignment.pending.extend(additions);
    alignment
}
