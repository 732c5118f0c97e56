//! Change records.
//!
//! The engine's output is an ordered list of [`ChangeRecord`]s, each tagged
//! with the module-stripped path of the element's parent so that renderers can
//! group them.

use apidelta_model::ElementKind;
use serde::Serialize;

/// One observable API difference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    /// Dotted path of the enclosing declaration; empty at top level.
    pub parent_path: String,
    /// Kind of the changed element.
    pub element_kind: ElementKind,
    /// What happened to it.
    #[serde(flatten)]
    pub kind: ChangeKind,
}

/// The direction of a change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum ChangeKind {
    /// Present only in the new interface.
    Addition {
        /// Description of the new element.
        description: String,
    },
    /// Present only in the old interface.
    Removal {
        /// Description of the old element.
        description: String,
    },
    /// The same declaration with different content.
    Modification {
        /// Description of the old element.
        old_description: String,
        /// Description of the new element.
        new_description: String,
        /// Field-level differences, possibly empty.
        field_diffs: Vec<String>,
    },
}

impl ChangeRecord {
    /// Creates an addition record.
    #[must_use]
    pub fn addition(
        parent_path: impl Into<String>,
        element_kind: ElementKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            parent_path: parent_path.into(),
            element_kind,
            kind: ChangeKind::Addition {
                description: description.into(),
            },
        }
    }

    /// Creates a removal record.
    #[must_use]
    pub fn removal(
        parent_path: impl Into<String>,
        element_kind: ElementKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            parent_path: parent_path.into(),
            element_kind,
            kind: ChangeKind::Removal {
                description: description.into(),
            },
        }
    }

    /// Creates a modification record.
    #[must_use]
    pub fn modification(
        parent_path: impl Into<String>,
        element_kind: ElementKind,
        old_description: impl Into<String>,
        new_description: impl Into<String>,
        field_diffs: Vec<String>,
    ) -> Self {
        Self {
            parent_path: parent_path.into(),
            element_kind,
            kind: ChangeKind::Modification {
                old_description: old_description.into(),
                new_description: new_description.into(),
                field_diffs,
            },
        }
    }

    /// Returns true if this is an addition.
    #[must_use]
    pub fn is_addition(&self) -> bool {
        matches!(self.kind, ChangeKind::Addition { .. })
    }

    /// Returns true if this is a removal.
    #[must_use]
    pub fn is_removal(&self) -> bool {
        matches!(self.kind, ChangeKind::Removal { .. })
    }

    /// Returns true if this is a modification.
    #[must_use]
    pub fn is_modification(&self) -> bool {
        matches!(self.kind, ChangeKind::Modification { .. })
    }

    /// The description a reader sees first: the element itself for additions
    /// and removals, the new version for modifications.
    #[must_use]
    pub fn description(&self) -> &str {
        match &self.kind {
            ChangeKind::Addition { description } | ChangeKind::Removal { description } => {
                description
            }
            ChangeKind::Modification {
                new_description, ..
            } => new_description,
        }
    }
}
