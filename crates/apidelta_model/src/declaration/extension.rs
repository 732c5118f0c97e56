//! Extension declarations.

use apidelta_foundation::FieldDiff;

use super::Declaration;
use crate::render::{DescriptionBuilder, with_inheritance};

/// An `extension` of a (possibly external) type.
#[derive(Clone, Debug, PartialEq)]
pub struct Extension {
    /// Attributes such as `@available(...)`.
    pub attributes: Vec<String>,
    /// Modifiers such as `public`.
    pub modifiers: Vec<String>,
    /// Dotted path of the extended type, e.g. `Module.Outer.Inner`.
    pub extended_type_name: String,
    /// Conformances added by this extension.
    pub inheritance: Option<Vec<String>>,
    /// `where Element: Equatable`.
    pub generic_where_clause: Option<String>,
    /// Declarations inside the extension body.
    pub members: Vec<Declaration>,
}

impl Extension {
    /// Creates an empty extension of the given type.
    #[must_use]
    pub fn new(extended_type_name: impl Into<String>) -> Self {
        Self {
            attributes: Vec::new(),
            modifiers: Vec::new(),
            extended_type_name: extended_type_name.into(),
            inheritance: None,
            generic_where_clause: None,
            members: Vec::new(),
        }
    }

    /// Sets the inheritance clause.
    #[must_use]
    pub fn with_inheritance(mut self, types: &[&str]) -> Self {
        self.inheritance = Some(types.iter().map(ToString::to_string).collect());
        self
    }

    /// Sets the where clause.
    #[must_use]
    pub fn with_where_clause(mut self, clause: impl Into<String>) -> Self {
        self.generic_where_clause = Some(clause.into());
        self
    }

    /// Returns true if the extension carries a non-empty where clause.
    ///
    /// Constrained extensions keep their own identity and are never merged.
    #[must_use]
    pub fn is_constrained(&self) -> bool {
        self.generic_where_clause
            .as_deref()
            .is_some_and(|clause| !clause.trim().is_empty())
    }

    pub(super) fn description(&self) -> String {
        DescriptionBuilder::new(&self.attributes, &self.modifiers)
            .part("extension")
            .part(with_inheritance(
                self.extended_type_name.clone(),
                self.inheritance.as_deref(),
            ))
            .optional(self.generic_where_clause.as_deref())
            .build()
    }

    pub(super) fn differences(&self, to: &Self) -> Vec<String> {
        FieldDiff::new()
            .set("attribute", &self.attributes, &to.attributes)
            .set("modifier", &self.modifiers, &to.modifiers)
            .optional_set(
                "inheritance",
                self.inheritance.as_deref(),
                to.inheritance.as_deref(),
            )
            .value(
                "generic where clause",
                self.generic_where_clause.as_deref(),
                to.generic_where_clause.as_deref(),
            )
            .finish()
    }
}
