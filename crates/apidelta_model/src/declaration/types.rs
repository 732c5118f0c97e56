//! Nominal type declarations.

use apidelta_foundation::FieldDiff;

use super::{Declaration, Extension};
use crate::kind::TypeKeyword;
use crate::render::{DescriptionBuilder, with_inheritance};

/// A `struct`, `class`, `enum`, `protocol` or `actor` declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDecl {
    /// The introducing keyword.
    pub keyword: TypeKeyword,
    /// Attributes such as `@frozen`.
    pub attributes: Vec<String>,
    /// Modifiers such as `public` or `final`.
    pub modifiers: Vec<String>,
    /// The declared name.
    pub name: String,
    /// `<T: Equatable>`, or a protocol's primary associated types.
    pub generic_parameter_clause: Option<String>,
    /// Inherited or conformed types.
    pub inheritance: Option<Vec<String>>,
    /// `where T: Hashable`.
    pub generic_where_clause: Option<String>,
    /// Nested declarations.
    pub members: Vec<Declaration>,
}

impl TypeDecl {
    /// Creates an empty type declaration.
    #[must_use]
    pub fn new(keyword: TypeKeyword, name: impl Into<String>) -> Self {
        Self {
            keyword,
            attributes: Vec::new(),
            modifiers: Vec::new(),
            name: name.into(),
            generic_parameter_clause: None,
            inheritance: None,
            generic_where_clause: None,
            members: Vec::new(),
        }
    }

    /// Sets the modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: &[&str]) -> Self {
        self.modifiers = modifiers.iter().map(ToString::to_string).collect();
        self
    }

    /// Sets the inheritance clause.
    #[must_use]
    pub fn with_inheritance(mut self, types: &[&str]) -> Self {
        self.inheritance = Some(types.iter().map(ToString::to_string).collect());
        self
    }

    /// Sets the members.
    #[must_use]
    pub fn with_members(mut self, members: Vec<Declaration>) -> Self {
        self.members = members;
        self
    }

    /// Folds an unconstrained extension into this type.
    ///
    /// The extension's members are appended after the existing members and its
    /// conformances after the existing inheritance clause.
    pub fn absorb(&mut self, extension: Extension) {
        self.members.extend(extension.members);
        if let Some(extra) = extension.inheritance.filter(|types| !types.is_empty()) {
            self.inheritance.get_or_insert_with(Vec::new).extend(extra);
        }
    }

    pub(super) fn description(&self) -> String {
        let head = format!(
            "{}{}",
            self.name,
            self.generic_parameter_clause.as_deref().unwrap_or_default()
        );
        DescriptionBuilder::new(&self.attributes, &self.modifiers)
            .part(self.keyword.as_str())
            .part(with_inheritance(head, self.inheritance.as_deref()))
            .optional(self.generic_where_clause.as_deref())
            .build()
    }

    pub(super) fn differences(&self, to: &Self) -> Vec<String> {
        FieldDiff::new()
            .set("attribute", &self.attributes, &to.attributes)
            .set("modifier", &self.modifiers, &to.modifiers)
            .value(
                "generic parameter clause",
                self.generic_parameter_clause.as_deref(),
                to.generic_parameter_clause.as_deref(),
            )
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
