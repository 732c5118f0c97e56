//! `typealias` and `associatedtype` declarations.

use apidelta_foundation::FieldDiff;

use crate::render::{DescriptionBuilder, with_inheritance};

/// A `typealias` declaration.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TypeAlias {
    /// Attributes such as `@available(...)`.
    pub attributes: Vec<String>,
    /// Modifiers such as `public`.
    pub modifiers: Vec<String>,
    /// The alias name.
    pub name: String,
    /// `<T>`.
    pub generic_parameter_clause: Option<String>,
    /// The type on the right of `=`.
    pub aliased_type: String,
    /// `where T: Hashable`.
    pub generic_where_clause: Option<String>,
}

impl TypeAlias {
    /// Creates an alias.
    #[must_use]
    pub fn new(name: impl Into<String>, aliased_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliased_type: aliased_type.into(),
            ..Self::default()
        }
    }

    pub(super) fn description(&self) -> String {
        DescriptionBuilder::new(&self.attributes, &self.modifiers)
            .part("typealias")
            .part(format!(
                "{}{}",
                self.name,
                self.generic_parameter_clause.as_deref().unwrap_or_default()
            ))
            .part(format!("= {}", self.aliased_type))
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
            .required("aliased type", &self.aliased_type, &to.aliased_type)
            .value(
                "generic where clause",
                self.generic_where_clause.as_deref(),
                to.generic_where_clause.as_deref(),
            )
            .finish()
    }
}

/// An `associatedtype` requirement inside a protocol.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AssociatedType {
    /// Attributes.
    pub attributes: Vec<String>,
    /// Modifiers.
    pub modifiers: Vec<String>,
    /// The associated type name.
    pub name: String,
    /// Required conformances.
    pub inheritance: Option<Vec<String>>,
    /// The default type after `=`.
    pub default_type: Option<String>,
    /// `where Self.Element: Equatable`.
    pub generic_where_clause: Option<String>,
}

impl AssociatedType {
    /// Creates an unconstrained associated type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub(super) fn description(&self) -> String {
        DescriptionBuilder::new(&self.attributes, &self.modifiers)
            .part("associatedtype")
            .part(with_inheritance(
                self.name.clone(),
                self.inheritance.as_deref(),
            ))
            .optional(
                self.default_type
                    .as_deref()
                    .map(|ty| format!("= {ty}"))
                    .as_deref(),
            )
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
                "default type",
                self.default_type.as_deref(),
                to.default_type.as_deref(),
            )
            .value(
                "generic where clause",
                self.generic_where_clause.as_deref(),
                to.generic_where_clause.as_deref(),
            )
            .finish()
    }
}
