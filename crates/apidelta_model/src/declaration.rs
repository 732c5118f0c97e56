//! Declaration elements.
//!
//! [`Declaration`] is a closed sum over every supported declaration kind. The
//! per-kind operations (description, signatures, field-level differences) are
//! implemented on the variant structs and dispatched here by pattern matching.
//! Differences are only ever computed between two values of the same variant.

mod alias;
mod enum_case;
mod extension;
mod function;
mod property;
mod types;

pub use alias::{AssociatedType, TypeAlias};
pub use enum_case::EnumCase;
pub use extension::Extension;
pub use function::{Function, Initializer, Subscript};
pub use property::Property;
pub use types::TypeDecl;

use crate::kind::ElementKind;

// =============================================================================
// Root
// =============================================================================

/// The module root.
#[derive(Clone, Debug, PartialEq)]
pub struct Root {
    /// The module name.
    pub name: String,
    /// Top-level declarations.
    pub members: Vec<Declaration>,
}

impl Root {
    /// Creates a module root.
    #[must_use]
    pub fn new(name: impl Into<String>, members: Vec<Declaration>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}

// =============================================================================
// Declaration
// =============================================================================

/// One node of a parsed interface.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    /// The module root.
    Root(Root),
    /// A nominal type.
    Type(TypeDecl),
    /// An extension.
    Extension(Extension),
    /// A function.
    Function(Function),
    /// An initializer.
    Initializer(Initializer),
    /// A single property binding.
    Property(Property),
    /// A subscript.
    Subscript(Subscript),
    /// An associated type requirement.
    AssociatedType(AssociatedType),
    /// A type alias.
    TypeAlias(TypeAlias),
    /// A single enum case.
    EnumCase(EnumCase),
}

impl Declaration {
    /// Returns the concrete kind.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Root(_) => ElementKind::Root,
            Self::Type(decl) => decl.keyword.into(),
            Self::Extension(_) => ElementKind::Extension,
            Self::Function(_) => ElementKind::Function,
            Self::Initializer(_) => ElementKind::Initializer,
            Self::Property(_) => ElementKind::Property,
            Self::Subscript(_) => ElementKind::Subscript,
            Self::AssociatedType(_) => ElementKind::AssociatedType,
            Self::TypeAlias(_) => ElementKind::TypeAlias,
            Self::EnumCase(_) => ElementKind::EnumCase,
        }
    }

    /// Canonical single-declaration text.
    ///
    /// Attributes come first, one per line; everything else is joined by single
    /// spaces.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Root(root) => format!("module {}", root.name),
            Self::Type(decl) => decl.description(),
            Self::Extension(decl) => decl.description(),
            Self::Function(decl) => decl.description(),
            Self::Initializer(decl) => decl.description(),
            Self::Property(decl) => decl.description(),
            Self::Subscript(decl) => decl.description(),
            Self::AssociatedType(decl) => decl.description(),
            Self::TypeAlias(decl) => decl.description(),
            Self::EnumCase(decl) => decl.description(),
        }
    }

    /// The name contributed to the paths of nested declarations.
    ///
    /// Empty for leaf kinds.
    #[must_use]
    pub fn path_component_name(&self) -> &str {
        match self {
            Self::Root(root) => &root.name,
            Self::Type(decl) => &decl.name,
            Self::Extension(decl) => &decl.extended_type_name,
            _ => "",
        }
    }

    /// Identity used to align the same declaration across versions.
    ///
    /// Function-like declarations include their argument labels so that
    /// overloads stay apart.
    #[must_use]
    pub fn diffable_signature(&self) -> String {
        match self {
            Self::Function(decl) => decl.signature(),
            Self::Initializer(decl) => decl.signature(),
            Self::Subscript(decl) => decl.signature(),
            _ => self.name().to_string(),
        }
    }

    /// Looser identity used to re-pair leftover additions and removals.
    #[must_use]
    pub fn consolidatable_name(&self) -> &str {
        match self {
            Self::Initializer(_) => "init",
            Self::Subscript(_) => "subscript",
            _ => self.name(),
        }
    }

    /// The declared name, or the extended type for extensions.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Root(root) => &root.name,
            Self::Type(decl) => &decl.name,
            Self::Extension(decl) => &decl.extended_type_name,
            Self::Function(decl) => &decl.name,
            Self::Initializer(_) => "init",
            Self::Property(decl) => &decl.name,
            Self::Subscript(_) => "subscript",
            Self::AssociatedType(decl) => &decl.name,
            Self::TypeAlias(decl) => &decl.name,
            Self::EnumCase(decl) => &decl.name,
        }
    }

    /// Field-level differences from `self` (old) to `to` (new).
    ///
    /// Empty when the two elements are of different kinds.
    #[must_use]
    pub fn differences(&self, to: &Self) -> Vec<String> {
        match (self, to) {
            (Self::Type(old), Self::Type(new)) if old.keyword == new.keyword => {
                old.differences(new)
            }
            (Self::Extension(old), Self::Extension(new)) => old.differences(new),
            (Self::Function(old), Self::Function(new)) => old.differences(new),
            (Self::Initializer(old), Self::Initializer(new)) => old.differences(new),
            (Self::Property(old), Self::Property(new)) => old.differences(new),
            (Self::Subscript(old), Self::Subscript(new)) => old.differences(new),
            (Self::AssociatedType(old), Self::AssociatedType(new)) => old.differences(new),
            (Self::TypeAlias(old), Self::TypeAlias(new)) => old.differences(new),
            (Self::EnumCase(old), Self::EnumCase(new)) => old.differences(new),
            _ => Vec::new(),
        }
    }

    /// Nested declarations; empty for leaf kinds.
    #[must_use]
    pub fn members(&self) -> &[Declaration] {
        match self {
            Self::Root(root) => &root.members,
            Self::Type(decl) => &decl.members,
            Self::Extension(decl) => &decl.members,
            _ => &[],
        }
    }

    /// Returns the nominal type, if this is one.
    #[must_use]
    pub fn as_type(&self) -> Option<&TypeDecl> {
        match self {
            Self::Type(decl) => Some(decl),
            _ => None,
        }
    }

    /// Returns the extension, if this is one.
    #[must_use]
    pub fn as_extension(&self) -> Option<&Extension> {
        match self {
            Self::Extension(decl) => Some(decl),
            _ => None,
        }
    }
}
