//! Declaration kinds.

use std::fmt;

use serde::Serialize;

/// The keyword that introduced a nominal type declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKeyword {
    /// `struct`
    Struct,
    /// `class`
    Class,
    /// `enum`
    Enum,
    /// `protocol`
    Protocol,
    /// `actor`
    Actor,
}

impl TypeKeyword {
    /// Returns the keyword as written in source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Class => "class",
            Self::Enum => "enum",
            Self::Protocol => "protocol",
            Self::Actor => "actor",
        }
    }

    /// Parses a type keyword.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "struct" => Some(Self::Struct),
            "class" => Some(Self::Class),
            "enum" => Some(Self::Enum),
            "protocol" => Some(Self::Protocol),
            "actor" => Some(Self::Actor),
            _ => None,
        }
    }
}

impl fmt::Display for TypeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The concrete kind of a declaration element.
///
/// Two elements are only ever compared with each other when their kinds are
/// equal. Nominal types are split by keyword, so a `struct` never matches a
/// `class` of the same name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// The module root.
    Root,
    /// A `struct` declaration.
    Struct,
    /// A `class` declaration.
    Class,
    /// An `enum` declaration.
    Enum,
    /// A `protocol` declaration.
    Protocol,
    /// An `actor` declaration.
    Actor,
    /// An `extension` declaration.
    Extension,
    /// A `func` declaration.
    Function,
    /// An `init` declaration.
    Initializer,
    /// A single `var`/`let` binding.
    Property,
    /// A `subscript` declaration.
    Subscript,
    /// An `associatedtype` declaration.
    AssociatedType,
    /// A `typealias` declaration.
    TypeAlias,
    /// A single enum `case`.
    EnumCase,
}

impl ElementKind {
    /// Every kind, in reporting order.
    pub const ALL: [Self; 14] = [
        Self::Root,
        Self::Struct,
        Self::Class,
        Self::Enum,
        Self::Protocol,
        Self::Actor,
        Self::Extension,
        Self::Function,
        Self::Initializer,
        Self::Property,
        Self::Subscript,
        Self::AssociatedType,
        Self::TypeAlias,
        Self::EnumCase,
    ];

    /// Singular human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Root => "module",
            Self::Struct => "struct",
            Self::Class => "class",
            Self::Enum => "enum",
            Self::Protocol => "protocol",
            Self::Actor => "actor",
            Self::Extension => "extension",
            Self::Function => "function",
            Self::Initializer => "initializer",
            Self::Property => "property",
            Self::Subscript => "subscript",
            Self::AssociatedType => "associated type",
            Self::TypeAlias => "type alias",
            Self::EnumCase => "enum case",
        }
    }

    /// Plural human-readable name.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Root => "modules",
            Self::Struct => "structs",
            Self::Class => "classes",
            Self::Enum => "enums",
            Self::Protocol => "protocols",
            Self::Actor => "actors",
            Self::Extension => "extensions",
            Self::Function => "functions",
            Self::Initializer => "initializers",
            Self::Property => "properties",
            Self::Subscript => "subscripts",
            Self::AssociatedType => "associated types",
            Self::TypeAlias => "type aliases",
            Self::EnumCase => "enum cases",
        }
    }

    /// Returns true for kinds that can be the target of an extension.
    #[must_use]
    pub const fn is_extendable(self) -> bool {
        matches!(
            self,
            Self::Struct | Self::Class | Self::Enum | Self::Protocol | Self::Actor
        )
    }
}

impl From<TypeKeyword> for ElementKind {
    fn from(keyword: TypeKeyword) -> Self {
        match keyword {
            TypeKeyword::Struct => Self::Struct,
            TypeKeyword::Class => Self::Class,
            TypeKeyword::Enum => Self::Enum,
            TypeKeyword::Protocol => Self::Protocol,
            TypeKeyword::Actor => Self::Actor,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
