//! Function-like declarations: `func`, `init` and `subscript`.

use apidelta_foundation::FieldDiff;

use crate::parameter::{Parameter, diff_parameters, label_signature, render_list};
use crate::render::DescriptionBuilder;

// =============================================================================
// Function
// =============================================================================

/// A `func` declaration.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Function {
    /// Attributes such as `@discardableResult`.
    pub attributes: Vec<String>,
    /// Modifiers such as `public static`.
    pub modifiers: Vec<String>,
    /// The function name; operators keep their symbol.
    pub name: String,
    /// `<T: Equatable>`.
    pub generic_parameter_clause: Option<String>,
    /// The parameter list.
    pub parameters: Vec<Parameter>,
    /// `async`, `throws`, `rethrows` and friends, space separated.
    pub effect_specifiers: Option<String>,
    /// The type after `->`.
    pub return_type: Option<String>,
    /// `where T: Hashable`.
    pub generic_where_clause: Option<String>,
}

impl Function {
    /// Creates a function with the given name and parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.into(),
            parameters,
            ..Self::default()
        }
    }

    /// Sets the return type.
    #[must_use]
    pub fn returning(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    /// `name(a:_:)`.
    #[must_use]
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, label_signature(&self.parameters))
    }

    pub(super) fn description(&self) -> String {
        let head = format!(
            "{}{}{}",
            self.name,
            self.generic_parameter_clause.as_deref().unwrap_or_default(),
            render_list(&self.parameters)
        );
        DescriptionBuilder::new(&self.attributes, &self.modifiers)
            .part("func")
            .part(head)
            .optional(self.effect_specifiers.as_deref())
            .optional(self.return_type.as_deref().map(|ty| format!("-> {ty}")).as_deref())
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
            .lines(diff_parameters(&self.parameters, &to.parameters))
            .value(
                "effect specifiers",
                self.effect_specifiers.as_deref(),
                to.effect_specifiers.as_deref(),
            )
            .value(
                "return type",
                self.return_type.as_deref(),
                to.return_type.as_deref(),
            )
            .value(
                "generic where clause",
                self.generic_where_clause.as_deref(),
                to.generic_where_clause.as_deref(),
            )
            .finish()
    }
}

// =============================================================================
// Initializer
// =============================================================================

/// An `init` declaration.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Initializer {
    /// Attributes such as `@available(...)`.
    pub attributes: Vec<String>,
    /// Modifiers such as `public convenience`.
    pub modifiers: Vec<String>,
    /// `?` or `!` for failable initializers.
    pub optional_mark: Option<String>,
    /// `<T>`.
    pub generic_parameter_clause: Option<String>,
    /// The parameter list.
    pub parameters: Vec<Parameter>,
    /// `async`, `throws` and friends, space separated.
    pub effect_specifiers: Option<String>,
    /// `where T: Decodable`.
    pub generic_where_clause: Option<String>,
}

impl Initializer {
    /// Creates an initializer with the given parameters.
    #[must_use]
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self {
            parameters,
            ..Self::default()
        }
    }

    /// `init(a:b:)`.
    #[must_use]
    pub fn signature(&self) -> String {
        format!("init({})", label_signature(&self.parameters))
    }

    pub(super) fn description(&self) -> String {
        let head = format!(
            "init{}{}{}",
            self.optional_mark.as_deref().unwrap_or_default(),
            self.generic_parameter_clause.as_deref().unwrap_or_default(),
            render_list(&self.parameters)
        );
        DescriptionBuilder::new(&self.attributes, &self.modifiers)
            .part(head)
            .optional(self.effect_specifiers.as_deref())
            .optional(self.generic_where_clause.as_deref())
            .build()
    }

    pub(super) fn differences(&self, to: &Self) -> Vec<String> {
        FieldDiff::new()
            .set("attribute", &self.attributes, &to.attributes)
            .set("modifier", &self.modifiers, &to.modifiers)
            .value(
                "failable marker",
                self.optional_mark.as_deref(),
                to.optional_mark.as_deref(),
            )
            .value(
                "generic parameter clause",
                self.generic_parameter_clause.as_deref(),
                to.generic_parameter_clause.as_deref(),
            )
            .lines(diff_parameters(&self.parameters, &to.parameters))
            .value(
                "effect specifiers",
                self.effect_specifiers.as_deref(),
                to.effect_specifiers.as_deref(),
            )
            .value(
                "generic where clause",
                self.generic_where_clause.as_deref(),
                to.generic_where_clause.as_deref(),
            )
            .finish()
    }
}

// =============================================================================
// Subscript
// =============================================================================

/// A `subscript` declaration.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Subscript {
    /// Attributes such as `@inlinable`.
    pub attributes: Vec<String>,
    /// Modifiers such as `public static`.
    pub modifiers: Vec<String>,
    /// `<T>`.
    pub generic_parameter_clause: Option<String>,
    /// The parameter list.
    pub parameters: Vec<Parameter>,
    /// The element type after `->`.
    pub return_type: String,
    /// `where T: Hashable`.
    pub generic_where_clause: Option<String>,
    /// Normalized accessor block, e.g. `{ get set }`.
    pub accessors: Option<String>,
}

impl Subscript {
    /// Creates a subscript with the given parameters and element type.
    #[must_use]
    pub fn new(parameters: Vec<Parameter>, return_type: impl Into<String>) -> Self {
        Self {
            parameters,
            return_type: return_type.into(),
            ..Self::default()
        }
    }

    /// `subscript(_:)`.
    #[must_use]
    pub fn signature(&self) -> String {
        format!("subscript({})", label_signature(&self.parameters))
    }

    pub(super) fn description(&self) -> String {
        let head = format!(
            "subscript{}{}",
            self.generic_parameter_clause.as_deref().unwrap_or_default(),
            render_list(&self.parameters)
        );
        DescriptionBuilder::new(&self.attributes, &self.modifiers)
            .part(head)
            .part(format!("-> {}", self.return_type))
            .optional(self.generic_where_clause.as_deref())
            .optional(self.accessors.as_deref())
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
            .lines(diff_parameters(&self.parameters, &to.parameters))
            .required("return type", &self.return_type, &to.return_type)
            .value(
                "generic where clause",
                self.generic_where_clause.as_deref(),
                to.generic_where_clause.as_deref(),
            )
            .value(
                "accessors",
                self.accessors.as_deref(),
                to.accessors.as_deref(),
            )
            .finish()
    }
}
