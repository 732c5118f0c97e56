//! Property bindings.

use apidelta_foundation::FieldDiff;

use crate::render::DescriptionBuilder;

/// A single `var` or `let` binding.
///
/// `public var a: Int, b: Int` produces two properties sharing attributes and
/// modifiers.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Property {
    /// Attributes such as `@available(...)`.
    pub attributes: Vec<String>,
    /// Modifiers such as `public static`.
    pub modifiers: Vec<String>,
    /// `var` or `let`.
    pub binding_kind: String,
    /// The bound name (or pattern).
    pub name: String,
    /// The declared type.
    pub type_annotation: Option<String>,
    /// The initial value expression, without the `=`.
    pub initializer_value: Option<String>,
    /// Normalized accessor block, e.g. `{ get set }`.
    pub accessors: Option<String>,
}

impl Property {
    /// Creates a `var` binding with a type annotation.
    #[must_use]
    pub fn var(name: impl Into<String>, type_annotation: impl Into<String>) -> Self {
        Self {
            binding_kind: "var".to_string(),
            name: name.into(),
            type_annotation: Some(type_annotation.into()),
            ..Self::default()
        }
    }

    /// Creates a `let` binding with a type annotation.
    #[must_use]
    pub fn constant(name: impl Into<String>, type_annotation: impl Into<String>) -> Self {
        Self {
            binding_kind: "let".to_string(),
            ..Self::var(name, type_annotation)
        }
    }

    pub(super) fn description(&self) -> String {
        let head = match &self.type_annotation {
            Some(ty) => format!("{}: {ty}", self.name),
            None => self.name.clone(),
        };
        DescriptionBuilder::new(&self.attributes, &self.modifiers)
            .part(self.binding_kind.as_str())
            .part(head)
            .optional(
                self.initializer_value
                    .as_deref()
                    .map(|value| format!("= {value}"))
                    .as_deref(),
            )
            .optional(self.accessors.as_deref())
            .build()
    }

    pub(super) fn differences(&self, to: &Self) -> Vec<String> {
        FieldDiff::new()
            .set("attribute", &self.attributes, &to.attributes)
            .set("modifier", &self.modifiers, &to.modifiers)
            .required("binding", &self.binding_kind, &to.binding_kind)
            .value(
                "type",
                self.type_annotation.as_deref(),
                to.type_annotation.as_deref(),
            )
            .value(
                "default value",
                self.initializer_value.as_deref(),
                to.initializer_value.as_deref(),
            )
            .value(
                "accessors",
                self.accessors.as_deref(),
                to.accessors.as_deref(),
            )
            .finish()
    }
}
