//! Enum cases.

use apidelta_foundation::FieldDiff;

use crate::parameter::{Parameter, diff_parameters, render_list};
use crate::render::DescriptionBuilder;

/// A single enum `case`.
///
/// `case a, b(Int)` produces two elements sharing attributes and modifiers.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct EnumCase {
    /// Attributes.
    pub attributes: Vec<String>,
    /// Modifiers such as `indirect`.
    pub modifiers: Vec<String>,
    /// The case name.
    pub name: String,
    /// Associated values, if the case has a parameter clause.
    pub parameters: Option<Vec<Parameter>>,
    /// The raw value after `=`.
    pub raw_value: Option<String>,
}

impl EnumCase {
    /// Creates a plain case.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the associated values.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub(super) fn description(&self) -> String {
        let head = format!(
            "{}{}",
            self.name,
            self.parameters
                .as_deref()
                .map(render_list)
                .unwrap_or_default()
        );
        DescriptionBuilder::new(&self.attributes, &self.modifiers)
            .part("case")
            .part(head)
            .optional(
                self.raw_value
                    .as_deref()
                    .map(|value| format!("= {value}"))
                    .as_deref(),
            )
            .build()
    }

    pub(super) fn differences(&self, to: &Self) -> Vec<String> {
        let associated = match (&self.parameters, &to.parameters) {
            (Some(old), Some(new)) => diff_parameters(old, new),
            (Some(old), None) => vec![format!("Removed associated values `{}`", render_list(old))],
            (None, Some(new)) => vec![format!("Added associated values `{}`", render_list(new))],
            (None, None) => Vec::new(),
        };
        FieldDiff::new()
            .set("attribute", &self.attributes, &to.attributes)
            .set("modifier", &self.modifiers, &to.modifiers)
            .lines(associated)
            .value(
                "raw value",
                self.raw_value.as_deref(),
                to.raw_value.as_deref(),
            )
            .finish()
    }
}
