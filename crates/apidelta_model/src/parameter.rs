//! Parameters of functions, initializers, subscripts and enum cases.

use std::collections::HashMap;
use std::fmt;

/// A single parameter.
///
/// Function-like parameters always carry a first name (`_` for an unlabeled
/// argument). Enum case associated values may be bare types.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Parameter {
    /// Attributes written before the labels.
    pub attributes: Vec<String>,
    /// The external label (or the only name).
    pub first_name: Option<String>,
    /// The internal name, when it differs from the label.
    pub second_name: Option<String>,
    /// The parameter type, including specifiers like `inout` or `@escaping`.
    pub type_annotation: String,
    /// The default value expression, without the `=`.
    pub default_value: Option<String>,
}

impl Parameter {
    /// Creates a labeled parameter.
    #[must_use]
    pub fn new(first_name: impl Into<String>, type_annotation: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            type_annotation: type_annotation.into(),
            ..Self::default()
        }
    }

    /// Creates an unlabeled enum case associated value.
    #[must_use]
    pub fn unlabeled(type_annotation: impl Into<String>) -> Self {
        Self {
            type_annotation: type_annotation.into(),
            ..Self::default()
        }
    }

    /// Sets the internal name.
    #[must_use]
    pub fn with_second_name(mut self, name: impl Into<String>) -> Self {
        self.second_name = Some(name.into());
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// The label used in signatures; `_` when there is none.
    #[must_use]
    pub fn label(&self) -> &str {
        self.first_name.as_deref().unwrap_or("_")
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for attribute in &self.attributes {
            write!(f, "{attribute} ")?;
        }
        match (&self.first_name, &self.second_name) {
            (Some(first), Some(second)) => write!(f, "{first} {second}: ")?,
            (Some(first), None) => write!(f, "{first}: ")?,
            (None, _) => {}
        }
        f.write_str(&self.type_annotation)?;
        if let Some(value) = &self.default_value {
            write!(f, " = {value}")?;
        }
        Ok(())
    }
}

/// Renders a parenthesized parameter list.
#[must_use]
pub fn render_list(parameters: &[Parameter]) -> String {
    let items: Vec<String> = parameters.iter().map(ToString::to_string).collect();
    format!("({})", items.join(", "))
}

/// Renders the label part of a signature, e.g. `a:_:b:`.
#[must_use]
pub fn label_signature(parameters: &[Parameter]) -> String {
    parameters.iter().map(|p| format!("{}:", p.label())).collect()
}

/// Describes the changes between two parameter lists.
///
/// Parameters are paired by label and occurrence (the second `_` pairs with the
/// second `_`). Paired parameters with a different rendering are reported as
/// changed; the rest as added or removed. If the paired parameters appear in a
/// different relative order, one more line reports the reordering.
#[must_use]
pub fn diff_parameters(old: &[Parameter], new: &[Parameter]) -> Vec<String> {
    if old == new {
        return Vec::new();
    }

    let old_keys = occurrence_keys(old);
    let new_keys = occurrence_keys(new);
    let new_by_key: HashMap<&(String, usize), &Parameter> = new_keys.iter().zip(new).collect();
    let old_by_key: HashMap<&(String, usize), &Parameter> = old_keys.iter().zip(old).collect();

    let mut lines = Vec::new();
    for (key, old_param) in old_keys.iter().zip(old) {
        match new_by_key.get(key) {
            Some(new_param) if *new_param != old_param => {
                lines.push(format!("Changed parameter `{old_param}` to `{new_param}`"));
            }
            Some(_) => {}
            None => lines.push(format!("Removed parameter `{old_param}`")),
        }
    }
    for (key, new_param) in new_keys.iter().zip(new) {
        if !old_by_key.contains_key(key) {
            lines.push(format!("Added parameter `{new_param}`"));
        }
    }

    let old_order = old_keys.iter().filter(|key| new_by_key.contains_key(key));
    let new_order = new_keys.iter().filter(|key| old_by_key.contains_key(key));
    if !old_order.eq(new_order) {
        lines.push(format!(
            "Reordered parameters from `{}` to `{}`",
            render_list(old),
            render_list(new)
        ));
    }
    lines
}

fn occurrence_keys(parameters: &[Parameter]) -> Vec<(String, usize)> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    parameters
        .iter()
        .map(|p| {
            let count = seen.entry(p.label()).or_insert(0);
            *count += 1;
            (p.label().to_string(), *count)
        })
        .collect()
}
