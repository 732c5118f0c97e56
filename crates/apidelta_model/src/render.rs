//! Canonical one-declaration text rendering.

/// Builds a declaration description.
///
/// Attributes are emitted one per line; every other part is joined by a single
/// space. Empty parts are dropped.
#[derive(Debug, Default)]
pub(crate) struct DescriptionBuilder {
    attributes: Vec<String>,
    parts: Vec<String>,
}

impl DescriptionBuilder {
    pub(crate) fn new(attributes: &[String], modifiers: &[String]) -> Self {
        Self {
            attributes: attributes.to_vec(),
            parts: modifiers.to_vec(),
        }
    }

    pub(crate) fn part(mut self, part: impl Into<String>) -> Self {
        let part = part.into();
        if !part.is_empty() {
            self.parts.push(part);
        }
        self
    }

    pub(crate) fn optional(self, part: Option<&str>) -> Self {
        match part {
            Some(part) => self.part(part),
            None => self,
        }
    }

    pub(crate) fn build(self) -> String {
        let mut out = String::new();
        for attribute in &self.attributes {
            out.push_str(attribute);
            out.push('\n');
        }
        out.push_str(&self.parts.join(" "));
        out
    }
}

/// Renders `name<T>: A, B` style headers.
pub(crate) fn with_inheritance(head: String, inheritance: Option<&[String]>) -> String {
    match inheritance {
        Some(types) if !types.is_empty() => format!("{head}: {}", types.join(", ")),
        _ => head,
    }
}
