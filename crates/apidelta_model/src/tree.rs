//! Frozen interface trees and parent-linked indexes.
//!
//! Ownership is strictly top-down: a [`Declaration`] owns its members. Parent
//! links live in a separate [`TreeIndex`] built in one depth-first pass over a
//! frozen [`Interface`]; they are plain indexes and never own anything.

use crate::declaration::{Declaration, Root};

// =============================================================================
// Interface
// =============================================================================

/// A normalized, immutable declaration tree for one module.
#[derive(Clone, Debug, PartialEq)]
pub struct Interface {
    root: Declaration,
}

impl Interface {
    /// Freezes a module root. No mutation is possible afterwards.
    #[must_use]
    pub fn freeze(root: Root) -> Self {
        Self {
            root: Declaration::Root(root),
        }
    }

    /// The module name.
    #[must_use]
    pub fn module_name(&self) -> &str {
        self.root.name()
    }

    /// The root element.
    #[must_use]
    pub fn root(&self) -> &Declaration {
        &self.root
    }

    /// Top-level declarations.
    #[must_use]
    pub fn members(&self) -> &[Declaration] {
        self.root.members()
    }

    /// Builds the parent-linked index of this tree.
    #[must_use]
    pub fn index(&self) -> TreeIndex<'_> {
        TreeIndex::build(self)
    }
}

// =============================================================================
// TreeIndex
// =============================================================================

/// One element of a flattened tree.
#[derive(Clone, Copy, Debug)]
pub struct Node<'a> {
    /// The element.
    pub element: &'a Declaration,
    /// Index of the enclosing element; `None` only for the root.
    pub parent: Option<usize>,
}

/// Depth-first flattening of an [`Interface`] with parent links.
///
/// Index 0 is always the root.
#[derive(Debug)]
pub struct TreeIndex<'a> {
    module_name: &'a str,
    nodes: Vec<Node<'a>>,
}

impl<'a> TreeIndex<'a> {
    /// Flattens the interface in depth-first pre-order.
    #[must_use]
    pub fn build(interface: &'a Interface) -> Self {
        let mut nodes = Vec::new();
        let mut stack: Vec<(&'a Declaration, Option<usize>)> = vec![(interface.root(), None)];

        while let Some((element, parent)) = stack.pop() {
            let id = nodes.len();
            nodes.push(Node { element, parent });
            for member in element.members().iter().rev() {
                stack.push((member, Some(id)));
            }
        }

        Self {
            module_name: interface.module_name(),
            nodes,
        }
    }

    /// The module name used for path stripping.
    #[must_use]
    pub fn module_name(&self) -> &'a str {
        self.module_name
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the index holds nothing (never the case once built).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node with the given index.
    ///
    /// # Panics
    /// Panics if `id` is out of range.
    #[must_use]
    pub fn node(&self, id: usize) -> Node<'a> {
        self.nodes[id]
    }

    /// Every node except the root, in depth-first order.
    pub fn descendants(&self) -> impl Iterator<Item = (usize, Node<'a>)> + '_ {
        self.nodes.iter().copied().enumerate().skip(1)
    }

    /// The element enclosing `id`.
    #[must_use]
    pub fn parent(&self, id: usize) -> Option<&'a Declaration> {
        self.nodes[id].parent.map(|p| self.nodes[p].element)
    }

    /// The module-stripped dotted path of the element's ancestors.
    ///
    /// Extensions use their own extended type name instead, so that they stay
    /// grouped under the type they target.
    #[must_use]
    pub fn path(&self, id: usize) -> String {
        let node = self.nodes[id];
        if let Declaration::Extension(extension) = node.element {
            return strip_module_prefix([extension.extended_type_name.as_str()], self.module_name);
        }

        let mut components = Vec::new();
        let mut parent = node.parent;
        while let Some(p) = parent {
            components.push(self.nodes[p].element.path_component_name());
            parent = self.nodes[p].parent;
        }
        components.reverse();
        strip_module_prefix(components, self.module_name)
    }
}

/// Joins dotted components and strips a leading run equal to the module name.
///
/// Only the leading run is removed; a nested type that shares the module's
/// name further down the path is kept.
#[must_use]
pub fn strip_module_prefix<'s>(
    components: impl IntoIterator<Item = &'s str>,
    module_name: &str,
) -> String {
    let segments: Vec<&str> = components
        .into_iter()
        .flat_map(|component| component.split('.'))
        .filter(|segment| !segment.is_empty())
        .collect();
    let kept: Vec<&str> = segments
        .iter()
        .copied()
        .skip_while(|segment| *segment == module_name)
        .collect();
    kept.join(".")
}
