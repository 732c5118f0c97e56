//! Declaration element model for apidelta.
//!
//! This crate provides:
//! - [`Declaration`] - One node of a parsed interface, as a closed sum over
//!   every supported declaration kind
//! - [`ElementKind`] - The concrete kind of a declaration, used for matching
//!   and metrics
//! - [`Interface`] - A frozen, immutable tree for one module
//! - [`TreeIndex`] - Depth-first flattening with non-owning parent links and
//!   path computation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod declaration;
pub mod kind;
pub mod parameter;
mod render;
pub mod tree;

pub use declaration::{
    AssociatedType, Declaration, EnumCase, Extension, Function, Initializer, Property, Root,
    Subscript, TypeAlias, TypeDecl,
};
pub use kind::{ElementKind, TypeKeyword};
pub use parameter::Parameter;
pub use tree::{Interface, Node, TreeIndex, strip_module_prefix};
