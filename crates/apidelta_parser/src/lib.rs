//! Lexer, declaration parser, and extension merger for interface text.
//!
//! This crate provides:
//! - `Lexer` - Tokenization of interface source
//! - `Parser` - Building the declaration tree through a scope stack
//! - `merge_extensions` - Folding extensions into the types they extend
//!
//! [`parse_interface`] runs all three and freezes the result.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexer;
pub mod merge;
pub mod parser;
pub mod scope;
pub mod span;
pub mod token;

pub use lexer::Lexer;
pub use merge::merge_extensions;
pub use parser::Parser;
pub use scope::ScopeStack;
pub use span::Span;
pub use token::{Token, TokenKind};

use apidelta_foundation::Result;
use apidelta_model::{Interface, Root};
use tracing::debug;

/// Parses interface text into an unmerged module root.
///
/// # Errors
/// Returns an error only on scope imbalance; malformed declarations are
/// skipped with a warning.
pub fn parse(source: &str, module_name: &str) -> Result<Root> {
    let mut parser = Parser::new(source);
    let root = parser.parse_module(module_name)?;
    debug!(
        module = module_name,
        declarations = root.members.len(),
        skipped = parser.skipped(),
        "parsed interface"
    );
    Ok(root)
}

/// Parses interface text, merges extensions, and freezes the tree.
///
/// # Errors
/// See [`parse`].
pub fn parse_interface(source: &str, module_name: &str) -> Result<Interface> {
    parse_interface_with(source, module_name, true)
}

/// Like [`parse_interface`], with extension merging optional.
///
/// # Errors
/// See [`parse`].
pub fn parse_interface_with(
    source: &str,
    module_name: &str,
    merge: bool,
) -> Result<Interface> {
    let root = parse(source, module_name)?;
    let root = if merge { merge_extensions(root) } else { root };
    Ok(Interface::freeze(root))
}
