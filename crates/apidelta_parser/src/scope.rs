//! Scope stack used while building the declaration tree.
//!
//! Each opened declaration body pushes a fresh collection; closing the body
//! pops it and hands the collected members to the enclosing declaration. The
//! bottom collection belongs to the module root and is only released by
//! [`ScopeStack::finish`].

use apidelta_foundation::{Error, Result};
use apidelta_model::Declaration;

/// Stack of member collections.
#[derive(Debug)]
pub struct ScopeStack {
    scopes: Vec<Vec<Declaration>>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// Creates a stack holding only the module scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scopes: vec![Vec::new()],
        }
    }

    /// Opens a new scope.
    pub fn enter(&mut self) {
        self.scopes.push(Vec::new());
    }

    /// Appends elements to the innermost scope.
    ///
    /// # Errors
    /// Returns an unbalanced-scope error if no scope is open.
    pub fn collect(&mut self, elements: impl IntoIterator<Item = Declaration>) -> Result<()> {
        let top = self
            .scopes
            .last_mut()
            .ok_or_else(|| Error::unbalanced_scope("collect with no open scope"))?;
        top.extend(elements);
        Ok(())
    }

    /// Closes the innermost scope and returns what it collected.
    ///
    /// # Errors
    /// Returns an unbalanced-scope error when only the module scope is left.
    pub fn exit(&mut self) -> Result<Vec<Declaration>> {
        if self.scopes.len() <= 1 {
            return Err(Error::unbalanced_scope("exit without matching enter"));
        }
        self.scopes
            .pop()
            .ok_or_else(|| Error::unbalanced_scope("exit without matching enter"))
    }

    /// Number of open scopes, the module scope included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Drops scopes above `depth`, discarding anything they collected.
    ///
    /// Used to roll back a declaration that failed to parse.
    pub fn truncate(&mut self, depth: usize) {
        self.scopes.truncate(depth.max(1));
    }

    /// Releases the module scope.
    ///
    /// # Errors
    /// Returns an unbalanced-scope error if any inner scope is still open.
    pub fn finish(mut self) -> Result<Vec<Declaration>> {
        if self.scopes.len() != 1 {
            return Err(Error::unbalanced_scope(format!(
                "{} scopes still open at end of input",
                self.scopes.len() - 1
            )));
        }
        self.scopes
            .pop()
            .ok_or_else(|| Error::unbalanced_scope("module scope missing"))
    }
}
