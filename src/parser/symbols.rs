//! Program-wide symbol table
//!
//! There is a single scope: every variable is declared in the `var` section
//! and visible everywhere after `begin`.

use rustc_hash::FxHashMap;

use super::token::SourceLocation;

/// Declared variable names, each with the location of its declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    names: FxHashMap<String, SourceLocation>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration.
    ///
    /// Returns the location of the earlier declaration if `name` is already
    /// present; the table is left unchanged in that case.
    pub fn declare(&mut self, name: &str, location: SourceLocation) -> Result<(), SourceLocation> {
        if let Some(previous) = self.names.get(name) {
            return Err(*previous);
        }
        self.names.insert(name.to_string(), location);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Where `name` was declared.
    pub fn declared_at(&self, name: &str) -> Option<SourceLocation> {
        self.names.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
