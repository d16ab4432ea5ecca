//! Name interning for symbols and sorts
//!
//! Terms refer to their function/constant symbols and to non-Boolean sorts
//! through small `Copy` ids. The names themselves live here, so that
//! comparing and hashing term nodes never touches a `String`.
//!
//! Each namespace has its own ID type:
//! - `SymbolId` for constant and function symbols
//! - `SortId` for named (uninterpreted or theory) sorts

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// ID for an interned constant or function symbol
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub(crate) u32);

/// ID for an interned sort name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SortId(pub(crate) u32);

impl SymbolId {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl SortId {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// String arena for a single namespace
#[derive(Debug, Clone, Default)]
struct StringArena {
    /// Interned strings, indexed by ID
    strings: Vec<String>,
    /// Lookup table from string to ID
    lookup: HashMap<String, u32>,
}

impl StringArena {
    /// Intern a string, returning its ID (get-or-create)
    fn intern(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = self.strings.len() as u32;
        self.strings.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        id
    }

    fn resolve(&self, id: u32) -> Option<&str> {
        self.strings.get(id as usize).map(String::as_str)
    }

    fn get(&self, name: &str) -> Option<u32> {
        self.lookup.get(name).copied()
    }

    fn len(&self) -> usize {
        self.strings.len()
    }
}

/// Symbol and sort interner.
///
/// Owned by a [`TermBank`](super::TermBank); there is no global table.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    symbols: StringArena,
    sorts: StringArena,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    // === Symbols ===

    /// Intern a symbol name, returning its ID (get-or-create)
    pub fn intern_symbol(&mut self, name: &str) -> SymbolId {
        SymbolId(self.symbols.intern(name))
    }

    /// Resolve a symbol ID to its name ("?" for ids from another interner)
    pub fn resolve_symbol(&self, id: SymbolId) -> &str {
        self.symbols.resolve(id.0).unwrap_or("?")
    }

    /// Get the ID for an already-interned symbol
    pub fn get_symbol(&self, name: &str) -> Option<SymbolId> {
        self.symbols.get(name).map(SymbolId)
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    // === Sorts ===

    /// Intern a sort name, returning its ID (get-or-create)
    pub fn intern_sort(&mut self, name: &str) -> SortId {
        SortId(self.sorts.intern(name))
    }

    pub fn resolve_sort(&self, id: SortId) -> &str {
        self.sorts.resolve(id.0).unwrap_or("?")
    }

    pub fn get_sort(&self, name: &str) -> Option<SortId> {
        self.sorts.get(name).map(SortId)
    }

    pub fn sort_count(&self) -> usize {
        self.sorts.len()
    }
}
