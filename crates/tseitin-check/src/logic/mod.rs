//! Boolean term representation
//!
//! Terms are hash-consed in a [`TermBank`]: the bank provides the queries the
//! checker relies on (connective kind, children, Boolean sort, structural
//! depth, structural equality by id).

pub mod interner;
pub mod term;

pub use interner::{Interner, SortId, SymbolId};
pub use term::{Sort, Symbol, TermBank, TermDisplay, TermId, TermNode};
