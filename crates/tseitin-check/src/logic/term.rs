//! Hash-consed Boolean terms
//!
//! A [`TermBank`] owns every node. Building a node that already exists
//! returns the existing [`TermId`], so two syntactically identical terms
//! always share an id and structural equality is id equality.

use super::interner::{Interner, SortId, SymbolId};
use crate::error::TermError;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a node in a [`TermBank`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TermId(pub(crate) u32);

impl TermId {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Sort of a term
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sort {
    Bool,
    Named(SortId),
}

/// A constant or function symbol together with its result sort
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    pub id: SymbolId,
    pub sort: Sort,
}

/// A term node. Children are ids into the same bank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermNode {
    True,
    False,
    Const(Symbol),
    App(Symbol, Vec<TermId>),
    Not([TermId; 1]),
    And(Vec<TermId>),
    Or(Vec<TermId>),
    Eq([TermId; 2]),
    Ite([TermId; 3]),
    Implies([TermId; 2]),
    Xor(Vec<TermId>),
}

impl TermNode {
    /// Immediate children, in order
    pub fn children(&self) -> &[TermId] {
        match self {
            TermNode::True | TermNode::False | TermNode::Const(_) => &[],
            TermNode::App(_, args)
            | TermNode::And(args)
            | TermNode::Or(args)
            | TermNode::Xor(args) => args,
            TermNode::Not(arg) => arg,
            TermNode::Eq(args) | TermNode::Implies(args) => args,
            TermNode::Ite(args) => args,
        }
    }

    pub fn is_not(&self) -> bool {
        matches!(self, TermNode::Not(_))
    }

    /// Operator name as written in a justification log
    pub fn operator(&self) -> &'static str {
        match self {
            TermNode::True => "true",
            TermNode::False => "false",
            TermNode::Const(_) => "const",
            TermNode::App(..) => "app",
            TermNode::Not(_) => "not",
            TermNode::And(_) => "and",
            TermNode::Or(_) => "or",
            TermNode::Eq(_) => "=",
            TermNode::Ite(_) => "ite",
            TermNode::Implies(_) => "=>",
            TermNode::Xor(_) => "xor",
        }
    }
}

/// Per-node data computed once at construction
#[derive(Debug, Clone, Copy)]
struct NodeInfo {
    sort: Sort,
    depth: u32,
}

/// Shared, append-only store of hash-consed terms.
///
/// Nodes are never mutated or removed; the checker only reads from a bank.
#[derive(Debug, Clone, Default)]
pub struct TermBank {
    interner: Interner,
    /// Hash-consing table; the index of a node is its id
    nodes: IndexSet<TermNode>,
    info: Vec<NodeInfo>,
}

impl TermBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn interner_mut(&mut self) -> &mut Interner {
        &mut self.interner
    }

    /// Number of distinct nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn contains(&self, id: TermId) -> bool {
        (id.0 as usize) < self.nodes.len()
    }

    pub fn node(&self, id: TermId) -> Option<&TermNode> {
        self.nodes.get_index(id.0 as usize)
    }

    pub fn sort(&self, id: TermId) -> Option<Sort> {
        self.info.get(id.0 as usize).map(|i| i.sort)
    }

    /// Structural depth; `None` for ids outside this bank
    pub fn depth(&self, id: TermId) -> Option<u32> {
        self.info.get(id.0 as usize).map(|i| i.depth)
    }

    pub fn is_bool(&self, id: TermId) -> bool {
        self.sort(id) == Some(Sort::Bool)
    }

    pub fn is_not(&self, id: TermId) -> bool {
        self.node(id).is_some_and(TermNode::is_not)
    }

    pub fn children(&self, id: TermId) -> &[TermId] {
        self.node(id).map(TermNode::children).unwrap_or(&[])
    }

    /// Look up an existing node without creating it
    pub fn find(&self, node: &TermNode) -> Option<TermId> {
        self.nodes.get_index_of(node).map(|i| TermId(i as u32))
    }

    // =========================================================================
    // Construction
    // =========================================================================

    fn intern_node(&mut self, node: TermNode, sort: Sort) -> TermId {
        if let Some(id) = self.find(&node) {
            return id;
        }
        let depth = 1 + node
            .children()
            .iter()
            .filter_map(|&c| self.depth(c))
            .max()
            .unwrap_or(0);
        let (index, _) = self.nodes.insert_full(node);
        self.info.push(NodeInfo { sort, depth });
        TermId(index as u32)
    }

    fn sort_of(&self, id: TermId) -> Result<Sort, TermError> {
        self.sort(id).ok_or(TermError::UnknownTerm(id.0))
    }

    /// Printable sort name
    pub fn sort_name(&self, sort: Sort) -> String {
        match sort {
            Sort::Bool => "Bool".to_string(),
            Sort::Named(s) => self.interner.resolve_sort(s).to_string(),
        }
    }

    fn expect_sort(&self, context: &'static str, id: TermId, expected: Sort) -> Result<(), TermError> {
        let found = self.sort_of(id)?;
        if found != expected {
            return Err(TermError::SortMismatch {
                context,
                expected: self.sort_name(expected),
                found: self.sort_name(found),
            });
        }
        Ok(())
    }

    fn expect_bool_args(&self, context: &'static str, args: &[TermId]) -> Result<(), TermError> {
        args.iter().try_for_each(|&a| self.expect_sort(context, a, Sort::Bool))
    }

    /// Named sort (interned on first use). `"Bool"` maps to [`Sort::Bool`].
    pub fn mk_sort(&mut self, name: &str) -> Sort {
        if name == "Bool" {
            Sort::Bool
        } else {
            Sort::Named(self.interner.intern_sort(name))
        }
    }

    pub fn mk_true(&mut self) -> TermId {
        self.intern_node(TermNode::True, Sort::Bool)
    }

    pub fn mk_false(&mut self) -> TermId {
        self.intern_node(TermNode::False, Sort::Bool)
    }

    pub fn mk_const(&mut self, name: &str, sort: Sort) -> TermId {
        let id = self.interner.intern_symbol(name);
        self.intern_node(TermNode::Const(Symbol { id, sort }), sort)
    }

    /// Boolean constant, the usual shape of an atom
    pub fn mk_bool_const(&mut self, name: &str) -> TermId {
        self.mk_const(name, Sort::Bool)
    }

    /// Uninterpreted function application. Argument sorts are the caller's
    /// concern; only membership in this bank is checked.
    pub fn mk_app(&mut self, name: &str, args: Vec<TermId>, sort: Sort) -> Result<TermId, TermError> {
        if let Some(&bad) = args.iter().find(|&&a| !self.contains(a)) {
            return Err(TermError::UnknownTerm(bad.0));
        }
        let id = self.interner.intern_symbol(name);
        Ok(self.intern_node(TermNode::App(Symbol { id, sort }, args), sort))
    }

    pub fn mk_not(&mut self, arg: TermId) -> Result<TermId, TermError> {
        self.expect_sort("not", arg, Sort::Bool)?;
        Ok(self.intern_node(TermNode::Not([arg]), Sort::Bool))
    }

    pub fn mk_and(&mut self, args: Vec<TermId>) -> Result<TermId, TermError> {
        self.expect_bool_args("and", &args)?;
        Ok(self.intern_node(TermNode::And(args), Sort::Bool))
    }

    pub fn mk_or(&mut self, args: Vec<TermId>) -> Result<TermId, TermError> {
        self.expect_bool_args("or", &args)?;
        Ok(self.intern_node(TermNode::Or(args), Sort::Bool))
    }

    pub fn mk_xor(&mut self, args: Vec<TermId>) -> Result<TermId, TermError> {
        self.expect_bool_args("xor", &args)?;
        Ok(self.intern_node(TermNode::Xor(args), Sort::Bool))
    }

    pub fn mk_implies(&mut self, lhs: TermId, rhs: TermId) -> Result<TermId, TermError> {
        self.expect_bool_args("=>", &[lhs, rhs])?;
        Ok(self.intern_node(TermNode::Implies([lhs, rhs]), Sort::Bool))
    }

    /// Equality between two terms of the same sort
    pub fn mk_eq(&mut self, lhs: TermId, rhs: TermId) -> Result<TermId, TermError> {
        let sort = self.sort_of(lhs)?;
        self.expect_sort("=", rhs, sort)?;
        Ok(self.intern_node(TermNode::Eq([lhs, rhs]), Sort::Bool))
    }

    /// If-then-else; the node takes the sort of its branches
    pub fn mk_ite(&mut self, cond: TermId, then: TermId, els: TermId) -> Result<TermId, TermError> {
        self.expect_sort("ite", cond, Sort::Bool)?;
        let sort = self.sort_of(then)?;
        self.expect_sort("ite", els, sort)?;
        Ok(self.intern_node(TermNode::Ite([cond, then, els]), sort))
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// Format a term in SMT-LIB style
    pub fn display(&self, id: TermId) -> TermDisplay<'_> {
        TermDisplay { bank: self, id }
    }
}

/// Display wrapper resolving names through the owning bank
pub struct TermDisplay<'a> {
    bank: &'a TermBank,
    id: TermId,
}

impl<'a> fmt::Display for TermDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(node) = self.bank.node(self.id) else {
            return write!(f, "{}", self.id);
        };
        let interner = self.bank.interner();
        match node {
            TermNode::True | TermNode::False => write!(f, "{}", node.operator()),
            TermNode::Const(sym) => write!(f, "{}", interner.resolve_symbol(sym.id)),
            TermNode::App(sym, args) => {
                write!(f, "({}", interner.resolve_symbol(sym.id))?;
                for &arg in args {
                    write!(f, " {}", self.bank.display(arg))?;
                }
                write!(f, ")")
            }
            _ => {
                write!(f, "({}", node.operator())?;
                for &arg in node.children() {
                    write!(f, " {}", self.bank.display(arg))?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_consing_shares_ids() {
        let mut bank = TermBank::new();
        let a = bank.mk_bool_const("a");
        let b = bank.mk_bool_const("b");
        let ab1 = bank.mk_and(vec![a, b]).unwrap();
        let ab2 = bank.mk_and(vec![a, b]).unwrap();
        let ba = bank.mk_and(vec![b, a]).unwrap();
        assert_eq!(ab1, ab2);
        assert_ne!(ab1, ba);
        assert_eq!(bank.mk_bool_const("a"), a);
        assert_eq!(bank.len(), 4);
    }

    #[test]
    fn test_depth() {
        let mut bank = TermBank::new();
        let a = bank.mk_bool_const("a");
        let b = bank.mk_bool_const("b");
        let not_a = bank.mk_not(a).unwrap();
        let and = bank.mk_and(vec![not_a, b]).unwrap();
        let not_and = bank.mk_not(and).unwrap();
        assert_eq!(bank.depth(a), Some(1));
        assert_eq!(bank.depth(not_a), Some(2));
        assert_eq!(bank.depth(and), Some(3));
        assert_eq!(bank.depth(not_and), Some(4));
        assert_eq!(bank.depth(TermId(99)), None);
    }

    #[test]
    fn test_sorts() {
        let mut bank = TermBank::new();
        let u = bank.mk_sort("U");
        let x = bank.mk_const("x", u);
        let y = bank.mk_const("y", u);
        let c = bank.mk_bool_const("c");
        let ite = bank.mk_ite(c, x, y).unwrap();
        assert_eq!(bank.sort(ite), Some(u));
        assert!(!bank.is_bool(ite));
        let eq = bank.mk_eq(ite, y).unwrap();
        assert!(bank.is_bool(eq));
    }

    #[test]
    fn test_sort_mismatch() {
        let mut bank = TermBank::new();
        let u = bank.mk_sort("U");
        let x = bank.mk_const("x", u);
        let c = bank.mk_bool_const("c");
        assert!(matches!(bank.mk_not(x), Err(TermError::SortMismatch { context: "not", .. })));
        assert!(matches!(bank.mk_eq(x, c), Err(TermError::SortMismatch { .. })));
        assert!(matches!(bank.mk_ite(x, c, c), Err(TermError::SortMismatch { .. })));
        assert_eq!(bank.mk_and(vec![c, TermId(42)]), Err(TermError::UnknownTerm(42)));
    }

    #[test]
    fn test_children() {
        let mut bank = TermBank::new();
        let a = bank.mk_bool_const("a");
        let b = bank.mk_bool_const("b");
        let c = bank.mk_bool_const("c");
        let ite = bank.mk_ite(a, b, c).unwrap();
        assert_eq!(bank.children(ite), &[a, b, c]);
        let not_a = bank.mk_not(a).unwrap();
        assert_eq!(bank.children(not_a), &[a]);
        assert!(bank.children(a).is_empty());
        assert!(bank.is_not(not_a));
    }

    #[test]
    fn test_display() {
        let mut bank = TermBank::new();
        let u = bank.mk_sort("U");
        let x = bank.mk_const("x", u);
        let p = bank.mk_app("p", vec![x], Sort::Bool).unwrap();
        let q = bank.mk_bool_const("q");
        let not_q = bank.mk_not(q).unwrap();
        let imp = bank.mk_implies(p, not_q).unwrap();
        assert_eq!(bank.display(imp).to_string(), "(=> (p x) (not q))");
        let t = bank.mk_true();
        assert_eq!(bank.display(t).to_string(), "true");
    }
}
