//! Assumption oracle.
//!
//! Records which terms occur in the clause under check, and which terms
//! occur there complemented. One oracle is built per rule evaluation from
//! the full clause and dropped when the rule returns, so nothing survives
//! between checks.

use crate::logic::{TermBank, TermId, TermNode};
use std::collections::HashSet;

/// Clause-local marks over terms
pub(crate) struct AssumptionOracle<'a> {
    bank: &'a TermBank,
    /// Literals of the clause, taken verbatim
    marked: HashSet<TermId>,
    /// Atoms whose negation is a literal of the clause
    complemented: HashSet<TermId>,
}

impl<'a> AssumptionOracle<'a> {
    fn new(bank: &'a TermBank, capacity: usize) -> Self {
        AssumptionOracle {
            bank,
            marked: HashSet::with_capacity(capacity),
            complemented: HashSet::with_capacity(capacity),
        }
    }

    /// Oracle for membership rules: every literal is recorded as-is
    pub fn from_literals(bank: &'a TermBank, clause: &[TermId]) -> Self {
        let mut oracle = Self::new(bank, clause.len());
        for &lit in clause {
            oracle.assert_literal(lit);
        }
        oracle
    }

    /// Oracle for resolution rules: every literal also records its complement
    pub fn from_complements(bank: &'a TermBank, clause: &[TermId]) -> Self {
        let mut oracle = Self::new(bank, clause.len());
        for &lit in clause {
            oracle.assert_complement(lit);
        }
        oracle
    }

    pub fn assert_literal(&mut self, lit: TermId) {
        self.marked.insert(lit);
    }

    pub fn assert_complement(&mut self, lit: TermId) {
        self.marked.insert(lit);
        if let Some(TermNode::Not([atom])) = self.bank.node(lit) {
            self.complemented.insert(*atom);
        }
    }

    /// `term` is itself a literal of the clause
    pub fn is_marked(&self, term: TermId) -> bool {
        self.marked.contains(&term)
    }

    /// The complement of `term` is a literal of the clause
    pub fn is_complement(&self, term: TermId) -> bool {
        if self.complemented.contains(&term) {
            return true;
        }
        match self.bank.node(term) {
            Some(TermNode::Not([atom])) => self.marked.contains(atom),
            _ => false,
        }
    }

    /// Number of `terms` whose complement is a literal of the clause
    pub fn count_complemented(&self, terms: &[TermId]) -> usize {
        terms.iter().filter(|&&t| self.is_complement(t)).count()
    }
}
