//! Defining-clause patterns for each connective and its negation.
//!
//! Resolution rules build the oracle with complements: with every literal
//! other than the main one assumed false, the connective's definition must
//! force the main literal. Membership rules (`not(and)`, `not(or)`) only
//! look for children among the clause literals.

use super::equiv::equiv;
use super::oracle::AssumptionOracle;
use crate::config::CheckerConfig;
use crate::logic::{TermBank, TermId, TermNode};
use std::fmt;

/// The defining-clause pattern that accepted a clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TseitinRule {
    /// `(and a b) ∨ ¬a ∨ ¬b`
    And,
    /// `(or a b) ∨ ¬a`
    Or,
    /// `(= a b) ∨ a ∨ b`, `(= a b) ∨ ¬a ∨ ¬b`
    EqBool,
    /// `(= (ite c t e) y) ∨ c` with `y ≡ e`, or `∨ ¬c` with `y ≡ t`
    EqIte,
    /// `(ite a b c) ∨ ¬b ∨ ¬c`, `∨ a ∨ ¬c`, `∨ ¬a ∨ ¬b`
    Ite,
    /// `(=> a b) ∨ a`, `(=> a b) ∨ ¬b`
    Implies,
    /// `(xor a b c d) ∨ a ∨ b ∨ ¬c ∨ ¬d`: evenly many complemented children
    Xor,
    /// `¬(and a b) ∨ a`
    NotAnd,
    /// `¬(or a b) ∨ a ∨ b`
    NotOr,
    /// `¬(= a b) ∨ a ∨ ¬b`, `¬(= a b) ∨ ¬a ∨ b`
    NotEq,
    /// `¬(ite a b c) ∨ ¬a ∨ b`, `∨ a ∨ c`, `∨ b ∨ c`
    NotIte,
    /// `¬(=> a b) ∨ ¬a ∨ b`
    NotImplies,
    /// `¬(xor a b c d) ∨ a ∨ b ∨ c ∨ ¬d`: oddly many complemented children
    NotXor,
    /// `¬a ∨ a'` with `a ≡ a'`
    NotEquiv,
}

impl TseitinRule {
    pub fn name(&self) -> &'static str {
        match self {
            TseitinRule::And => "and",
            TseitinRule::Or => "or",
            TseitinRule::EqBool => "eq",
            TseitinRule::EqIte => "eq-ite",
            TseitinRule::Ite => "ite",
            TseitinRule::Implies => "implies",
            TseitinRule::Xor => "xor",
            TseitinRule::NotAnd => "not-and",
            TseitinRule::NotOr => "not-or",
            TseitinRule::NotEq => "not-eq",
            TseitinRule::NotIte => "not-ite",
            TseitinRule::NotImplies => "not-implies",
            TseitinRule::NotXor => "not-xor",
            TseitinRule::NotEquiv => "not-equiv",
        }
    }
}

impl fmt::Display for TseitinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rule dispatcher for one clause with a selected main literal
pub(crate) struct RuleDispatcher<'a> {
    bank: &'a TermBank,
    config: &'a CheckerConfig,
    clause: &'a [TermId],
}

impl<'a> RuleDispatcher<'a> {
    pub fn new(bank: &'a TermBank, config: &'a CheckerConfig, clause: &'a [TermId]) -> Self {
        RuleDispatcher {
            bank,
            config,
            clause,
        }
    }

    /// Find the pattern accepting the clause with `main` as defined literal
    pub fn dispatch(&self, main: TermId) -> Option<TseitinRule> {
        match self.bank.node(main)? {
            TermNode::Not([inner]) => self.dispatch_negated(*inner),
            node => self.dispatch_positive(node),
        }
    }

    fn resolution(&self) -> AssumptionOracle<'a> {
        AssumptionOracle::from_complements(self.bank, self.clause)
    }

    fn membership(&self) -> AssumptionOracle<'a> {
        AssumptionOracle::from_literals(self.bank, self.clause)
    }

    fn dispatch_positive(&self, node: &TermNode) -> Option<TseitinRule> {
        match node {
            TermNode::And(children) => self.check_and(children),
            TermNode::Or(children) => self.check_or(children),
            TermNode::Eq([x, y]) => self
                .check_eq_bool(*x, *y)
                .or_else(|| self.check_eq_ite(*x, *y)),
            TermNode::Ite([x, y, z]) => self.check_ite(*x, *y, *z),
            TermNode::Implies([x, y]) => self.check_implies(*x, *y),
            TermNode::Xor(children) => self.check_xor(children),
            TermNode::True
            | TermNode::False
            | TermNode::Const(_)
            | TermNode::App(..)
            | TermNode::Not(_) => None,
        }
    }

    fn dispatch_negated(&self, inner: TermId) -> Option<TseitinRule> {
        let structural = match self.bank.node(inner)? {
            TermNode::And(children) => self.check_not_and(children),
            TermNode::Or(children) => self.check_not_or(children),
            TermNode::Eq([x, y]) => self.check_not_eq(*x, *y),
            TermNode::Ite([x, y, z]) => self.check_not_ite(*x, *y, *z),
            TermNode::Implies([x, y]) => self.check_not_implies(*x, *y),
            TermNode::Xor(children) => self.check_not_xor(children),
            TermNode::True
            | TermNode::False
            | TermNode::Const(_)
            | TermNode::App(..)
            | TermNode::Not(_) => None,
        };
        structural.or_else(|| self.check_not_equiv(inner))
    }

    // =========================================================================
    // Positive connectives
    // =========================================================================

    fn check_and(&self, children: &[TermId]) -> Option<TseitinRule> {
        let oracle = self.resolution();
        children
            .iter()
            .all(|&c| oracle.is_complement(c))
            .then_some(TseitinRule::And)
    }

    fn check_or(&self, children: &[TermId]) -> Option<TseitinRule> {
        let oracle = self.resolution();
        children
            .iter()
            .any(|&c| oracle.is_complement(c))
            .then_some(TseitinRule::Or)
    }

    fn check_eq_bool(&self, x: TermId, y: TermId) -> Option<TseitinRule> {
        if !self.bank.is_bool(x) {
            return None;
        }
        let oracle = self.resolution();
        let both_marked = oracle.is_marked(x) && oracle.is_marked(y);
        let both_complemented = oracle.is_complement(x) && oracle.is_complement(y);
        (both_marked || both_complemented).then_some(TseitinRule::EqBool)
    }

    fn check_eq_ite(&self, x: TermId, y: TermId) -> Option<TseitinRule> {
        let Some(TermNode::Ite([cond, then, els])) = self.bank.node(x) else {
            return None;
        };
        let oracle = self.resolution();
        let modulo = self.config.equiv_modulo_commutativity;
        let else_branch = oracle.is_marked(*cond) && equiv(self.bank, y, *els, modulo);
        let then_branch = oracle.is_complement(*cond) && equiv(self.bank, y, *then, modulo);
        (else_branch || then_branch).then_some(TseitinRule::EqIte)
    }

    fn check_ite(&self, x: TermId, y: TermId, z: TermId) -> Option<TseitinRule> {
        if !self.bank.is_bool(z) {
            return None;
        }
        let o = self.resolution();
        let accepted = (o.is_marked(x) && o.is_complement(z))
            || (o.is_complement(x) && o.is_complement(y))
            || (o.is_complement(y) && o.is_complement(z));
        accepted.then_some(TseitinRule::Ite)
    }

    fn check_implies(&self, x: TermId, y: TermId) -> Option<TseitinRule> {
        let o = self.resolution();
        (o.is_marked(x) || o.is_complement(y)).then_some(TseitinRule::Implies)
    }

    fn check_xor(&self, children: &[TermId]) -> Option<TseitinRule> {
        let complemented = self.resolution().count_complemented(children);
        (complemented % 2 == 0).then_some(TseitinRule::Xor)
    }

    // =========================================================================
    // Negated connectives
    // =========================================================================

    fn check_not_and(&self, children: &[TermId]) -> Option<TseitinRule> {
        let oracle = self.membership();
        children
            .iter()
            .any(|&c| oracle.is_marked(c))
            .then_some(TseitinRule::NotAnd)
    }

    fn check_not_or(&self, children: &[TermId]) -> Option<TseitinRule> {
        let oracle = self.membership();
        children
            .iter()
            .all(|&c| oracle.is_marked(c))
            .then_some(TseitinRule::NotOr)
    }

    fn check_not_eq(&self, x: TermId, y: TermId) -> Option<TseitinRule> {
        if !self.bank.is_bool(x) {
            return None;
        }
        let o = self.resolution();
        let accepted = (o.is_marked(x) && o.is_complement(y)) || (o.is_marked(y) && o.is_complement(x));
        accepted.then_some(TseitinRule::NotEq)
    }

    fn check_not_ite(&self, x: TermId, y: TermId, z: TermId) -> Option<TseitinRule> {
        if !self.bank.is_bool(z) {
            return None;
        }
        let o = self.resolution();
        let accepted = (o.is_complement(x) && o.is_marked(y))
            || (o.is_marked(x) && o.is_marked(z))
            || (o.is_marked(y) && o.is_marked(z));
        accepted.then_some(TseitinRule::NotIte)
    }

    fn check_not_implies(&self, x: TermId, y: TermId) -> Option<TseitinRule> {
        let o = self.resolution();
        (o.is_complement(x) && o.is_marked(y)).then_some(TseitinRule::NotImplies)
    }

    fn check_not_xor(&self, children: &[TermId]) -> Option<TseitinRule> {
        let complemented = self.resolution().count_complemented(children);
        ((1 + complemented) % 2 == 0).then_some(TseitinRule::NotXor)
    }

    /// `not(a)` next to a literal equivalent to `a`
    fn check_not_equiv(&self, inner: TermId) -> Option<TseitinRule> {
        let modulo = self.config.equiv_modulo_commutativity;
        self.clause
            .iter()
            .any(|&lit| equiv(self.bank, inner, lit, modulo))
            .then_some(TseitinRule::NotEquiv)
    }
}
