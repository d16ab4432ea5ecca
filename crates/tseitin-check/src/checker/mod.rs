//! Checker for Tseitin justification clauses
//!
//! A justification claims that its literals form one defining clause of a
//! compound sub-expression. [`TseitinChecker::check`] certifies the claim
//! by matching the clause against the fixed defining-clause patterns of
//! the supported connectives (`and`, `or`, `=`, `ite`, `=>`, `xor`) and of
//! their negations.
//!
//! Every check is a pure function of the clause: the assumption oracle is
//! built inside the call and dropped before it returns.

mod equiv;
mod oracle;
mod rules;
mod selection;

#[cfg(test)]
mod proptest_tests;

pub use rules::TseitinRule;

use crate::config::CheckerConfig;
use crate::justification::Justification;
use crate::logic::{TermBank, TermId};
use rules::RuleDispatcher;
use selection::select_main_literal;
use tracing::{debug, trace};

/// Outcome of checking one clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Literal identified as the defined sub-expression, if any
    pub main: Option<TermId>,
    /// Pattern that accepted the clause, if any
    pub rule: Option<TseitinRule>,
}

impl Verdict {
    pub fn accepted(&self) -> bool {
        self.rule.is_some()
    }
}

/// Stateless checker over a shared, read-only term bank
#[derive(Debug, Clone, Copy)]
pub struct TseitinChecker<'a> {
    bank: &'a TermBank,
    config: CheckerConfig,
}

impl<'a> TseitinChecker<'a> {
    pub fn new(bank: &'a TermBank) -> Self {
        Self::with_config(bank, CheckerConfig::default())
    }

    pub fn with_config(bank: &'a TermBank, config: CheckerConfig) -> Self {
        TseitinChecker { bank, config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// The literals a justification claims, in recorded order
    pub fn extract_clause(&self, jst: &Justification) -> Vec<TermId> {
        jst.literals.clone()
    }

    /// Whether the justification is a supported Tseitin defining clause
    pub fn check(&self, jst: &Justification) -> bool {
        self.verdict(jst).accepted()
    }

    /// Check with the matched main literal and rule
    pub fn verdict(&self, jst: &Justification) -> Verdict {
        self.clause_verdict(&jst.literals)
    }

    /// Check a bare clause
    pub fn check_clause(&self, clause: &[TermId]) -> bool {
        self.clause_verdict(clause).accepted()
    }

    fn clause_verdict(&self, clause: &[TermId]) -> Verdict {
        let Some(main) = select_main_literal(self.bank, clause) else {
            debug!(literals = clause.len(), "no main literal");
            return Verdict { main: None, rule: None };
        };

        let rule = RuleDispatcher::new(self.bank, &self.config, clause).dispatch(main);
        match rule {
            Some(rule) => trace!(%rule, main = %self.bank.display(main), "accepted"),
            None => debug!(main = %self.bank.display(main), "miss"),
        }
        Verdict {
            main: Some(main),
            rule,
        }
    }
}
