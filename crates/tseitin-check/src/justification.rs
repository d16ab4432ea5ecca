//! Justification records
//!
//! A justification claims that its literals form one defining clause
//! produced by clausification. The record is opaque to the host: only the
//! checker looks inside.

use crate::logic::{TermBank, TermId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A clause claimed to be a Tseitin defining clause
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Justification {
    /// Optional label from the producing log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Literals in the order they were recorded
    pub literals: Vec<TermId>,
}

impl Justification {
    pub fn new(literals: Vec<TermId>) -> Self {
        Justification {
            name: None,
            literals,
        }
    }

    pub fn named(name: impl Into<String>, literals: Vec<TermId>) -> Self {
        Justification {
            name: Some(name.into()),
            literals,
        }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Format the clause with a bank for name resolution
    pub fn display<'a>(&'a self, bank: &'a TermBank) -> JustificationDisplay<'a> {
        JustificationDisplay {
            justification: self,
            bank,
        }
    }
}

/// Display wrapper for Justification
pub struct JustificationDisplay<'a> {
    justification: &'a Justification,
    bank: &'a TermBank,
}

impl<'a> fmt::Display for JustificationDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.justification.literals.is_empty() {
            return write!(f, "⊥");
        }
        for (i, &lit) in self.justification.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{}", self.bank.display(lit))?;
        }
        Ok(())
    }
}
