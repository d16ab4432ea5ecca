//! Checker configuration types.

use serde::{Deserialize, Serialize};

/// Configuration for the Tseitin checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Also identify `and`/`or`/`xor` nodes whose children agree as a
    /// multiset when matching equivalent literals. Off by default: only
    /// identical terms and side-swapped equalities are identified.
    #[serde(default)]
    pub equiv_modulo_commutativity: bool,
}

impl CheckerConfig {
    /// Configuration with commutative matching of top-level operators
    pub fn commutative() -> Self {
        CheckerConfig {
            equiv_modulo_commutativity: true,
        }
    }
}
