//! Main-literal selection.
//!
//! The literal standing for the defined sub-expression is the structurally
//! deepest one; the remaining literals are (negations of) its children.

use crate::logic::{TermBank, TermId};

/// Pick the main literal of a clause.
///
/// Literals are scanned in order. A strictly deeper literal replaces the
/// current choice, and a literal of equal depth replaces it only while the
/// current choice is a negation, so a non-negated literal wins ties.
///
/// Returns `None` for an empty clause or when any literal has no depth.
pub(crate) fn select_main_literal(bank: &TermBank, clause: &[TermId]) -> Option<TermId> {
    let mut main: Option<(TermId, u32)> = None;
    for &lit in clause {
        let depth = bank.depth(lit)?;
        main = match main {
            None => Some((lit, depth)),
            Some((_, max)) if depth > max => Some((lit, depth)),
            Some((current, max)) if depth == max && bank.is_not(current) => Some((lit, depth)),
            keep => keep,
        };
    }
    main.map(|(lit, _)| lit)
}
