//! Matching of literals that denote the same relation.

use crate::logic::{TermBank, TermId, TermNode};

/// `a` and `b` are the same term, or equalities `x = y` and `y = x`.
/// The swapped equality matches in either mode.
///
/// With `modulo_commutativity`, two `and`/`or`/`xor` nodes whose children
/// agree as multisets are identified as well.
pub(crate) fn equiv(bank: &TermBank, a: TermId, b: TermId, modulo_commutativity: bool) -> bool {
    if a == b {
        return true;
    }
    match (bank.node(a), bank.node(b)) {
        (Some(TermNode::Eq([x, y])), Some(TermNode::Eq([z, u]))) => x == u && y == z,
        (Some(TermNode::And(xs)), Some(TermNode::And(ys)))
        | (Some(TermNode::Or(xs)), Some(TermNode::Or(ys)))
        | (Some(TermNode::Xor(xs)), Some(TermNode::Xor(ys)))
            if modulo_commutativity =>
        {
            same_multiset(xs, ys)
        }
        _ => false,
    }
}

fn same_multiset(xs: &[TermId], ys: &[TermId]) -> bool {
    if xs.len() != ys.len() {
        return false;
    }
    let mut xs = xs.to_vec();
    let mut ys = ys.to_vec();
    xs.sort_unstable();
    ys.sort_unstable();
    xs == ys
}
