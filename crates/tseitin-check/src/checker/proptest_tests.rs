//! Property-based tests for the Tseitin checker using proptest.

use super::{TseitinChecker, TseitinRule};
use crate::justification::Justification;
use crate::logic::{TermBank, TermId};
use proptest::prelude::*;

/// Literal description (before building terms)
#[derive(Debug, Clone)]
enum LitDesc {
    Atom(u8),
    NotAtom(u8),
    And(Vec<u8>),
    Or(Vec<u8>),
    Xor(Vec<u8>),
    NotAnd(Vec<u8>),
    NotOr(Vec<u8>),
}

fn arb_children() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0..5u8, 1..=4)
}

fn arb_lit_desc() -> impl Strategy<Value = LitDesc> {
    prop_oneof![
        3 => (0..5u8).prop_map(LitDesc::Atom),
        3 => (0..5u8).prop_map(LitDesc::NotAtom),
        1 => arb_children().prop_map(LitDesc::And),
        1 => arb_children().prop_map(LitDesc::Or),
        1 => arb_children().prop_map(LitDesc::Xor),
        1 => arb_children().prop_map(LitDesc::NotAnd),
        1 => arb_children().prop_map(LitDesc::NotOr),
    ]
}

fn atom(bank: &mut TermBank, i: u8) -> TermId {
    bank.mk_bool_const(&format!("p{}", i))
}

fn atoms(bank: &mut TermBank, idx: &[u8]) -> Vec<TermId> {
    idx.iter().map(|&i| atom(bank, i)).collect()
}

fn build_lit(desc: &LitDesc, bank: &mut TermBank) -> TermId {
    match desc {
        LitDesc::Atom(i) => atom(bank, *i),
        LitDesc::NotAtom(i) => {
            let a = atom(bank, *i);
            bank.mk_not(a).unwrap()
        }
        LitDesc::And(idx) => {
            let args = atoms(bank, idx);
            bank.mk_and(args).unwrap()
        }
        LitDesc::Or(idx) => {
            let args = atoms(bank, idx);
            bank.mk_or(args).unwrap()
        }
        LitDesc::Xor(idx) => {
            let args = atoms(bank, idx);
            bank.mk_xor(args).unwrap()
        }
        LitDesc::NotAnd(idx) => {
            let args = atoms(bank, idx);
            let and = bank.mk_and(args).unwrap();
            bank.mk_not(and).unwrap()
        }
        LitDesc::NotOr(idx) => {
            let args = atoms(bank, idx);
            let or = bank.mk_or(args).unwrap();
            bank.mk_not(or).unwrap()
        }
    }
}

fn arb_clause() -> impl Strategy<Value = (Vec<TermId>, TermBank)> {
    proptest::collection::vec(arb_lit_desc(), 0..6).prop_map(|descs| {
        let mut bank = TermBank::new();
        let lits = descs.iter().map(|d| build_lit(d, &mut bank)).collect();
        (lits, bank)
    })
}

/// A permutation of `0..=n` for `n` children plus the negated disjunction
fn arb_not_or_order() -> impl Strategy<Value = Vec<usize>> {
    (1..5usize).prop_flat_map(|n| Just((0..=n).collect::<Vec<usize>>()).prop_shuffle())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Checking is a pure function of the clause
    #[test]
    fn prop_check_is_deterministic((lits, bank) in arb_clause()) {
        let checker = TseitinChecker::new(&bank);
        let jst = Justification::new(lits);
        let first = checker.verdict(&jst);
        let second = checker.verdict(&jst);
        prop_assert_eq!(first, second);
    }

    /// Extraction returns the recorded literals unchanged
    #[test]
    fn prop_extract_clause_idempotent((lits, bank) in arb_clause()) {
        let checker = TseitinChecker::new(&bank);
        let jst = Justification::new(lits.clone());
        let first = checker.extract_clause(&jst);
        let second = checker.extract_clause(&jst);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &lits);
    }

    /// A negated disjunction with all its children is accepted in any order.
    /// Position `n` stands for the negated disjunction, `0..n` for its children.
    #[test]
    fn prop_not_or_permutation_invariant(order in arb_not_or_order()) {
        let n = order.len() - 1;
        let mut bank = TermBank::new();
        let children: Vec<TermId> = (0..n as u8).map(|i| atom(&mut bank, i)).collect();
        let or = bank.mk_or(children.clone()).unwrap();
        let not_or = bank.mk_not(or).unwrap();
        let clause: Vec<TermId> = order
            .iter()
            .map(|&i| if i == n { not_or } else { children[i] })
            .collect();
        let verdict = TseitinChecker::new(&bank).verdict(&Justification::new(clause));
        prop_assert_eq!(verdict.main, Some(not_or));
        prop_assert_eq!(verdict.rule, Some(TseitinRule::NotOr));
    }

    /// Every conjunction defining clause `and(..) ∨ ¬c1 ∨ .. ∨ ¬cn` is accepted
    #[test]
    fn prop_and_definition_accepted(idx in proptest::collection::btree_set(0..6u8, 1..=5)) {
        let mut bank = TermBank::new();
        let idx: Vec<u8> = idx.into_iter().collect();
        let children = atoms(&mut bank, &idx);
        let and = bank.mk_and(children.clone()).unwrap();
        let mut clause = vec![and];
        for &c in &children {
            clause.push(bank.mk_not(c).unwrap());
        }
        let verdict = TseitinChecker::new(&bank).verdict(&Justification::new(clause));
        prop_assert_eq!(verdict.main, Some(and));
        prop_assert_eq!(verdict.rule, Some(TseitinRule::And));
    }

    /// A negated atom next to the atom itself is always accepted
    #[test]
    fn prop_not_atom_with_atom_accepted(i in 0..5u8, extra in proptest::collection::vec(0..5u8, 0..3)) {
        let mut bank = TermBank::new();
        let a = atom(&mut bank, i);
        let not_a = bank.mk_not(a).unwrap();
        let mut clause = vec![not_a, a];
        clause.extend(atoms(&mut bank, &extra));
        prop_assert!(TseitinChecker::new(&bank).check_clause(&clause));
    }
}
