//! Justification log reader
//!
//! A log declares the symbols it uses and then lists justifications:
//!
//! ```text
//! (declare-sort U)
//! (declare-const a Bool)
//! (declare-fun p (U) Bool)
//! (tseitin (and a b) (not a) (not b))
//! (tseitin :named def1 (or a b) (not a))
//! ```

use super::sexpr::{parse_sexprs, SExpr};
use crate::error::{ParseError, Result, TermError};
use crate::justification::Justification;
use crate::logic::{Sort, TermBank, TermId};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Terms and justifications read from a log
#[derive(Debug, Clone, Default)]
pub struct ParsedLog {
    pub bank: TermBank,
    pub justifications: Vec<Justification>,
}

/// Parse a justification log from a string
pub fn parse_log(input: &str) -> Result<ParsedLog> {
    let exprs = parse_sexprs(input)?;
    let mut reader = LogReader::default();
    for expr in &exprs {
        reader.command(expr)?;
    }
    debug!(
        terms = reader.log.bank.len(),
        justifications = reader.log.justifications.len(),
        "parsed justification log"
    );
    Ok(reader.log)
}

/// Parse a justification log from a file
pub fn parse_log_file(path: impl AsRef<Path>) -> Result<ParsedLog> {
    let content = fs::read_to_string(path)?;
    parse_log(&content)
}

const BUILTINS: [&str; 7] = ["and", "or", "xor", "not", "=", "ite", "=>"];

/// Declared signature of a function symbol
#[derive(Debug, Clone)]
struct FunDecl {
    args: Vec<Sort>,
    result: Sort,
}

#[derive(Default)]
struct LogReader {
    log: ParsedLog,
    constants: HashMap<String, TermId>,
    functions: HashMap<String, FunDecl>,
}

fn malformed(what: &'static str, expr: &SExpr) -> ParseError {
    ParseError::Malformed {
        what,
        text: expr.to_string(),
    }
}

impl LogReader {
    fn command(&mut self, expr: &SExpr) -> Result<()> {
        let SExpr::List(items) = expr else {
            return Err(malformed("command", expr));
        };
        let Some(head) = items.first().and_then(SExpr::as_atom) else {
            return Err(malformed("command", expr));
        };
        match (head, &items[1..]) {
            ("declare-sort", [SExpr::Atom(name)]) | ("declare-sort", [SExpr::Atom(name), _]) => {
                self.log.bank.mk_sort(name);
            }
            ("declare-const", [SExpr::Atom(name), sort]) => {
                let sort = self.sort(sort)?;
                self.declare_const(name, sort);
            }
            ("declare-fun", [SExpr::Atom(name), SExpr::List(args), sort]) => {
                let args = args.iter().map(|a| self.sort(a)).collect::<Result<Vec<_>>>()?;
                let result = self.sort(sort)?;
                if args.is_empty() {
                    self.declare_const(name, result);
                } else {
                    self.functions.insert(name.clone(), FunDecl { args, result });
                }
            }
            ("tseitin", rest) => {
                let jst = self.justification(rest)?;
                self.log.justifications.push(jst);
            }
            ("set-logic" | "set-info" | "set-option", _) => {}
            ("declare-sort" | "declare-const" | "declare-fun", _) => {
                return Err(malformed("declaration", expr));
            }
            (other, _) => return Err(ParseError::UnknownCommand(other.to_string())),
        }
        Ok(())
    }

    fn declare_const(&mut self, name: &str, sort: Sort) {
        let id = self.log.bank.mk_const(name, sort);
        self.constants.insert(name.to_string(), id);
    }

    fn sort(&mut self, expr: &SExpr) -> Result<Sort> {
        match expr {
            SExpr::Atom(name) => Ok(self.log.bank.mk_sort(name)),
            SExpr::List(_) => Err(malformed("sort", expr)),
        }
    }

    fn justification(&mut self, items: &[SExpr]) -> Result<Justification> {
        let (name, literals) = match items {
            [SExpr::Atom(kw), SExpr::Atom(name), rest @ ..] if kw == ":named" => {
                (Some(name.clone()), rest)
            }
            _ => (None, items),
        };
        let literals = literals
            .iter()
            .map(|lit| self.term(lit))
            .collect::<Result<Vec<_>>>()?;
        Ok(Justification { name, literals })
    }

    fn term(&mut self, expr: &SExpr) -> Result<TermId> {
        let (head, args) = match expr {
            SExpr::Atom(name) => return self.symbol(name),
            SExpr::List(items) => match items.split_first() {
                Some((SExpr::Atom(head), args)) => (head.as_str(), args),
                _ => return Err(malformed("term", expr)),
            },
        };
        if !BUILTINS.contains(&head) && !self.functions.contains_key(head) {
            return Err(ParseError::UndeclaredSymbol(head.to_string()));
        }
        let args = args.iter().map(|a| self.term(a)).collect::<Result<Vec<_>>>()?;
        self.build(head, args).map_err(|source| ParseError::Term {
            text: expr.to_string(),
            source,
        })
    }

    fn symbol(&mut self, name: &str) -> Result<TermId> {
        match name {
            "true" => Ok(self.log.bank.mk_true()),
            "false" => Ok(self.log.bank.mk_false()),
            _ => self
                .constants
                .get(name)
                .copied()
                .ok_or_else(|| ParseError::UndeclaredSymbol(name.to_string())),
        }
    }

    fn build(&mut self, head: &str, args: Vec<TermId>) -> std::result::Result<TermId, TermError> {
        let bank = &mut self.log.bank;
        let found = args.len();
        let arity = move |expected: usize| TermError::Arity {
            symbol: head.to_string(),
            expected,
            found,
        };
        match head {
            "and" => bank.mk_and(args),
            "or" => bank.mk_or(args),
            "xor" => bank.mk_xor(args),
            "not" => match args[..] {
                [a] => bank.mk_not(a),
                _ => Err(arity(1)),
            },
            "=" => match args[..] {
                [a, b] => bank.mk_eq(a, b),
                _ => Err(arity(2)),
            },
            "ite" => match args[..] {
                [c, t, e] => bank.mk_ite(c, t, e),
                _ => Err(arity(3)),
            },
            // right-associative
            "=>" => match args.split_last() {
                Some((&last, init)) if !init.is_empty() => init
                    .iter()
                    .rev()
                    .try_fold(last, |acc, &lhs| bank.mk_implies(lhs, acc)),
                _ => Err(arity(2)),
            },
            name => {
                let Some(decl) = self.functions.get(name) else {
                    return Err(arity(0));
                };
                if decl.args.len() != args.len() {
                    return Err(arity(decl.args.len()));
                }
                for (&arg, &expected) in args.iter().zip(&decl.args) {
                    if bank.sort(arg) != Some(expected) {
                        return Err(TermError::SortMismatch {
                            context: "application",
                            expected: bank.sort_name(expected),
                            found: bank.sort(arg).map(|s| bank.sort_name(s)).unwrap_or_default(),
                        });
                    }
                }
                bank.mk_app(name, args, decl.result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_declarations_and_justification() {
        let log = parse_log(
            "(declare-const a Bool)
             (declare-const b Bool)
             (tseitin (and a b) (not a) (not b))",
        )
        .unwrap();
        assert_eq!(log.justifications.len(), 1);
        let jst = &log.justifications[0];
        assert_eq!(jst.name, None);
        assert_eq!(jst.len(), 3);
        assert_eq!(log.bank.display(jst.literals[0]).to_string(), "(and a b)");
    }

    #[test]
    fn test_named_justification() {
        let log = parse_log("(declare-fun a () Bool) (tseitin :named d1 (not a) a)").unwrap();
        assert_eq!(log.justifications[0].name.as_deref(), Some("d1"));
        assert_eq!(log.justifications[0].len(), 2);
    }

    #[test]
    fn test_empty_justification() {
        let log = parse_log("(tseitin)").unwrap();
        assert!(log.justifications[0].is_empty());
    }

    #[test]
    fn test_function_application() {
        let log = parse_log(
            "(declare-sort U 0)
             (declare-const x U)
             (declare-fun p (U) Bool)
             (tseitin (or (p x) true) (not (p x)))",
        )
        .unwrap();
        let lit = log.justifications[0].literals[0];
        assert_eq!(log.bank.display(lit).to_string(), "(or (p x) true)");
    }

    #[test]
    fn test_implication_is_right_associative() {
        let log = parse_log(
            "(declare-const a Bool) (declare-const b Bool) (declare-const c Bool)
             (tseitin (=> a b c))",
        )
        .unwrap();
        let lit = log.justifications[0].literals[0];
        assert_eq!(log.bank.display(lit).to_string(), "(=> a (=> b c))");
    }

    #[test]
    fn test_undeclared_symbol() {
        let err = parse_log("(tseitin (and a b))").unwrap_err();
        assert!(matches!(err, ParseError::UndeclaredSymbol(ref s) if s == "a"));
    }

    #[test]
    fn test_ill_sorted_term() {
        let err = parse_log(
            "(declare-const x Int) (declare-const a Bool)
             (tseitin (and x a))",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::Term { source: TermError::SortMismatch { .. }, .. }));
    }

    #[test]
    fn test_wrong_arity() {
        let err = parse_log("(declare-const a Bool) (tseitin (not a a))").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Term { source: TermError::Arity { expected: 1, found: 2, .. }, .. }
        ));
    }

    #[test]
    fn test_undeclared_function() {
        let err = parse_log("(declare-const a Bool) (tseitin (distinct a a))").unwrap_err();
        assert!(matches!(err, ParseError::UndeclaredSymbol(ref s) if s == "distinct"));
    }

    #[test]
    fn test_function_argument_sort() {
        let err = parse_log(
            "(declare-const a Bool) (declare-fun p (U) Bool)
             (tseitin (p a))",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ParseError::Term { source: TermError::SortMismatch { context: "application", .. }, .. }
        ));
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_log("(check-sat)").unwrap_err();
        assert!(matches!(err, ParseError::UnknownCommand(ref c) if c == "check-sat"));
    }

    #[test]
    fn test_headers_are_ignored() {
        let log = parse_log("(set-logic QF_UF) (set-info :status unknown)").unwrap();
        assert!(log.justifications.is_empty());
    }
}
