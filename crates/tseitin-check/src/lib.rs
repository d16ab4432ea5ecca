//! Tseitin justification checker
//!
//! Decides whether a clause recorded by an SMT solver is one of the
//! defining clauses the Tseitin transformation introduces for a Boolean
//! connective (`and`, `or`, `=`, `ite`, `=>`, `xor` and their negations).
//!
//! ```
//! use tseitin_check::{TermBank, TseitinChecker, TseitinRule};
//!
//! let mut bank = TermBank::new();
//! let a = bank.mk_bool_const("a");
//! let b = bank.mk_bool_const("b");
//! let or = bank.mk_or(vec![a, b]).unwrap();
//! let not_or = bank.mk_not(or).unwrap();
//!
//! let checker = TseitinChecker::new(&bank);
//! assert!(checker.check_clause(&[not_or, a, b]));
//! ```

pub mod checker;
pub mod config;
pub mod error;
pub mod json;
pub mod justification;
pub mod logic;
pub mod parser;

pub use checker::{TseitinChecker, TseitinRule, Verdict};
pub use config::CheckerConfig;
pub use error::{ParseError, TermError};
pub use json::{CheckReport, JustificationReport};
pub use justification::Justification;
pub use logic::{Sort, TermBank, TermId, TermNode};
pub use parser::{parse_log, parse_log_file, ParsedLog};
