//! Error types for tseitin-check
//!
//! Checking a justification never fails: malformed clauses are simply
//! rejected. Errors only arise while building terms or reading a log.

use std::io;
use thiserror::Error;

/// Error while constructing a term in a [`TermBank`](crate::logic::TermBank)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    #[error("sort mismatch in {context}: expected {expected}, found {found}")]
    SortMismatch {
        context: &'static str,
        expected: String,
        found: String,
    },

    #[error("wrong number of arguments for {symbol}: expected {expected}, found {found}")]
    Arity {
        symbol: String,
        expected: usize,
        found: usize,
    },

    #[error("term id {0} does not belong to this term bank")]
    UnknownTerm(u32),
}

/// Error while reading a justification log
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("undeclared symbol: {0}")]
    UndeclaredSymbol(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("malformed {what}: {text}")]
    Malformed { what: &'static str, text: String },

    #[error("ill-formed term {text}: {source}")]
    Term {
        text: String,
        #[source]
        source: TermError,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ParseError>;
