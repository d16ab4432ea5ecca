//! Readers for justification logs

pub mod log;
pub mod sexpr;

pub use log::{parse_log, parse_log_file, ParsedLog};
pub use sexpr::{parse_sexprs, SExpr, MAX_NESTING};
