//! S-expression reader

use crate::error::{ParseError, Result};
use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, multispace1, not_line_ending},
    combinator::{map, value},
    multi::many0,
    sequence::{delimited, preceded},
    IResult,
};
use std::fmt;

/// A parsed S-expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SExpr {
    Atom(String),
    List(Vec<SExpr>),
}

impl SExpr {
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            SExpr::Atom(s) => Some(s),
            SExpr::List(_) => None,
        }
    }
}

impl fmt::Display for SExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SExpr::Atom(s) => write!(f, "{}", s),
            SExpr::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Deepest list nesting accepted. The reader and the term builder recurse
/// once per level.
pub const MAX_NESTING: usize = 256;

/// Parse every S-expression in `input`
pub fn parse_sexprs(input: &str) -> Result<Vec<SExpr>> {
    check_nesting(input)?;
    let (rest, exprs) = many0(preceded(skip_blank, parse_sexpr))(input).map_err(|e| {
        ParseError::Syntax {
            line: 1,
            message: e.to_string(),
        }
    })?;
    let rest = match skip_blank(rest) {
        Ok((rest, _)) => rest,
        Err(_) => rest,
    };
    if !rest.is_empty() {
        let offset = input.len() - rest.len();
        let line = input[..offset].matches('\n').count() + 1;
        let snippet: String = rest.chars().take(40).collect();
        return Err(ParseError::Syntax {
            line,
            message: format!("unexpected input near `{}`", snippet.trim_end()),
        });
    }
    Ok(exprs)
}

/// Reject input nested deeper than [`MAX_NESTING`] before any recursion.
/// Parentheses inside comments and `|quoted|` symbols do not count.
fn check_nesting(input: &str) -> Result<()> {
    let mut depth = 0usize;
    let mut line = 1;
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        match c {
            '\n' => line += 1,
            '(' => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(ParseError::Syntax {
                        line,
                        message: format!("nesting deeper than {} levels", MAX_NESTING),
                    });
                }
            }
            ')' => depth = depth.saturating_sub(1),
            ';' => {
                if chars.by_ref().any(|c| c == '\n') {
                    line += 1;
                }
            }
            '|' => {
                for c in chars.by_ref() {
                    match c {
                        '|' => break,
                        '\n' => line += 1,
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Skip whitespace and `;` line comments
fn skip_blank(input: &str) -> IResult<&str, ()> {
    value(
        (),
        many0(alt((
            value((), multispace1),
            value((), preceded(char(';'), not_line_ending)),
        ))),
    )(input)
}

fn parse_sexpr(input: &str) -> IResult<&str, SExpr> {
    alt((parse_list, map(parse_symbol, |s: &str| SExpr::Atom(s.to_string()))))(input)
}

fn parse_list(input: &str) -> IResult<&str, SExpr> {
    map(
        delimited(
            char('('),
            many0(preceded(skip_blank, parse_sexpr)),
            preceded(skip_blank, char(')')),
        ),
        SExpr::List,
    )(input)
}

fn parse_symbol(input: &str) -> IResult<&str, &str> {
    alt((parse_quoted_symbol, parse_simple_symbol))(input)
}

/// `|any text but bars|`
fn parse_quoted_symbol(input: &str) -> IResult<&str, &str> {
    delimited(char('|'), take_while(|c: char| c != '|'), char('|'))(input)
}

fn parse_simple_symbol(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && !matches!(c, '(' | ')' | ';' | '|'))(input)
}
