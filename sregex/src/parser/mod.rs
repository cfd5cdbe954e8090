//! # sregex parser
//! This module parses pattern text into a [syntax tree](crate::ast::Ast) according to the
//! following grammar:
//!
//! ```text
//! regex       := concat { '|' concat }
//! concat      := quantified { quantified }
//! quantified  := factor [ '*' | '+' | '?' ]
//! factor      := '(' regex ')'
//!              | '\' escapedChar
//!              | '.'
//!              | '[' classBracketed ']'
//!              | literal
//! classBracketed := [ '^' ] { classItem }
//! classItem   := char [ '-' char ] | '\' classEscape
//! ```
//!
//! `|` binds loosest, concatenation tighter, and the postfix quantifiers tightest; both `|`
//! and concatenation are left-associative. After a backslash, `d D w W s S` denote the named
//! character classes, `t n r v f` denote the corresponding control characters, and any other
//! valid character denotes itself, so every special can be escaped without a whitelist.
//!
//! Inside `[...]`, a leading `^` negates the class, `a-b` denotes an inclusive range (ranges
//! with the start above the end are silently dropped), and `-` is a plain member at the first
//! or last position. `]` and `\` must always be escaped inside a class; `^` must be escaped
//! in first position.
//!
//! All errors are fatal: there is no recovery or partial result. Each error carries the byte
//! offset at which the parse stopped:
//!
//! ```
//! use sregex::parser::{self, ParseError};
//!
//! assert!(parser::regex("(a|b)*c").is_ok());
//! assert!(matches!(parser::regex("a)b"), Err(ParseError::TrailingInput(1))));
//! assert!(matches!(parser::regex("ab\\"), Err(ParseError::InvalidEscape(2))));
//! assert!(matches!(parser::regex("[ab"), Err(ParseError::InvalidRange(0))));
//! assert!(matches!(parser::regex("*a"), Err(ParseError::UnexpectedToken(0))));
//! ```

mod regex;

use crate::ast::Ast;
use nom::{combinator::all_consuming, error::Error as NomError, Finish};
use thiserror::Error;

/// The ways a pattern can fail to parse. All of them are fatal to compilation
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The byte at the given offset cannot start or continue any production
    #[error("unexpected token at offset {0}")]
    UnexpectedToken(usize),
    /// A complete expression ends at the given offset, leaving input behind
    #[error("trailing input at offset {0}: pattern not fully consumed")]
    TrailingInput(usize),
    /// A character class opened at the given offset is never closed
    #[error("unbalanced character class bracket at offset {0}")]
    InvalidRange(usize),
    /// The backslash at the given offset is not followed by an escapable character
    #[error("invalid escape at offset {0}")]
    InvalidEscape(usize),
}

/// Parses a regular expression according to the grammar above. The whole pattern must be
/// consumed, otherwise this function errors. Every tree returned here is accepted by the
/// NFA builder.
pub fn regex(pattern: &str) -> Result<Ast, ParseError> {
    match all_consuming(regex::full_regex)(pattern).finish() {
        Ok((_, ast)) => Ok(ast),
        Err(NomError { input: rest, .. }) => Err(classify(pattern, rest)),
    }
}

/// Maps the position where the parse stopped onto an error class. The combinators only report
/// *where* they gave up; what went wrong is recovered from the text at that position.
fn classify(pattern: &str, rest: &str) -> ParseError {
    let offset = pattern.len() - rest.len();

    let mut lookahead = rest.chars();
    if lookahead.next() == Some('\\') {
        match lookahead.next() {
            None => return ParseError::InvalidEscape(offset),
            Some(c) if !c.is_ascii() || !crate::chars::is_valid(c as u8) => {
                return ParseError::InvalidEscape(offset)
            }
            Some(_) => {}
        }
    }

    if rest.starts_with('[') {
        return ParseError::InvalidRange(offset);
    }

    // If an expression parses cleanly up to this exact position, the pattern merely went on
    // after a complete parse; anything else is a malformed production.
    match regex::expression(pattern) {
        Ok((remaining, _)) if remaining.len() == rest.len() => ParseError::TrailingInput(offset),
        _ => ParseError::UnexpectedToken(offset),
    }
}
