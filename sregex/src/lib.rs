//!# sregex
//!
//! `sregex` is a self-contained regular expression engine that decides whether a string (or
//! any substring of it) is in the language of a pattern. A pattern is compiled through the
//! three classic stages: a recursive-descent parse into a syntax tree, the Thompson
//! construction into an ε-NFA, and the subset construction into a DFA. Matching then runs the
//! DFA over the input, one byte at a time.
//!
//! ## Usage
//!
//! ```rust
//! use sregex::Regex;
//!
//! fn main() {
//!     let regex = Regex::compile("a*b+c?d").unwrap();
//!     assert!(regex.accepts("abd"));
//!     assert!(regex.accepts("bcd"));
//!     assert!(regex.accepts("aaaabbbd"));
//!     assert!(!regex.accepts("ad"));
//!     assert!(!regex.accepts("acd"));
//!
//!     // `test` looks for a match anywhere in the input
//!     let regex = Regex::compile("foo+").unwrap();
//!     assert!(regex.test("table football"));
//!     assert!(!regex.test("look over there"));
//! }
//! ```
//!
//! The pipeline stages are also usable on their own, which is handy for inspecting what a
//! pattern compiles to:
//!
//! ```rust
//! use sregex::nfa::Nfa;
//! use sregex::parser;
//!
//! let ast = parser::regex("(a|b)*").unwrap();
//! let nfa = Nfa::from_ast(&ast);
//! let dfa = nfa.to_dfa();
//! println!("{}", dfa.to_table());
//! ```
//!
//! ## Pattern syntax
//!
//! Patterns are over 7-bit bytes: printable ASCII plus `\t \n \v \f \r`. Supported syntax:
//!
//! * Alternation `a|b`, grouping `(` `)`, and the postfix quantifiers `?` (zero or one),
//!   `*` (zero or more) and `+` (one or more)
//! * `.`, matching every printable byte plus `\t`, but not the line terminators `\n`/`\r`
//! * The named classes `\d \w \s` and their complements `\D \W \S`, where `\d` is `0-9`,
//!   `\w` is `[A-Za-z0-9_]` and `\s` is space plus `\t \n \r \f \v`. Complements cover valid
//!   bytes only
//! * Bracketed classes `[abc]`, `[a-z0-9]` and negated `[^ab]`, with the named classes also
//!   usable inside
//! * Backslash escapes: `\t \n \r \v \f` for control characters, and `\` before any other
//!   character for that character itself, so specials like `(` or `"` need no special rule
//!
//! There are no capture groups, anchors, bounded repetitions or lazy quantifiers: the engine
//! recognizes, it does not extract. Matching is anchored at both ends ([Regex::accepts]);
//! substring search ([Regex::test]) is built on top by scanning anchors.
//!
//! ## Operations
//!
//! This library currently supports:
//!
//! * [Parsing regular expressions](parser::regex) into a [syntax tree](ast::Ast)
//! * [Converting syntax trees to ε-NFAs](nfa::Nfa::from_ast) (Thompson construction)
//! * [Converting NFAs to DFAs](nfa::Nfa::to_dfa) (subset construction)
//! * [Whole-input matching](regex::Regex::accepts) and
//!   [substring matching](regex::Regex::test)
//! * [Step-by-step evaluation of input](dfa::Dfa::evaluator)
//! * Rendering [NFAs](nfa::Nfa::to_table) and [DFAs](dfa::Dfa::to_table) as transition
//!   tables for inspection

pub mod ast;
pub mod chars;
pub mod dfa;
pub mod nfa;
pub mod parser;
pub mod regex;
mod table;

pub use crate::parser::ParseError;
pub use crate::regex::Regex;

/// Compiles a pattern into a [Regex]. Convenience for [Regex::compile]
pub fn compile(pattern: &str) -> Result<Regex, ParseError> {
    Regex::compile(pattern)
}

#[cfg(test)]
mod tests;
