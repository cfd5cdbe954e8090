//! # Compiled regular expressions
//! The [Regex] struct is the public face of the crate. [Compiling](Regex::compile) a pattern
//! runs the whole pipeline in order (parse to a syntax tree, Thompson construction to an
//! ε-NFA, subset construction to a DFA) and keeps only the pattern text and the DFA; the
//! intermediate structures are dropped as soon as the next stage has consumed them.
//!
//! A compiled [Regex] is immutable. Matching never allocates per input byte and runs in one
//! pass over the input for [Regex::accepts], so it is linear in the input length. Since
//! matching only reads the automaton, a [Regex] can be shared freely between threads.
//!
//! ```
//! use sregex::Regex;
//!
//! let regex = Regex::compile("foo+").unwrap();
//!
//! // Exact matching
//! assert!(regex.accepts("foo"));
//! assert!(regex.accepts("foooo"));
//! assert!(!regex.accepts("fo"));
//! assert!(!regex.accepts("food"));
//!
//! // Substring matching
//! assert!(regex.test("table football"));
//! assert!(regex.test("ur a foodie"));
//! assert!(!regex.test("forage"));
//! ```

use crate::dfa::Dfa;
use crate::nfa::Nfa;
use crate::parser::{self, ParseError};
use std::fmt;

/// A regular expression compiled to a DFA, together with the pattern it was compiled from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regex {
    pattern: Box<str>,
    dfa: Dfa,
}

impl Regex {
    /// Compiles a pattern. Runs parse → NFA → DFA and fails on the first parse error; there
    /// is never a partially compiled result
    pub fn compile(pattern: &str) -> Result<Self, ParseError> {
        let ast = parser::regex(pattern)?;
        let nfa = Nfa::from_ast(&ast);
        let dfa = nfa.to_dfa();
        Ok(Self {
            pattern: Box::from(pattern),
            dfa,
        })
    }

    /// Checks if the whole input is in the language of this regex. Runs the DFA over the
    /// input byte by byte; a byte without a transition rejects immediately
    pub fn accepts(&self, input: &str) -> bool {
        self.dfa.accepts(input)
    }

    /// Checks if any contiguous substring of the input (the empty one included) is in the
    /// language of this regex. Scans forward from every start position, so the worst case is
    /// quadratic in the input length. Since the whole input is a substring of itself,
    /// everything accepted by [Regex::accepts] is also accepted here
    pub fn test(&self, input: &str) -> bool {
        let bytes = input.as_bytes();
        (0..=bytes.len()).any(|start| {
            let mut eval = self.dfa.evaluator();
            if eval.is_accepting() {
                return true;
            }
            for &byte in &bytes[start..] {
                if eval.step(byte).is_none() {
                    return false;
                }
                if eval.is_accepting() {
                    return true;
                }
            }
            false
        })
    }

    /// Gets the pattern this regex was compiled from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Gets the compiled automaton, e.g. for printing its transition table
    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
