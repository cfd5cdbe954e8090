//! # Deterministic Finite Automaton
//! The DFA module includes the [Dfa] struct, the final product of compilation. The only way
//! to create one is the [subset construction](crate::nfa::Nfa::to_dfa); each of its states
//! corresponds to an ε-closure of NFA nodes and is named by the sorted `/`-joined ids of that
//! closure.
//!
//! The input alphabet of a DFA is the language of the NFA it was built from. Transitions are
//! only present for bytes some underlying NFA node could consume; stepping on any other byte
//! rejects immediately, there is no explicit dead state.
//!
//! ```
//! use sregex::nfa::Nfa;
//! use sregex::parser;
//!
//! let ast = parser::regex("a*b").unwrap();
//! let dfa = Nfa::from_ast(&ast).to_dfa();
//! assert!(dfa.accepts("aaab"));
//! assert!(dfa.accepts("b"));
//! assert!(!dfa.accepts("ba"));
//! assert!(!dfa.accepts("axb")); // 'x' is outside the alphabet
//! ```
//!
//! Evaluation itself is driven by a [DfaEvaluator], a cheap cursor over the automaton that
//! consumes one byte at a time; see [Dfa::evaluator] to use it directly.

use crate::chars;
use crate::table::Table;
pub use eval::DfaEvaluator;

pub mod eval;

/// A deterministic finite automaton over a byte alphabet. States are stored in a vector;
/// transitions name their target state by index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    pub(crate) alphabet: Vec<u8>,
    pub(crate) states: Vec<DfaState>,
    pub(crate) initial_state: usize,
}

/// A state in a DFA: its name (the ids of the NFA nodes in its ε-closure), whether it is
/// accepting, and one optional transition per alphabet byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaState {
    pub(crate) name: Box<str>,
    pub(crate) accepting: bool,
    pub(crate) transitions: Vec<Option<usize>>,
}

impl DfaState {
    /// Gets the name of this state: the sorted `/`-joined ids of the NFA nodes it was
    /// constructed from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks if this state is accepting, that is, if its ε-closure contained an accepting
    /// NFA node
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Gets the transitions of this state as target state indices, one entry per byte of the
    /// alphabet in the alphabet's ordering. `None` means the byte rejects from this state
    pub fn transitions(&self) -> &[Option<usize>] {
        self.transitions.as_slice()
    }
}

impl Dfa {
    /// Checks if this automaton accepts the given input as a whole. This is equivalent to
    /// getting the evaluator, stepping it over every byte and checking if it is accepting
    pub fn accepts(&self, input: &str) -> bool {
        let mut eval = self.evaluator();
        eval.step_multiple(input.as_bytes());
        eval.is_accepting()
    }

    /// Gets an evaluator, a cursor used to run the automaton over input byte by byte
    pub fn evaluator(&self) -> DfaEvaluator<'_> {
        self.into()
    }

    /// Gets the alphabet of this DFA, sorted ascending
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    /// Gets the states of this DFA
    pub fn states(&self) -> &[DfaState] {
        self.states.as_slice()
    }

    /// Gets the initial state of this DFA
    pub fn initial_state(&self) -> &DfaState {
        &self.states[self.initial_state]
    }

    /// Gets the index of the initial state of this DFA
    pub fn initial_state_index(&self) -> usize {
        self.initial_state
    }

    /// The position of a byte in the alphabet, if it is part of it
    pub(crate) fn symbol_index(&self, symbol: u8) -> Option<usize> {
        self.alphabet.binary_search(&symbol).ok()
    }

    /// Generates a table of this DFA suitable for printing, with one row per state and one
    /// column per alphabet byte. Missing transitions are rendered as `-`
    pub fn to_table(&self) -> String {
        self.gen_table("→")
    }

    /// Generates a table of this DFA suitable for printing, using only ASCII markers
    pub fn ascii_table(&self) -> String {
        self.gen_table("->")
    }

    fn gen_table(&self, arrow: &str) -> String {
        let mut table = Table::default();

        let mut head = vec![String::new(), String::new(), String::new()];
        head.extend(self.alphabet.iter().map(|&b| chars::symbol_label(b)));
        table.push_row(head);

        for (idx, state) in self.states.iter().enumerate() {
            let mut row = vec![
                if idx == self.initial_state {
                    arrow.to_string()
                } else {
                    String::new()
                },
                if state.accepting {
                    "*".to_string()
                } else {
                    String::new()
                },
                state.name.to_string(),
            ];
            row.extend(state.transitions.iter().map(|target| match target {
                Some(to) => self.states[*to].name.to_string(),
                None => "-".to_string(),
            }));
            table.push_row(row);
        }
        table.render(" ")
    }
}
