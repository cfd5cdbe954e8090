//! # Nondeterministic Finite Automaton with ε-moves
//! The NFA module includes the [Nfa] struct, the intermediate product of compilation: a
//! [syntax tree](crate::ast::Ast) is turned into an ε-NFA by the
//! [Thompson construction](Nfa::from_ast), and the ε-NFA is turned into a
//! [Dfa](crate::dfa::Dfa) by the [subset construction](Nfa::to_dfa).
//!
//! The automaton is stored as an arena: a vector of [nodes](NfaNode), with every
//! [edge](Edge) naming its target node by index into that vector. Node indices double as the
//! node ids used to name DFA states during the subset construction: they are assigned
//! monotonically over one compilation, so equal id sets always describe equal node sets.
//!
//! A freshly built NFA has exactly one start and one end node, and the end node is the only
//! accepting one:
//!
//! ```
//! use sregex::nfa::Nfa;
//! use sregex::parser;
//!
//! let ast = parser::regex("a|b").unwrap();
//! let nfa = Nfa::from_ast(&ast);
//! assert_eq!(nfa.states().len(), 6);
//! assert_eq!(nfa.language(), b"ab");
//!
//! let dfa = nfa.to_dfa();
//! assert!(dfa.accepts("a"));
//! assert!(dfa.accepts("b"));
//! assert!(!dfa.accepts("ab"));
//! ```

use crate::dfa::{Dfa, DfaState};
use crate::table::Table;
use std::collections::{HashMap, HashSet};

mod build;

/// An ε-NFA produced by the Thompson construction, holding all of its nodes in an arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) nodes: Vec<NfaNode>,
    /// Every byte appearing on a non-ε edge, sorted ascending. This is the input alphabet of
    /// the DFA built from this NFA
    pub(crate) language: Vec<u8>,
}

/// A state in an NFA, owning its outgoing edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfaNode {
    pub(crate) accepting: bool,
    pub(crate) edges: Vec<Edge>,
}

/// A transition to another node, by arena index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub(crate) label: Label,
    pub(crate) to: usize,
}

/// An edge label: either a concrete byte consumed by the transition, or ε for a transition
/// taken without consuming input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Epsilon,
    Byte(u8),
}

impl NfaNode {
    /// Checks if this node is accepting
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Gets the outgoing edges of this node
    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }
}

impl Edge {
    /// Gets the label of this edge
    pub fn label(&self) -> Label {
        self.label
    }

    /// Gets the index of the target node
    pub fn to(&self) -> usize {
        self.to
    }
}

impl Nfa {
    /// Gets the nodes of this NFA. The start and end node indices refer into this slice
    pub fn states(&self) -> &[NfaNode] {
        self.nodes.as_slice()
    }

    /// Gets the index of the start node
    pub fn start_index(&self) -> usize {
        self.start
    }

    /// Gets the index of the end node, the single accepting node of a freshly built NFA
    pub fn end_index(&self) -> usize {
        self.end
    }

    /// Gets the language of this NFA: every byte appearing on a non-ε edge, sorted ascending.
    /// Input bytes outside this set can never be consumed
    pub fn language(&self) -> &[u8] {
        &self.language
    }

    /// Gives the ε-closure of a node, given the node index: the least set containing the node
    /// and closed under ε-transitions. Returns `None` for an out-of-bounds index
    pub fn closure(&self, start: usize) -> Option<HashSet<usize>> {
        (start < self.nodes.len()).then(|| self.closure_set(HashSet::from([start])))
    }

    /// Extends a set of nodes to its ε-closure
    fn closure_set(&self, mut set: HashSet<usize>) -> HashSet<usize> {
        let mut frontier: Vec<usize> = set.iter().copied().collect();
        while let Some(node) = frontier.pop() {
            for edge in &self.nodes[node].edges {
                if edge.label == Label::Epsilon && set.insert(edge.to) {
                    frontier.push(edge.to);
                }
            }
        }
        set
    }

    /// The set of nodes reachable from `from` by consuming exactly `symbol`
    fn move_set(&self, from: &[usize], symbol: u8) -> HashSet<usize> {
        from.iter()
            .flat_map(|&node| self.nodes[node].edges.iter())
            .filter(|edge| edge.label == Label::Byte(symbol))
            .map(|edge| edge.to)
            .collect()
    }

    /// The deduplicated non-ε labels leaving any node in `from`, sorted ascending
    fn transition_symbols(&self, from: &[usize]) -> Vec<u8> {
        let mut symbols: Vec<u8> = from
            .iter()
            .flat_map(|&node| self.nodes[node].edges.iter())
            .filter_map(|edge| match edge.label {
                Label::Byte(b) => Some(b),
                Label::Epsilon => None,
            })
            .collect();
        symbols.sort_unstable();
        symbols.dedup();
        symbols
    }

    /// Converts this NFA to a DFA using the subset construction. Each DFA state corresponds
    /// to the ε-closure of a set of NFA nodes reachable on some input prefix, and is named by
    /// the sorted `/`-joined node ids of that closure. Only reachable closures are
    /// constructed, so the result usually stays far below the `2^n` worst case.
    ///
    /// Transitions are only materialized for symbols some member node can actually consume;
    /// the DFA rejects on any other byte rather than entering an explicit dead state.
    pub fn to_dfa(&self) -> Dfa {
        let alphabet = self.language.clone();
        // Mapping sorted closure ids to DFA state index
        let mut index_of: HashMap<Vec<usize>, usize> = HashMap::new();
        let mut states: Vec<DfaState> = Vec::new();
        // Closures whose transitions are still unexplored
        let mut worklist: Vec<Vec<usize>> = Vec::new();

        let start_set = Self::set_to_vec(self.closure_set(HashSet::from([self.start])));
        index_of.insert(start_set.clone(), 0);
        states.push(self.dfa_state(&start_set, alphabet.len()));
        worklist.push(start_set);

        while let Some(set) = worklist.pop() {
            let from = index_of[&set];
            for symbol in self.transition_symbols(&set) {
                let target = Self::set_to_vec(self.closure_set(self.move_set(&set, symbol)));
                let to = if let Some(&idx) = index_of.get(&target) {
                    idx
                } else {
                    let idx = states.len();
                    states.push(self.dfa_state(&target, alphabet.len()));
                    index_of.insert(target.clone(), idx);
                    worklist.push(target);
                    idx
                };
                let column = alphabet
                    .binary_search(&symbol)
                    .expect("transition symbols are drawn from the cached language");
                states[from].transitions[column] = Some(to);
            }
        }

        Dfa {
            alphabet,
            states,
            initial_state: 0,
        }
    }

    fn dfa_state(&self, closure: &[usize], alphabet_len: usize) -> DfaState {
        let name = closure
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("/");
        DfaState {
            name: name.into_boxed_str(),
            accepting: closure.iter().any(|&id| self.nodes[id].accepting),
            transitions: vec![None; alphabet_len],
        }
    }

    /// Converts a HashSet (which is not hashable) to a sorted Vec (which is) in a
    /// deterministic way
    fn set_to_vec(set: HashSet<usize>) -> Vec<usize> {
        let mut vec: Vec<usize> = set.into_iter().collect();
        vec.sort_unstable();
        vec
    }

    /// Generates a table of this NFA suitable for printing, with one row per node and one
    /// column per language byte (plus ε)
    pub fn to_table(&self) -> String {
        self.gen_table("ε", "→")
    }

    /// Generates a table of this NFA suitable for printing, using only ASCII markers
    pub fn ascii_table(&self) -> String {
        self.gen_table("eps", "->")
    }

    fn gen_table(&self, eps: &str, arrow: &str) -> String {
        let mut table = Table::default();

        let mut head = vec![String::new(), String::new(), String::new(), eps.to_string()];
        head.extend(self.language.iter().map(|&b| crate::chars::symbol_label(b)));
        table.push_row(head);

        for (idx, node) in self.nodes.iter().enumerate() {
            let mut row = vec![
                if idx == self.start { arrow.to_string() } else { String::new() },
                if node.accepting { "*".to_string() } else { String::new() },
                idx.to_string(),
            ];
            let targets = |label: Label| {
                let mut to: Vec<usize> = node
                    .edges
                    .iter()
                    .filter(|edge| edge.label == label)
                    .map(|edge| edge.to)
                    .collect();
                to.sort_unstable();
                let inner = to
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{{{inner}}}")
            };
            row.push(targets(Label::Epsilon));
            row.extend(self.language.iter().map(|&b| targets(Label::Byte(b))));
            table.push_row(row);
        }
        table.render(" ")
    }
}
