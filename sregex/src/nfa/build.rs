//! Thompson construction: walks a syntax tree bottom-up, producing a sub-automaton with
//! exactly one start and one end node for every sub-tree, then wiring those fragments
//! together with ε-edges.

use super::{Edge, Label, Nfa, NfaNode};
use crate::ast::{Ast, RepetitionKind};
use crate::chars;

/// A sub-automaton under construction: the indices of its entry and exit nodes. All nodes
/// live in the builder's arena, so composing fragments never moves or copies them
#[derive(Debug, Clone, Copy)]
struct Frag {
    start: usize,
    end: usize,
}

#[derive(Debug, Default)]
struct Builder {
    nodes: Vec<NfaNode>,
}

impl Builder {
    fn node(&mut self) -> usize {
        self.nodes.push(NfaNode {
            accepting: false,
            edges: Vec::new(),
        });
        self.nodes.len() - 1
    }

    fn connect(&mut self, from: usize, label: Label, to: usize) {
        self.nodes[from].edges.push(Edge { label, to });
    }

    /// A fragment consuming exactly one byte out of the given set: one edge per byte, all
    /// from the new start to the new end
    fn byte_set(&mut self, bytes: impl IntoIterator<Item = u8>) -> Frag {
        let start = self.node();
        let end = self.node();
        for byte in bytes {
            self.connect(start, Label::Byte(byte), end);
        }
        self.nodes[end].accepting = true;
        Frag { start, end }
    }

    fn frag(&mut self, ast: &Ast) -> Frag {
        match ast {
            Ast::Literal(byte) => self.byte_set([*byte]),
            Ast::Dot => self.byte_set(chars::dot_bytes()),
            Ast::Class(kind) => self.byte_set(kind.bytes()),
            Ast::Bracketed(class) => self.byte_set(class.bytes()),
            Ast::Concat(left, right) => {
                let left = self.frag(left);
                let right = self.frag(right);
                // The right end stays the accepting end of the composite
                self.nodes[left.end].accepting = false;
                self.connect(left.end, Label::Epsilon, right.start);
                Frag {
                    start: left.start,
                    end: right.end,
                }
            }
            Ast::Alternation(left, right) => {
                let left = self.frag(left);
                let right = self.frag(right);
                self.nodes[left.end].accepting = false;
                self.nodes[right.end].accepting = false;
                let start = self.node();
                let end = self.node();
                self.connect(start, Label::Epsilon, left.start);
                self.connect(start, Label::Epsilon, right.start);
                self.connect(left.end, Label::Epsilon, end);
                self.connect(right.end, Label::Epsilon, end);
                self.nodes[end].accepting = true;
                Frag { start, end }
            }
            Ast::Repetition(kind, child) => {
                let child = self.frag(child);
                self.nodes[child.end].accepting = false;
                let start = self.node();
                let end = self.node();
                self.connect(start, Label::Epsilon, child.start);
                match kind {
                    RepetitionKind::ZeroOrOne => {
                        self.connect(start, Label::Epsilon, end);
                        self.connect(child.end, Label::Epsilon, end);
                    }
                    RepetitionKind::ZeroOrMore => {
                        self.connect(start, Label::Epsilon, end);
                        self.connect(child.end, Label::Epsilon, child.start);
                        self.connect(child.end, Label::Epsilon, end);
                    }
                    RepetitionKind::OneOrMore => {
                        self.connect(child.end, Label::Epsilon, child.start);
                        self.connect(child.end, Label::Epsilon, end);
                    }
                }
                self.nodes[end].accepting = true;
                Frag { start, end }
            }
        }
    }
}

impl Nfa {
    /// Builds an ε-NFA recognizing the language of the given syntax tree. The result has
    /// exactly one start and one end node, and the end node is the only accepting one
    pub fn from_ast(ast: &Ast) -> Nfa {
        let mut builder = Builder::default();
        let Frag { start, end } = builder.frag(ast);
        let nodes = builder.nodes;

        let mut language: Vec<u8> = nodes
            .iter()
            .flat_map(|node| node.edges.iter())
            .filter_map(|edge| match edge.label {
                Label::Byte(b) => Some(b),
                Label::Epsilon => None,
            })
            .collect();
        language.sort_unstable();
        language.dedup();

        Nfa {
            start,
            end,
            nodes,
            language,
        }
    }
}
