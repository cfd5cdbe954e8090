use crate::dfa::{Dfa, DfaState};

#[derive(Debug, Clone)]
pub struct DfaEvaluator<'a> {
    dfa: &'a Dfa,
    current_state: usize,
    rejected: bool,
}

impl<'a> DfaEvaluator<'a> {
    pub fn is_accepting(&self) -> bool {
        self.current_state().map_or(false, DfaState::is_accepting)
    }

    pub fn current_state(&self) -> Option<&'a DfaState> {
        if self.rejected {
            None
        } else {
            Some(&self.dfa.states[self.current_state])
        }
    }

    /// Consumes one byte. Once a byte without a transition has been seen, the evaluator stays
    /// rejected no matter what follows
    pub fn step(&mut self, symbol: u8) -> Option<&'a DfaState> {
        if self.rejected {
            return None;
        }

        let target = self
            .dfa
            .symbol_index(symbol)
            .and_then(|idx| self.dfa.states[self.current_state].transitions[idx]);
        match target {
            None => {
                self.rejected = true;
                None
            }
            Some(next) => {
                self.current_state = next;
                Some(&self.dfa.states[next])
            }
        }
    }

    pub fn step_multiple(&mut self, symbols: &[u8]) -> Option<&'a DfaState> {
        for &symbol in symbols {
            self.step(symbol)?;
        }
        self.current_state()
    }
}

impl<'a> From<&'a Dfa> for DfaEvaluator<'a> {
    fn from(value: &'a Dfa) -> Self {
        Self {
            dfa: value,
            current_state: value.initial_state,
            rejected: false,
        }
    }
}
