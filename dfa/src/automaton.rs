//! The deterministic automaton container.
//!
//! Immutable once built: the only mutating methods are crate-internal and
//! used by the builder. Everything public is a read-only query, which is the
//! whole surface collaborators (renderers, matchers) get to see.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use drift_syntax::PatternId;

/// Opaque identity of a DFA state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub(crate) usize);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// A deterministic finite automaton over `char` symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    alphabet: BTreeSet<char>,
    pattern_count: usize,
    /// Per-state successor map; at most one successor per symbol.
    transitions: Vec<BTreeMap<char, StateId>>,
    /// Per-state accept label; `None` for non-accepting states.
    accept: Vec<Option<PatternId>>,
}

impl Dfa {
    pub(crate) fn new(alphabet: BTreeSet<char>, pattern_count: usize) -> Self {
        Self {
            alphabet,
            pattern_count,
            transitions: Vec::new(),
            accept: Vec::new(),
        }
    }

    pub(crate) fn add_state(&mut self) -> StateId {
        let id = StateId(self.transitions.len());
        self.transitions.push(BTreeMap::new());
        self.accept.push(None);
        id
    }

    pub(crate) fn mark_accept(&mut self, state: StateId, pattern: PatternId) {
        self.accept[state.0] = Some(pattern);
    }

    pub(crate) fn add_transition(&mut self, from: StateId, symbol: char, to: StateId) {
        self.transitions[from.0].insert(symbol, to);
    }

    /// The designated initial state.
    pub fn start(&self) -> StateId {
        StateId(0)
    }

    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    /// All states, in id order.
    pub fn states(&self) -> impl Iterator<Item = StateId> {
        (0..self.transitions.len()).map(StateId)
    }

    /// Symbols with at least one labeled leaf in the originating pattern(s).
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// How many patterns were multiplexed into this automaton.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// The successor of `state` on `symbol`, if any.
    pub fn successor(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.transitions.get(state.0)?.get(&symbol).copied()
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        matches!(self.accept.get(state.0), Some(Some(_)))
    }

    /// The pattern this accept state belongs to, `None` for non-accepting
    /// states.
    pub fn accept_label(&self, state: StateId) -> Option<PatternId> {
        self.accept.get(state.0).copied().flatten()
    }

    /// Outgoing transitions of `state`, sorted by symbol.
    pub fn transitions_from(&self, state: StateId) -> impl Iterator<Item = (char, StateId)> + '_ {
        self.transitions
            .get(state.0)
            .into_iter()
            .flat_map(|map| map.iter().map(|(&symbol, &to)| (symbol, to)))
    }
}
