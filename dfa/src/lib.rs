//! drift DFA
//!
//! Direct subset construction: builds a deterministic finite automaton
//! straight from an annotated syntax tree's follow-positions, with no
//! intermediate NFA.
//!
//! Responsibilities:
//! - Worklist construction over kernels (sets of leaf positions)
//! - Kernel deduplication by value equality
//! - Accept marking and pattern attribution from end markers
//! - The immutable, read-only [`Dfa`] container

mod automaton;
mod builder;
mod error;

pub use automaton::{Dfa, StateId};
pub use error::{BuildError, BuildResult};
