//! drift CLI
//!
//! Peripheral glue around the core crates: a driver that compiles patterns
//! and a Graphviz dot renderer for the result. Both consume only the
//! read-only automaton surface of `drift-dfa`.

pub mod dot;
