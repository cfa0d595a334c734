//! drift Syntax
//!
//! This crate turns a regular-expression pattern string into the annotated
//! syntax tree that direct DFA construction consumes:
//! - Structural-decomposition parsing (literals, `\x` escapes, `|`, `(...)`,
//!   postfix `*`, implicit concatenation)
//! - Per-node `nullable` / `firstpos` / `lastpos`, fixed at construction
//! - The `followpos` table, computed as a separate immutable pass
//! - Error reporting with character offsets

mod error;
mod follow;
mod parser;
mod tree;

pub use error::{ParseError, ParseResult};
pub use follow::FollowTable;
pub use tree::{Expr, Node, PatternId, Pos, SyntaxTree};
