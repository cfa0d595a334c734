//! Construction error types.

use drift_syntax::PatternId;
use thiserror::Error;

use crate::automaton::StateId;

/// Errors that can occur while building an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A reachable state's kernel holds end markers of more than one
    /// multiplexed pattern, so the accept cannot be attributed.
    #[error("ambiguous accept in {state}: patterns {} match simultaneously", fmt_patterns(.patterns))]
    AmbiguousAccept {
        state: StateId,
        patterns: Vec<PatternId>,
    },
}

fn fmt_patterns(patterns: &[PatternId]) -> String {
    patterns
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for automaton construction.
pub type BuildResult<T> = Result<T, BuildError>;
