//! Direct subset construction over follow-positions.
//!
//! Every DFA state corresponds to one distinct kernel (set of leaf
//! positions); the construction is a breadth-first worklist loop seeded with
//! `firstpos(root)`. Kernels are deduplicated by value equality through a
//! hash map keyed by the canonical ordered set, so lookup is expected O(1)
//! per candidate. Termination is guaranteed because kernels are subsets of a
//! finite position range.

use std::collections::{BTreeSet, HashMap, VecDeque};

use drift_syntax::{PatternId, Pos, SyntaxTree};

use crate::automaton::{Dfa, StateId};
use crate::error::{BuildError, BuildResult};

impl Dfa {
    /// Build the automaton recognizing the tree's pattern(s).
    ///
    /// The tree and its follow table are only read during construction; the
    /// finished automaton holds no reference back to them.
    pub fn build(tree: &SyntaxTree) -> BuildResult<Self> {
        let follow = tree.follow_table();
        let mut dfa = Dfa::new(tree.alphabet().clone(), tree.pattern_count());
        let mut kernels: HashMap<BTreeSet<Pos>, StateId> = HashMap::new();
        let mut worklist: VecDeque<(BTreeSet<Pos>, StateId)> = VecDeque::new();

        let start_kernel = tree.firstpos_root().clone();
        let start = dfa.add_state();
        kernels.insert(start_kernel.clone(), start);
        worklist.push_back((start_kernel, start));

        while let Some((kernel, state)) = worklist.pop_front() {
            mark_accept(&mut dfa, tree, state, &kernel)?;

            for &symbol in tree.alphabet() {
                let mut next: BTreeSet<Pos> = BTreeSet::new();
                for &pos in &kernel {
                    if tree.symbol_at(pos) == Some(symbol) {
                        if let Some(follow_set) = follow.get(pos) {
                            next.extend(follow_set.iter().copied());
                        }
                    }
                }
                if next.is_empty() {
                    continue;
                }

                let target = match kernels.get(&next) {
                    Some(&existing) => existing,
                    None => {
                        let created = dfa.add_state();
                        kernels.insert(next.clone(), created);
                        worklist.push_back((next, created));
                        created
                    }
                };
                dfa.add_transition(state, symbol, target);
            }
        }

        Ok(dfa)
    }
}

/// A state accepts iff its kernel contains an end-marker position. End
/// markers of two different patterns in one kernel have no defined
/// precedence, so that case is an error rather than a silent first-match.
fn mark_accept(
    dfa: &mut Dfa,
    tree: &SyntaxTree,
    state: StateId,
    kernel: &BTreeSet<Pos>,
) -> BuildResult<()> {
    let patterns: Vec<PatternId> = tree
        .end_markers()
        .filter(|(pos, _)| kernel.contains(pos))
        .map(|(_, pattern)| pattern)
        .collect();

    if patterns.len() > 1 {
        return Err(BuildError::AmbiguousAccept { state, patterns });
    }
    if let Some(&pattern) = patterns.first() {
        dfa.mark_accept(state, pattern);
    }
    Ok(())
}
