//! Followpos computation.
//!
//! Second phase of annotation: the tree's own attributes are already fixed,
//! so a single traversal can apply the two propagation rules and produce an
//! immutable table keyed by position. Nothing in the tree is mutated.

use std::collections::BTreeSet;

use crate::tree::{Expr, Node, Pos, SyntaxTree};

/// Immutable mapping from each position to the set of positions that can
/// immediately follow it in some match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowTable {
    follow: Vec<BTreeSet<Pos>>,
}

impl FollowTable {
    /// Build the table with one pass over the tree.
    ///
    /// Rules: for Concat(L, R), every position in lastpos(L) is followed by
    /// firstpos(R); for Star(C), every position in lastpos(C) is followed by
    /// firstpos(C). Union nodes contribute no edges of their own.
    pub fn build(tree: &SyntaxTree) -> Self {
        let mut follow = vec![BTreeSet::new(); tree.position_count()];
        visit(tree.root(), &mut follow);
        Self { follow }
    }

    /// Positions that can follow `pos`, or `None` if `pos` is out of range.
    pub fn get(&self, pos: Pos) -> Option<&BTreeSet<Pos>> {
        self.follow.get(pos)
    }
}

fn visit(node: &Node, follow: &mut [BTreeSet<Pos>]) {
    match node.expr() {
        Expr::Concat(left, right) => {
            for &pos in left.lastpos() {
                follow[pos].extend(right.firstpos().iter().copied());
            }
            visit(left, follow);
            visit(right, follow);
        }
        Expr::Star(child) => {
            // firstpos/lastpos of the Star equal the child's
            for &pos in node.lastpos() {
                follow[pos].extend(node.firstpos().iter().copied());
            }
            visit(child, follow);
        }
        Expr::Union(left, right) => {
            visit(left, follow);
            visit(right, follow);
        }
        Expr::Leaf { .. } | Expr::End { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(positions: &[usize]) -> BTreeSet<usize> {
        positions.iter().copied().collect()
    }

    #[test]
    fn test_simple_concat() {
        // positions: a=0, b=1, end=2
        let tree = SyntaxTree::parse("ab").unwrap();
        let follow = FollowTable::build(&tree);
        assert_eq!(follow.get(0), Some(&set(&[1])));
        assert_eq!(follow.get(1), Some(&set(&[2])));
        assert_eq!(follow.get(2), Some(&set(&[])));
        assert_eq!(follow.get(99), None);
    }

    #[test]
    fn test_union_adds_no_edges() {
        // positions: a=0, b=1, end=2
        let tree = SyntaxTree::parse("a|b").unwrap();
        let follow = FollowTable::build(&tree);
        assert_eq!(follow.get(0), Some(&set(&[2])));
        assert_eq!(follow.get(1), Some(&set(&[2])));
    }

    #[test]
    fn test_dragon_book_pattern() {
        // (a|b)*abb, positions a=0, b=1, a=2, b=3, b=4, end=5
        let tree = SyntaxTree::parse("(a|b)*abb").unwrap();
        let follow = FollowTable::build(&tree);
        assert_eq!(follow.get(0), Some(&set(&[0, 1, 2])));
        assert_eq!(follow.get(1), Some(&set(&[0, 1, 2])));
        assert_eq!(follow.get(2), Some(&set(&[3])));
        assert_eq!(follow.get(3), Some(&set(&[4])));
        assert_eq!(follow.get(4), Some(&set(&[5])));
        assert_eq!(follow.get(5), Some(&set(&[])));
    }

    #[test]
    fn test_tree_convenience_builds_the_same_table() {
        let tree = SyntaxTree::parse("(a|b)*abb").unwrap();
        assert_eq!(tree.follow_table(), FollowTable::build(&tree));
    }

    #[test]
    fn test_nested_star() {
        // (a*)*, positions a=0, end=1
        let tree = SyntaxTree::parse("(a*)*").unwrap();
        let follow = FollowTable::build(&tree);
        assert_eq!(follow.get(0), Some(&set(&[0, 1])));
    }
}
