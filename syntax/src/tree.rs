//! Syntax tree types for regular expression patterns.
//!
//! Nodes form a strict ownership tree. The three derived attributes
//! (`nullable`, `firstpos`, `lastpos`) are computed by the constructors and
//! never change afterwards; `followpos` lives in a separate table built by a
//! later pass (see `follow`).

use std::collections::BTreeSet;
use std::fmt;

use crate::follow::FollowTable;

/// A leaf position: a dense integer identifying one symbol occurrence (or an
/// end marker) in left-to-right source order.
pub type Pos = usize;

/// Identifies which pattern an end marker (and hence an accept state) belongs
/// to when several patterns are multiplexed into one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternId(pub usize);

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// The node variants of the supported grammar.
///
/// Closed by design: every traversal matches exhaustively, so adding a
/// variant forces each of them to be revisited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Sequence of two sub-patterns.
    Concat(Box<Node>, Box<Node>),
    /// Alternation of two sub-patterns.
    Union(Box<Node>, Box<Node>),
    /// Zero-or-more repetition.
    Star(Box<Node>),
    /// A single input symbol.
    Leaf { pos: Pos, symbol: char },
    /// Sentinel marking "pattern fully matched"; carries the pattern label
    /// and contributes no alphabet symbol.
    End { pos: Pos, pattern: PatternId },
}

/// A tree node with its derived attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    nullable: bool,
    firstpos: BTreeSet<Pos>,
    lastpos: BTreeSet<Pos>,
    expr: Expr,
}

impl Node {
    pub fn leaf(pos: Pos, symbol: char) -> Self {
        Self {
            nullable: false,
            firstpos: BTreeSet::from([pos]),
            lastpos: BTreeSet::from([pos]),
            expr: Expr::Leaf { pos, symbol },
        }
    }

    pub fn end(pos: Pos, pattern: PatternId) -> Self {
        Self {
            nullable: false,
            firstpos: BTreeSet::from([pos]),
            lastpos: BTreeSet::from([pos]),
            expr: Expr::End { pos, pattern },
        }
    }

    pub fn concat(left: Node, right: Node) -> Self {
        let nullable = left.nullable && right.nullable;
        let firstpos = if left.nullable {
            left.firstpos.union(&right.firstpos).copied().collect()
        } else {
            left.firstpos.clone()
        };
        let lastpos = if right.nullable {
            left.lastpos.union(&right.lastpos).copied().collect()
        } else {
            right.lastpos.clone()
        };
        Self {
            nullable,
            firstpos,
            lastpos,
            expr: Expr::Concat(Box::new(left), Box::new(right)),
        }
    }

    pub fn union_of(left: Node, right: Node) -> Self {
        let nullable = left.nullable || right.nullable;
        let firstpos = left.firstpos.union(&right.firstpos).copied().collect();
        // Unlike Concat, lastpos unions unconditionally here.
        let lastpos = left.lastpos.union(&right.lastpos).copied().collect();
        Self {
            nullable,
            firstpos,
            lastpos,
            expr: Expr::Union(Box::new(left), Box::new(right)),
        }
    }

    pub fn star(child: Node) -> Self {
        Self {
            nullable: true,
            firstpos: child.firstpos.clone(),
            lastpos: child.lastpos.clone(),
            expr: Expr::Star(Box::new(child)),
        }
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn firstpos(&self) -> &BTreeSet<Pos> {
        &self.firstpos
    }

    pub fn lastpos(&self) -> &BTreeSet<Pos> {
        &self.lastpos
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

// ==================== SYNTAX TREE ====================

/// What a position stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PosKind {
    Symbol(char),
    End(PatternId),
}

/// An immutable, fully annotated syntax tree for one or more patterns.
///
/// Built by [`SyntaxTree::parse`] / [`SyntaxTree::parse_many`]; positions are
/// dense `0..position_count()` in source order, with each pattern's end
/// marker directly after that pattern's leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    root: Node,
    positions: Vec<PosKind>,
    alphabet: BTreeSet<char>,
    pattern_count: usize,
}

impl SyntaxTree {
    pub(crate) fn new(root: Node, positions: Vec<PosKind>, pattern_count: usize) -> Self {
        let alphabet = positions
            .iter()
            .filter_map(|kind| match kind {
                PosKind::Symbol(symbol) => Some(*symbol),
                PosKind::End(_) => None,
            })
            .collect();
        Self {
            root,
            positions,
            alphabet,
            pattern_count,
        }
    }

    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    /// The leaf positions that can match the first input symbol.
    ///
    /// This is the kernel of the automaton's initial state.
    pub fn firstpos_root(&self) -> &BTreeSet<Pos> {
        &self.root.firstpos
    }

    /// Distinct symbols with at least one leaf; end markers contribute none.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Total number of positions, end markers included.
    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of symbol leaves, end markers excluded.
    pub fn leaf_count(&self) -> usize {
        self.positions.len() - self.pattern_count
    }

    /// How many patterns this tree multiplexes.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// The symbol a position matches, or `None` for end markers and
    /// out-of-range positions.
    pub fn symbol_at(&self, pos: Pos) -> Option<char> {
        match self.positions.get(pos) {
            Some(PosKind::Symbol(symbol)) => Some(*symbol),
            _ => None,
        }
    }

    /// The pattern label of an end-marker position, `None` otherwise.
    pub fn pattern_at(&self, pos: Pos) -> Option<PatternId> {
        match self.positions.get(pos) {
            Some(PosKind::End(pattern)) => Some(*pattern),
            _ => None,
        }
    }

    /// Compute the followpos table for this tree.
    pub fn follow_table(&self) -> FollowTable {
        FollowTable::build(self)
    }

    /// All end-marker positions with their pattern labels.
    pub fn end_markers(&self) -> impl Iterator<Item = (Pos, PatternId)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(pos, kind)| match kind {
                PosKind::End(pattern) => Some((pos, *pattern)),
                PosKind::Symbol(_) => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_attributes() {
        let leaf = Node::leaf(0, 'a');
        assert!(!leaf.nullable());
        assert_eq!(leaf.firstpos(), &BTreeSet::from([0]));
        assert_eq!(leaf.lastpos(), &BTreeSet::from([0]));
    }

    #[test]
    fn test_star_is_nullable() {
        let star = Node::star(Node::leaf(0, 'a'));
        assert!(star.nullable());
        assert_eq!(star.firstpos(), &BTreeSet::from([0]));
        assert_eq!(star.lastpos(), &BTreeSet::from([0]));
    }

    #[test]
    fn test_concat_gates_on_nullability() {
        // a b: firstpos sees only the left side, lastpos only the right
        let ab = Node::concat(Node::leaf(0, 'a'), Node::leaf(1, 'b'));
        assert!(!ab.nullable());
        assert_eq!(ab.firstpos(), &BTreeSet::from([0]));
        assert_eq!(ab.lastpos(), &BTreeSet::from([1]));

        // a* b: the nullable left side lets firstpos reach into the right
        let star_b = Node::concat(Node::star(Node::leaf(0, 'a')), Node::leaf(1, 'b'));
        assert_eq!(star_b.firstpos(), &BTreeSet::from([0, 1]));
        assert_eq!(star_b.lastpos(), &BTreeSet::from([1]));

        // a b*: symmetric for lastpos
        let a_star = Node::concat(Node::leaf(0, 'a'), Node::star(Node::leaf(1, 'b')));
        assert_eq!(a_star.firstpos(), &BTreeSet::from([0]));
        assert_eq!(a_star.lastpos(), &BTreeSet::from([0, 1]));
    }

    #[test]
    fn test_union_always_unions_both_sides() {
        let ab = Node::union_of(Node::leaf(0, 'a'), Node::leaf(1, 'b'));
        assert!(!ab.nullable());
        assert_eq!(ab.firstpos(), &BTreeSet::from([0, 1]));
        assert_eq!(ab.lastpos(), &BTreeSet::from([0, 1]));

        let star_or_b = Node::union_of(Node::star(Node::leaf(0, 'a')), Node::leaf(1, 'b'));
        assert!(star_or_b.nullable());
        assert_eq!(star_or_b.lastpos(), &BTreeSet::from([0, 1]));
    }

    #[test]
    fn test_alphabet_excludes_end_markers() {
        let root = Node::concat(Node::leaf(0, 'a'), Node::end(1, PatternId(0)));
        let tree = SyntaxTree::new(
            root,
            vec![PosKind::Symbol('a'), PosKind::End(PatternId(0))],
            1,
        );
        assert_eq!(tree.alphabet(), &BTreeSet::from(['a']));
        assert_eq!(tree.symbol_at(1), None);
        assert_eq!(tree.pattern_at(1), Some(PatternId(0)));
        assert_eq!(tree.pattern_at(0), None);
        assert_eq!(tree.pattern_at(7), None);
    }
}
