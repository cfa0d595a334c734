//! Structural-decomposition parser for pattern strings.
//!
//! Instead of a token-by-token parser, each call peels the outermost
//! construct off a slice of the pattern and recurses on the pieces:
//!
//! 1. a top-level unescaped `|` splits into a Union (lowest precedence,
//!    right-associating because each split recurses on the full remainder);
//! 2. a leading `(` consumes its matching `)`, with an optional postfix `*`;
//! 3. otherwise the head is a single leaf (one character, or `\x` escaped),
//!    with an optional postfix `*`;
//! 4. anything after the consumed head joins by implicit Concat.
//!
//! Leaf positions are assigned in constructor-execution order, which this
//! decomposition makes left-to-right textual order. Later phases rely on the
//! positions being dense integers in source order.

use crate::error::{ParseError, ParseResult};
use crate::tree::{Node, PatternId, PosKind, SyntaxTree};

impl SyntaxTree {
    /// Parse a single pattern and append its end marker (pattern label 0).
    pub fn parse(pattern: &str) -> ParseResult<Self> {
        Self::parse_many(&[pattern])
    }

    /// Parse several patterns into one multiplexed tree.
    ///
    /// Each pattern is terminated by an end marker labeled with its index,
    /// and the augmented trees are folded into a Union. Positions stay
    /// globally dense across patterns.
    pub fn parse_many(patterns: &[&str]) -> ParseResult<Self> {
        let mut positions = Vec::new();
        let mut root: Option<Node> = None;

        for (index, pattern) in patterns.iter().enumerate() {
            let node = parse_pattern(pattern, &mut positions)?;
            let end = Node::end(positions.len(), PatternId(index));
            positions.push(PosKind::End(PatternId(index)));
            let marked = Node::concat(node, end);
            root = Some(match root {
                Some(prev) => Node::union_of(prev, marked),
                None => marked,
            });
        }

        match root {
            Some(root) => Ok(SyntaxTree::new(root, positions, patterns.len())),
            None => Err(ParseError::Empty),
        }
    }
}

fn parse_pattern(pattern: &str, positions: &mut Vec<PosKind>) -> ParseResult<Node> {
    let chars: Vec<char> = pattern.chars().collect();
    validate(&chars)?;
    parse_expr(&chars, 0, positions)
}

/// Whole-pattern structural checks, done once up front so the recursive
/// decomposition never has to see an unbalanced slice. Offsets are character
/// offsets into the pattern.
fn validate(chars: &[char]) -> ParseResult<()> {
    if chars.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut opens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                if i + 1 == chars.len() {
                    return Err(ParseError::DanglingEscape);
                }
                i += 1;
            }
            '(' => opens.push(i),
            ')' => {
                if opens.pop().is_none() {
                    return Err(ParseError::UnmatchedClose { offset: i });
                }
            }
            _ => {}
        }
        i += 1;
    }
    if let Some(&offset) = opens.first() {
        return Err(ParseError::UnbalancedParen { offset });
    }
    Ok(())
}

/// Parse one slice of the pattern. `base` is the slice's character offset in
/// the full pattern, carried for error reporting only.
fn parse_expr(s: &[char], base: usize, positions: &mut Vec<PosKind>) -> ParseResult<Node> {
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    // Top-level alternation splits first: union is lowest precedence.
    let mut depth = 0i32;
    let mut i = 0;
    while i < s.len() {
        match s[i] {
            // "\(" and "\)" and "\|" are literals, not structure
            '\\' => i += 1,
            '(' => depth += 1,
            ')' => depth -= 1,
            '|' if depth == 0 => {
                if i == 0 || i + 1 == s.len() {
                    return Err(ParseError::EmptyAlternation { offset: base + i });
                }
                let left = parse_expr(&s[..i], base, positions)?;
                let right = parse_expr(&s[i + 1..], base + i + 1, positions)?;
                return Ok(Node::union_of(left, right));
            }
            _ => {}
        }
        i += 1;
    }

    // A group at the front: consume the matching ')', then an optional '*',
    // then concatenate whatever trails.
    if s[0] == '(' {
        let close = matching_close(s).ok_or(ParseError::UnbalancedParen { offset: base })?;
        let starred = close + 1 < s.len() && s[close + 1] == '*';

        if starred && close + 2 < s.len() {
            // (...)*rest — reparsing the starred group keeps position order
            let left = parse_expr(&s[..close + 2], base, positions)?;
            let right = parse_expr(&s[close + 2..], base + close + 2, positions)?;
            return Ok(Node::concat(left, right));
        }

        if close == 1 {
            return Err(ParseError::EmptyGroup { offset: base });
        }
        let inner = parse_expr(&s[1..close], base + 1, positions)?;

        if starred {
            return Ok(Node::star(inner));
        }
        if close + 1 < s.len() {
            let rest = parse_expr(&s[close + 1..], base + close + 1, positions)?;
            return Ok(Node::concat(inner, rest));
        }
        return Ok(inner);
    }

    // A single leaf: one character, or an escaped pair taken literally.
    let head_len = if s[0] == '\\' { 2 } else { 1 };
    debug_assert!(head_len <= s.len(), "validate catches dangling escapes");
    let symbol = s[head_len - 1];

    let starred = s.len() > head_len && s[head_len] == '*';
    let consumed = head_len + usize::from(starred);

    let leaf = Node::leaf(positions.len(), symbol);
    positions.push(PosKind::Symbol(symbol));
    let node = if starred { Node::star(leaf) } else { leaf };

    if consumed < s.len() {
        let rest = parse_expr(&s[consumed..], base + consumed, positions)?;
        Ok(Node::concat(node, rest))
    } else {
        Ok(node)
    }
}

/// Index of the `)` matching the `(` at the start of `s`, skipping escaped
/// parentheses.
fn matching_close(s: &[char]) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = 0;
    while i < s.len() {
        match s[i] {
            '\\' => i += 1,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}
