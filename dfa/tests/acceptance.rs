//! End-to-end acceptance properties of built automata.
//!
//! Running input through the automaton is not a core operation, so these
//! tests walk the transition function with a local helper.

use drift_dfa::{Dfa, StateId};
use drift_syntax::{PatternId, SyntaxTree};

fn build(pattern: &str) -> Dfa {
    let tree = SyntaxTree::parse(pattern).unwrap();
    Dfa::build(&tree).unwrap()
}

fn walk(dfa: &Dfa, input: &str) -> Option<StateId> {
    let mut state = dfa.start();
    for symbol in input.chars() {
        state = dfa.successor(state, symbol)?;
    }
    Some(state)
}

fn accepts(dfa: &Dfa, input: &str) -> bool {
    walk(dfa, input).is_some_and(|state| dfa.is_accepting(state))
}

#[test]
fn accepts_strings_ending_in_abb() {
    let dfa = build("(a|b)*abb");
    for input in ["abb", "aabb", "babb", "ababb", "aaabb"] {
        assert!(accepts(&dfa, input), "should accept {input:?}");
    }
}

#[test]
fn rejects_strings_not_ending_in_abb() {
    let dfa = build("(a|b)*abb");
    for input in ["ab", "a", "abbb", "", "abbx"] {
        assert!(!accepts(&dfa, input), "should reject {input:?}");
    }
}

#[test]
fn union_matches_either_branch() {
    let dfa = build("ab|cd");
    assert!(accepts(&dfa, "ab"));
    assert!(accepts(&dfa, "cd"));
    assert!(!accepts(&dfa, "ad"));
    assert!(!accepts(&dfa, "abcd"));
}

#[test]
fn star_matches_zero_or_more() {
    let dfa = build("a*");
    assert!(accepts(&dfa, ""));
    assert!(accepts(&dfa, "a"));
    assert!(accepts(&dfa, "aaaa"));
    assert!(!accepts(&dfa, "b"));
}

#[test]
fn escaped_metacharacters_match_literally() {
    let dfa = build(r"\(a\|b\)");
    assert!(accepts(&dfa, "(a|b)"));
    assert!(!accepts(&dfa, "a"));
}

#[test]
fn rebuild_from_same_pattern_accepts_the_same_strings() {
    let inputs = ["", "a", "ab", "abb", "aabb", "abba", "bbabb"];
    let first = build("(a|b)*abb");
    let second = build("(a|b)*abb");
    for input in inputs {
        assert_eq!(accepts(&first, input), accepts(&second, input));
    }
}

#[test]
fn multiplexed_build_attributes_matches_to_patterns() {
    let tree = SyntaxTree::parse_many(&["ab", "cd"]).unwrap();
    let dfa = Dfa::build(&tree).unwrap();

    let ab = walk(&dfa, "ab").unwrap();
    assert_eq!(dfa.accept_label(ab), Some(PatternId(0)));
    let cd = walk(&dfa, "cd").unwrap();
    assert_eq!(dfa.accept_label(cd), Some(PatternId(1)));

    assert!(walk(&dfa, "ad").is_none());
}
